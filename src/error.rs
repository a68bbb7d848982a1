//! Error types for the matcher and annotator.

use thiserror::Error;

/// Result type alias for fallible operations of this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while configuring a search or a highlight pass.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Configuration that would produce undefined offsets.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}
