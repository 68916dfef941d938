//! Store error definitions.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    /// Reading or writing a language file failed
    #[error("failed to access language file: {0}")]
    Io(#[from] std::io::Error),
    /// A language file is not a valid JSON record
    #[error("failed to parse language record: {0}")]
    Parse(#[from] serde_json::Error),
    /// The configured file pattern is not a valid glob
    #[error("invalid file pattern '{pattern}': {message}")]
    Pattern {
        /// The offending pattern
        pattern: String,
        /// Underlying glob error
        message: String,
    },
    /// A record violates a table invariant that cannot be skipped
    #[error("invalid language record in '{path}': {message}")]
    InvalidRecord {
        /// File the record was read from
        path: String,
        /// What was wrong with it
        message: String,
    },
}
