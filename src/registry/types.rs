//! Registry error definitions.

use thiserror::Error;

/// Structural violation on a registry write path.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// A table with the same name is already registered.
    #[error("a language named '{0}' is already registered")]
    DuplicateName(String),
    /// No table with the requested name is registered.
    #[error("no language named '{0}' is registered")]
    NotFound(String),
}
