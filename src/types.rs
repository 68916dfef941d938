//! Core types used throughout the crate.

use std::borrow::Cow;
use std::fmt;

/// The designated non-fatal result for a lookup that found no entry.
///
/// Carries the requested key so UI code can render a recognizable
/// placeholder instead of blank text. Missing translations are an expected
/// runtime condition, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MissingTranslation {
    /// The key that had no entry in the current table.
    pub key: String,
}

impl MissingTranslation {
    /// Creates a sentinel for `key`.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl fmt::Display for MissingTranslation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Missing translation: {}", self.key)
    }
}

/// Result of resolving a translation key.
///
/// Lookups are total: absence is data, not an exception. A missing key is
/// always distinguishable from a legitimate empty-string translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The value stored for the key in the current table.
    Resolved(String),
    /// No entry for the key (or no current table at all).
    Missing(MissingTranslation),
}

impl Resolution {
    /// Creates a [`Resolution::Missing`] for `key`.
    #[must_use]
    pub fn missing(key: impl Into<String>) -> Self {
        Self::Missing(MissingTranslation::new(key))
    }

    /// Whether the key had no entry.
    #[must_use]
    pub const fn is_missing(&self) -> bool {
        matches!(self, Self::Missing(_))
    }

    /// The text to display: the resolved value, or the missing placeholder.
    #[must_use]
    pub fn display_text(&self) -> Cow<'_, str> {
        match self {
            Self::Resolved(value) => Cow::Borrowed(value),
            Self::Missing(missing) => Cow::Owned(missing.to_string()),
        }
    }
}
