use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "languages[0]")
    pub field_path: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    #[error("Failed to load configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),
}

fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LocalizationSettings {
    /// Directory containing language record files, relative to the app root.
    pub locales_dir: String,

    /// Glob pattern selecting language files inside `localesDir`.
    pub file_pattern: String,

    /// Language names to load.
    ///
    /// - `None`: every record found is loaded (default)
    /// - `Some([...])`: only the named languages are loaded
    pub languages: Option<Vec<String>>,

    /// Language selected at initialization.
    ///
    /// If unset, the first loaded language becomes current.
    pub initial_language: Option<String>,
}

impl Default for LocalizationSettings {
    fn default() -> Self {
        Self {
            locales_dir: "locales".to_string(),
            file_pattern: "**/*.json".to_string(),
            languages: None,
            initial_language: None,
        }
    }
}

impl LocalizationSettings {
    /// # Errors
    /// - Required field is empty
    /// - Invalid glob pattern
    /// - `initialLanguage` outside the configured `languages`
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.locales_dir.is_empty() {
            errors.push(ValidationError::new(
                "localesDir",
                "The directory cannot be empty. Please specify a directory, for example: \"locales\"",
            ));
        }

        if self.file_pattern.is_empty() {
            errors.push(ValidationError::new(
                "filePattern",
                "The pattern cannot be empty. Example: \"**/*.json\"",
            ));
        } else if let Err(e) = globset::Glob::new(&self.file_pattern) {
            errors.push(ValidationError::new(
                "filePattern",
                format!("Invalid glob pattern '{}': {e}", self.file_pattern),
            ));
        }

        if let Some(languages) = &self.languages {
            for (index, language) in languages.iter().enumerate() {
                if language.is_empty() {
                    errors.push(ValidationError::new(
                        format!("languages[{index}]"),
                        "Language names cannot be empty",
                    ));
                }
            }
        }

        if let Some(initial) = &self.initial_language {
            if initial.is_empty() {
                errors.push(ValidationError::new(
                    "initialLanguage",
                    "The language name cannot be empty. Remove this field to select the first loaded language",
                ));
            } else if let Some(languages) = &self.languages
                && !languages.iter().any(|language| language == initial)
            {
                errors.push(ValidationError::new(
                    "initialLanguage",
                    format!("'{initial}' is not listed in 'languages'"),
                ));
            }
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}
