//! Loading and saving persisted language records.

use std::path::Path;

use super::scanner::find_language_files;
use super::types::StoreError;
use crate::config::LocalizationSettings;
use crate::table::{
    LanguageRecord,
    TranslationTable,
};

/// Loads one language record and rebuilds its table.
///
/// Malformed entries inside the record (empty keys) are skipped with a
/// warning; a record without a language name cannot be recovered locally and
/// fails the load.
///
/// # Errors
/// - [`StoreError::Io`] when the file cannot be read
/// - [`StoreError::Parse`] when the file is not a valid record
/// - [`StoreError::InvalidRecord`] when the record has no language name
pub fn load_language_file(path: &Path) -> Result<TranslationTable, StoreError> {
    let content = std::fs::read_to_string(path)?;
    let record: LanguageRecord = serde_json::from_str(&content)?;

    record.into_table().map_err(|e| StoreError::InvalidRecord {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

/// Encodes `table` and writes it to `path` as pretty-printed JSON.
///
/// The entry order in the file follows the table's insertion order, so
/// saving an unchanged table is byte-for-byte deterministic.
///
/// # Errors
/// [`StoreError::Io`] when the file cannot be written.
pub fn save_language_file(path: &Path, table: &TranslationTable) -> Result<(), StoreError> {
    let record = LanguageRecord::from_table(table);
    let content = serde_json::to_string_pretty(&record)?;
    std::fs::write(path, content)?;
    tracing::debug!(path = %path.display(), language = table.name(), "Saved language record");
    Ok(())
}

/// Loads every language table found under `dir`.
///
/// Unreadable or malformed files are skipped with a warning so that one bad
/// record does not take down the whole locale set. When
/// `settings.languages` is configured, records whose name is not listed are
/// skipped as well.
///
/// # Errors
/// [`StoreError::Pattern`] when `settings.file_pattern` is not a valid glob.
pub fn load_all(
    dir: &Path,
    settings: &LocalizationSettings,
) -> Result<Vec<TranslationTable>, StoreError> {
    let files = find_language_files(dir, &settings.file_pattern)?;
    tracing::debug!(path = %dir.display(), count = files.len(), "Loading language records");

    let mut tables = Vec::new();
    for path in &files {
        let table = match load_language_file(path) {
            Ok(table) => table,
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "Skipping unreadable language file");
                continue;
            }
        };
        if let Some(languages) = &settings.languages
            && !languages.iter().any(|language| language == table.name())
        {
            tracing::debug!(
                language = table.name(),
                "Language is not in the configured set; skipping"
            );
            continue;
        }
        tables.push(table);
    }
    Ok(tables)
}
