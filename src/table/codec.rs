//! Persisted encoding of a translation table.

use serde::{
    Deserialize,
    Serialize,
};

use super::types::{
    TableError,
    TranslationTable,
};

/// One serialized (key, value) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationEntry {
    /// Translation key.
    pub key: String,
    /// Translation value.
    pub value: String,
}

impl TranslationEntry {
    /// Creates an entry pair.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self { key: key.into(), value: value.into() }
    }
}

/// The on-disk record for one language: a name plus an ordered entry list.
///
/// This is the only serialized contract. The in-memory mapping is rebuilt
/// from the entry list on load and encoded back on save; the two
/// representations never coexist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageRecord {
    /// Language name.
    pub name: String,
    /// Ordered (key, value) pairs.
    pub entries: Vec<TranslationEntry>,
}

impl LanguageRecord {
    /// Encodes `table` into its persisted record.
    #[must_use]
    pub fn from_table(table: &TranslationTable) -> Self {
        Self { name: table.name().to_string(), entries: table.serialize() }
    }

    /// Rebuilds a table from this record.
    ///
    /// Entries with an empty key are skipped with a warning, matching
    /// [`TranslationTable::deserialize`].
    ///
    /// # Errors
    /// [`TableError::EmptyName`] if the record has no language name.
    pub fn into_table(self) -> Result<TranslationTable, TableError> {
        let mut table = TranslationTable::new(self.name)?;
        table.deserialize(self.entries);
        Ok(table)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;
    use crate::test_utils::create_table;

    #[googletest::test]
    fn record_round_trips_through_json() {
        let table = create_table("French", &[("hello", "Bonjour"), ("goodbye", "Au revoir")]);
        let record = LanguageRecord::from_table(&table);

        let json = serde_json::to_string(&record).unwrap();
        let parsed: LanguageRecord = serde_json::from_str(&json).unwrap();
        let restored = parsed.into_table().unwrap();

        expect_that!(restored, eq(&table));
    }

    #[googletest::test]
    fn record_uses_camel_case_field_names() {
        let table = create_table("English", &[("hello", "Hello")]);

        let json = serde_json::to_string(&LanguageRecord::from_table(&table)).unwrap();

        expect_that!(json.as_str(), contains_substring("\"name\":\"English\""));
        expect_that!(json.as_str(), contains_substring("\"entries\""));
        expect_that!(json.as_str(), contains_substring("\"key\":\"hello\""));
    }

    /// レコード名が空のテーブルは復元できない
    #[rstest]
    fn into_table_rejects_empty_name() {
        let record = LanguageRecord { name: String::new(), entries: vec![] };

        assert_that!(record.into_table(), err(eq(&TableError::EmptyName)));
    }

    #[googletest::test]
    fn into_table_skips_malformed_entries() {
        let record = LanguageRecord {
            name: "English".to_string(),
            entries: vec![
                TranslationEntry::new("hello", "Hello"),
                TranslationEntry::new("", "orphan"),
            ],
        };

        let table = record.into_table().unwrap();

        expect_that!(table.len(), eq(1));
        expect_that!(table.contains_key("hello"), eq(true));
    }
}
