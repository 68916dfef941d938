//! Translation table definition.

use indexmap::IndexMap;
use thiserror::Error;

use super::codec::TranslationEntry;
use crate::types::Resolution;

/// Structural violation on a table write path.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableError {
    /// The language name is empty.
    #[error("language name cannot be empty")]
    EmptyName,
    /// The translation key is empty.
    #[error("cannot add a translation with an empty key")]
    EmptyKey,
}

/// Key→value translations for one named language.
///
/// Keys are unique within the table and case-sensitive. Insertion order is
/// irrelevant for lookup but preserved, so that [`TranslationTable::serialize`]
/// is deterministic and round-trips through external storage. The mapping is
/// the single source of truth; the pair list only exists on demand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationTable {
    /// Language name (unique within a registry, e.g. "English").
    name: String,
    /// Entries in insertion order.
    entries: IndexMap<String, String>,
}

impl TranslationTable {
    /// Creates an empty table named `name`.
    ///
    /// # Errors
    /// [`TableError::EmptyName`] if `name` is empty or whitespace-only.
    pub fn new(name: impl Into<String>) -> Result<Self, TableError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(TableError::EmptyName);
        }
        Ok(Self { name, entries: IndexMap::new() })
    }

    /// The language name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Inserts or overwrites the entry for `key`.
    ///
    /// New keys are appended; overwriting keeps the key's original position.
    ///
    /// # Errors
    /// [`TableError::EmptyKey`] if `key` is empty.
    pub fn add(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<(), TableError> {
        let key = key.into();
        if key.is_empty() {
            return Err(TableError::EmptyKey);
        }
        tracing::debug!(language = %self.name, %key, "Added translation");
        self.entries.insert(key, value.into());
        Ok(())
    }

    /// Deletes the entry for `key`.
    ///
    /// Removing an absent key is a non-fatal no-op: it is logged as a warning
    /// and reported through the return value.
    pub fn remove(&mut self, key: &str) -> bool {
        if self.entries.shift_remove(key).is_some() {
            tracing::debug!(language = %self.name, %key, "Removed translation");
            true
        } else {
            tracing::warn!(language = %self.name, %key, "Attempted to remove a non-existing key");
            false
        }
    }

    /// Resolves `key` against this table.
    ///
    /// Never fails for a missing key: absence is reported as
    /// [`Resolution::Missing`] so callers can render a placeholder.
    #[must_use]
    pub fn get(&self, key: &str) -> Resolution {
        self.entries
            .get(key)
            .map_or_else(|| Resolution::missing(key), |value| Resolution::Resolved(value.clone()))
    }

    /// Whether `key` has an entry.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Encodes the table as an ordered (key, value) sequence.
    ///
    /// Deterministic given the table's current insertion order.
    #[must_use]
    pub fn serialize(&self) -> Vec<TranslationEntry> {
        self.entries.iter().map(|(key, value)| TranslationEntry::new(key, value)).collect()
    }

    /// Replaces all entries with `entries`, inserted in sequence order.
    ///
    /// The storage layer is not assumed to enforce table invariants: pairs
    /// with an empty key are skipped with a warning rather than failing the
    /// load. Duplicate keys keep the last value.
    pub fn deserialize(&mut self, entries: Vec<TranslationEntry>) {
        self.entries.clear();
        for entry in entries {
            if entry.key.is_empty() {
                tracing::warn!(
                    language = %self.name,
                    "Encountered an empty key in serialized entries; skipping entry"
                );
                continue;
            }
            tracing::trace!(language = %self.name, key = %entry.key, "Deserialized entry");
            self.entries.insert(entry.key, entry.value);
        }
        if self.entries.is_empty() {
            tracing::warn!(language = %self.name, "No translations found for the language");
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn new_rejects_blank_names(#[case] name: &str) {
        assert_that!(TranslationTable::new(name), err(eq(&TableError::EmptyName)));
    }

    #[googletest::test]
    fn add_then_get_returns_value() {
        let mut table = TranslationTable::new("English").unwrap();

        table.add("hello", "Hello").unwrap();

        expect_that!(table.get("hello"), eq(&Resolution::Resolved("Hello".to_string())));
        expect_that!(table.len(), eq(1));
    }

    #[googletest::test]
    fn add_rejects_empty_key() {
        let mut table = TranslationTable::new("English").unwrap();

        let result = table.add("", "Hello");

        expect_that!(result, err(eq(TableError::EmptyKey)));
        expect_that!(table.is_empty(), eq(true));
    }

    #[googletest::test]
    fn add_overwrites_existing_key_in_place() {
        let mut table = TranslationTable::new("English").unwrap();
        table.add("hello", "Hello").unwrap();
        table.add("goodbye", "Goodbye").unwrap();

        table.add("hello", "Hi").unwrap();

        let keys: Vec<_> = table.entries().map(|(key, _)| key.to_string()).collect();
        expect_that!(keys, elements_are![eq("hello"), eq("goodbye")]);
        expect_that!(table.get("hello"), eq(&Resolution::Resolved("Hi".to_string())));
    }

    #[googletest::test]
    fn get_missing_key_returns_sentinel() {
        let table = TranslationTable::new("English").unwrap();

        let resolution = table.get("absent");

        expect_that!(resolution, eq(&Resolution::missing("absent")));
    }

    /// 空文字列の訳文は欠落ではない
    #[googletest::test]
    fn get_empty_value_is_not_missing() {
        let mut table = TranslationTable::new("English").unwrap();
        table.add("spacer", "").unwrap();

        let resolution = table.get("spacer");

        expect_that!(resolution.is_missing(), eq(false));
        expect_that!(resolution, eq(&Resolution::Resolved(String::new())));
    }

    #[googletest::test]
    fn remove_deletes_entry() {
        let mut table = TranslationTable::new("English").unwrap();
        table.add("hello", "Hello").unwrap();

        expect_that!(table.remove("hello"), eq(true));
        expect_that!(table.contains_key("hello"), eq(false));
    }

    /// 存在しないキーの削除は警告付きの no-op
    #[googletest::test]
    fn remove_absent_key_is_noop() {
        let mut table = TranslationTable::new("English").unwrap();
        table.add("hello", "Hello").unwrap();

        expect_that!(table.remove("absent"), eq(false));
        expect_that!(table.len(), eq(1));
    }

    #[googletest::test]
    fn remove_preserves_order_of_remaining_entries() {
        let mut table = TranslationTable::new("English").unwrap();
        table.add("one", "1").unwrap();
        table.add("two", "2").unwrap();
        table.add("three", "3").unwrap();

        table.remove("two");

        let keys: Vec<_> = table.entries().map(|(key, _)| key.to_string()).collect();
        expect_that!(keys, elements_are![eq("one"), eq("three")]);
    }

    #[googletest::test]
    fn serialize_is_insertion_ordered() {
        let mut table = TranslationTable::new("English").unwrap();
        table.add("title", "Title").unwrap();
        table.add("body", "Body").unwrap();
        table.add("footer", "Footer").unwrap();

        let entries = table.serialize();

        expect_that!(
            entries,
            elements_are![
                eq(&TranslationEntry::new("title", "Title")),
                eq(&TranslationEntry::new("body", "Body")),
                eq(&TranslationEntry::new("footer", "Footer")),
            ]
        );
    }

    #[googletest::test]
    fn deserialize_of_serialize_round_trips() {
        let mut table = TranslationTable::new("English").unwrap();
        table.add("hello", "Hello").unwrap();
        table.add("goodbye", "Goodbye").unwrap();

        let mut restored = TranslationTable::new("English").unwrap();
        restored.deserialize(table.serialize());

        expect_that!(restored, eq(&table));
    }

    #[googletest::test]
    fn deserialize_skips_empty_keys() {
        let mut table = TranslationTable::new("English").unwrap();

        table.deserialize(vec![
            TranslationEntry::new("hello", "Hello"),
            TranslationEntry::new("", "orphan"),
            TranslationEntry::new("goodbye", "Goodbye"),
        ]);

        expect_that!(table.len(), eq(2));
        expect_that!(table.contains_key("hello"), eq(true));
        expect_that!(table.contains_key("goodbye"), eq(true));
    }

    #[googletest::test]
    fn deserialize_replaces_existing_entries() {
        let mut table = TranslationTable::new("English").unwrap();
        table.add("stale", "Old").unwrap();

        table.deserialize(vec![TranslationEntry::new("fresh", "New")]);

        expect_that!(table.contains_key("stale"), eq(false));
        expect_that!(table.get("fresh"), eq(&Resolution::Resolved("New".to_string())));
    }

    /// 重複キーは後勝ち
    #[googletest::test]
    fn deserialize_keeps_last_duplicate() {
        let mut table = TranslationTable::new("English").unwrap();

        table.deserialize(vec![
            TranslationEntry::new("hello", "First"),
            TranslationEntry::new("hello", "Second"),
        ]);

        expect_that!(table.len(), eq(1));
        expect_that!(table.get("hello"), eq(&Resolution::Resolved("Second".to_string())));
    }
}
