//! 翻訳テーブル（言語ごとのキー→訳文マッピング）
mod codec;
mod types;

pub use codec::{
    LanguageRecord,
    TranslationEntry,
};
pub use types::{
    TableError,
    TranslationTable,
};
