//! 言語レジストリ（利用可能な翻訳テーブルと現在の言語の管理）
mod manager;
mod observer;
mod types;

pub use manager::LanguageRegistry;
pub use observer::{
    LanguageObserver,
    SubscriptionId,
};
pub use types::RegistryError;
