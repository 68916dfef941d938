//! アプリケーション組み立て層向けの初期化処理
//!
//! 設定と永続化済みの言語レコードからレジストリを構築します。レジストリ
//! はここで明示的に生成して返すだけで、グローバルには保持しません。
//! ライフサイクルの所有者は呼び出し側（アプリケーションの組み立て層）
//! です。

use std::path::Path;

use thiserror::Error;

use crate::config::{
    ConfigError,
    ConfigManager,
    LocalizationSettings,
};
use crate::registry::{
    LanguageRegistry,
    RegistryError,
};
use crate::store::{
    self,
    StoreError,
};

/// 初期化時のエラー
#[derive(Error, Debug)]
pub enum InitError {
    /// 設定の読み込みに失敗
    #[error("failed to load localization settings: {0}")]
    Config(#[from] ConfigError),
    /// 言語レコードの読み込みに失敗
    #[error("failed to load language records: {0}")]
    Store(#[from] StoreError),
    /// レジストリの構築に失敗
    #[error("failed to populate the language registry: {0}")]
    Registry(#[from] RegistryError),
}

/// 設定ファイルと言語レコードからレジストリを構築する
///
/// `app_root` 直下の `.ui-i18n.json` を読み込み（無ければデフォルト
/// 設定）、ロケールディレクトリの全レコードを登録して返す。
///
/// # Errors
/// - 設定の読み込み・バリデーションエラー
/// - 言語レコードの走査エラー
/// - 同名レコードの重複、未知の `initialLanguage` の指定
pub fn initialize(app_root: &Path) -> Result<LanguageRegistry, InitError> {
    let mut config_manager = ConfigManager::new();
    config_manager.load_settings(Some(app_root.to_path_buf()))?;
    initialize_with(app_root, config_manager.get_settings())
}

/// 読み込み済みの設定からレジストリを構築する
///
/// 最初に登録された言語が自動的に現在の言語になる。`initialLanguage`
/// が設定されている場合はその言語へ切り替える：未知の名前は暗黙の
/// フォールバックをせず、明示的なエラーにする。
///
/// # Errors
/// [`initialize`] と同様（設定読み込みを除く）。
pub fn initialize_with(
    app_root: &Path,
    settings: &LocalizationSettings,
) -> Result<LanguageRegistry, InitError> {
    let locales_dir = app_root.join(&settings.locales_dir);
    let tables = store::load_all(&locales_dir, settings)?;

    let mut registry = LanguageRegistry::new();
    for table in tables {
        // ディスク上の同名レコードはどちらを信じるべきか判断できない
        // ため、ハードエラーにする
        registry.register(table)?;
    }

    if let Some(initial) = &settings.initial_language {
        registry.set_current(initial)?;
    }

    if registry.is_empty() {
        tracing::error!(
            path = %locales_dir.display(),
            "No available languages were found"
        );
    }

    Ok(registry)
}
