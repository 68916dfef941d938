//! 設定ファイルの読み込み関数

use std::path::Path;

use super::{
    ConfigError,
    LocalizationSettings,
};

/// 設定ファイル名
const CONFIG_FILE_NAME: &str = ".ui-i18n.json";

/// アプリケーションルートから設定を読み込む
///
/// `.ui-i18n.json` ファイルを探して読み込む
///
/// # Arguments
/// * `app_root` - アプリケーションのルートパス
///
/// # Returns
/// - `Ok(Some(settings))`: 設定ファイルが見つかり、読み込みに成功
/// - `Ok(None)`: 設定ファイルが見つからない
/// - `Err(ConfigError)`: ファイル読み込みまたはパースエラー
///
/// # Errors
/// - ファイル読み込みエラー
/// - JSON パースエラー
pub(super) fn load_from_root(app_root: &Path) -> Result<Option<LocalizationSettings>, ConfigError> {
    let config_path = app_root.join(CONFIG_FILE_NAME);

    if !config_path.exists() {
        tracing::debug!("Configuration file not found: {:?}", config_path);
        return Ok(None);
    }

    tracing::debug!("Loading configuration from: {:?}", config_path);

    let content = std::fs::read_to_string(&config_path)?;
    let settings: LocalizationSettings = serde_json::from_str(&content)?;

    Ok(Some(settings))
}
