//! 設定管理を行うモジュール

use std::path::PathBuf;

use super::{
    ConfigError,
    LocalizationSettings,
    loader,
};

/// 設定管理を行う
#[derive(Default, Debug, Clone)]
pub struct ConfigManager {
    /// 現在の設定
    current_settings: LocalizationSettings,

    /// アプリケーションのルートパス
    app_root: Option<PathBuf>,
}

impl ConfigManager {
    /// 新しい設定マネージャーを作成
    #[must_use]
    pub fn new() -> Self {
        Self { current_settings: LocalizationSettings::default(), app_root: None }
    }

    /// 設定を読み込む
    ///
    /// # Arguments
    /// * `app_root` - アプリケーションのルートパス
    ///
    /// # Returns
    /// - `Ok(())`: 設定の読み込みとバリデーション成功
    /// - `Err(ConfigError)`: エラー
    ///
    /// # Errors
    /// - ファイル読み込みエラー
    /// - JSON パースエラー
    /// - バリデーションエラー
    pub fn load_settings(&mut self, app_root: Option<PathBuf>) -> Result<(), ConfigError> {
        tracing::debug!("Loading settings for app root: {:?}", app_root);

        // アプリケーションルートの設定を読み込み
        let settings = if let Some(root) = &app_root {
            loader::load_from_root(root)?.map_or_else(LocalizationSettings::default, |loaded| {
                tracing::debug!("Loaded settings: {:?}", loaded);
                loaded
            })
        } else {
            LocalizationSettings::default()
        };

        // バリデーション
        settings.validate().map_err(ConfigError::ValidationErrors)?;

        // 設定を保存
        self.current_settings = settings;
        self.app_root = app_root;
        tracing::debug!("Settings loaded successfully: {:?}", self.current_settings);

        Ok(())
    }

    /// 設定を更新する（実行中の設定変更用）
    pub fn update_settings(&mut self, new_settings: LocalizationSettings) -> Result<(), ConfigError> {
        tracing::debug!("Updating settings...");

        // バリデーション
        new_settings.validate().map_err(ConfigError::ValidationErrors)?;

        // 設定を更新
        self.current_settings = new_settings;
        tracing::debug!("Settings updated successfully");

        Ok(())
    }

    /// 現在の設定を取得
    #[must_use]
    pub const fn get_settings(&self) -> &LocalizationSettings {
        &self.current_settings
    }

    /// アプリケーションルートを取得
    #[must_use]
    pub const fn app_root(&self) -> Option<&PathBuf> {
        self.app_root.as_ref()
    }
}
