//! 言語レジストリ本体

use std::cell::RefCell;
use std::rc::Weak;

use indexmap::IndexMap;

use super::observer::{
    LanguageObserver,
    ObserverList,
    SubscriptionId,
};
use super::types::RegistryError;
use crate::table::TranslationTable;
use crate::types::Resolution;

/// 利用可能な翻訳テーブルの集合と現在の言語を管理する
///
/// プロセス全体のシングルトンではなく、アプリケーションの組み立て層が
/// 明示的に生成し、参照で各コンシューマーに渡します。
///
/// # 不変条件
///
/// - テーブル名はレジストリ内で一意
/// - `current` は常に登録済みテーブルのいずれかを指すか、未設定
///
/// すべての操作は同期的で、呼び出しが戻った時点で購読者への通知も完了
/// しています。
#[derive(Default)]
pub struct LanguageRegistry {
    /// 登録順を保った名前→テーブルのマッピング
    tables: IndexMap<String, TranslationTable>,
    /// 現在の言語名（`tables` のキー）
    current: Option<String>,
    /// 言語変更の購読者
    observers: ObserverList,
}

impl LanguageRegistry {
    /// 空のレジストリを作成
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// テーブルを登録する
    ///
    /// 最初に登録されたテーブルは自動的に現在の言語になり、購読者へ
    /// 通知されます。
    ///
    /// # Errors
    /// 同名のテーブルが登録済みの場合は [`RegistryError::DuplicateName`]。
    /// 登録済みの側が保持されます。
    pub fn register(&mut self, table: TranslationTable) -> Result<(), RegistryError> {
        let name = table.name().to_string();
        if self.tables.contains_key(&name) {
            return Err(RegistryError::DuplicateName(name));
        }
        let first = self.tables.is_empty();
        self.tables.insert(name.clone(), table);
        tracing::debug!(language = %name, "Registered language");
        if first {
            self.set_current(&name)?;
        }
        Ok(())
    }

    /// 名前でテーブルを削除する
    ///
    /// 存在しない名前は警告付きの no-op（冪等）。現在の言語を削除した
    /// 場合、選択は未設定に戻り（暗黙のフォールバックはしない）、購読者
    /// へ通知されます。
    pub fn unregister(&mut self, name: &str) -> bool {
        if self.tables.shift_remove(name).is_none() {
            tracing::warn!(language = name, "Attempted to unregister an unknown language");
            return false;
        }
        tracing::debug!(language = name, "Unregistered language");
        if self.current.as_deref() == Some(name) {
            self.current = None;
            tracing::warn!(
                language = name,
                "Current language was unregistered; no language selected"
            );
            self.notify();
        }
        true
    }

    /// 現在の言語を切り替える
    ///
    /// 成功すると、呼び出しが戻る前にすべての購読者が購読順で同期的に
    /// 再描画されます。
    ///
    /// # Errors
    /// 未登録の名前の場合は [`RegistryError::NotFound`]。
    pub fn set_current(&mut self, name: &str) -> Result<(), RegistryError> {
        if !self.tables.contains_key(name) {
            return Err(RegistryError::NotFound(name.to_string()));
        }
        self.current = Some(name.to_string());
        tracing::info!(language = name, "Language set");
        self.notify();
        Ok(())
    }

    /// 現在の言語のテーブル（未選択なら `None`）
    #[must_use]
    pub fn current(&self) -> Option<&TranslationTable> {
        self.current.as_deref().and_then(|name| self.tables.get(name))
    }

    /// 現在の言語名（未選択なら `None`）
    #[must_use]
    pub fn current_name(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// 現在の言語でキーを解決する
    ///
    /// もっとも頻繁に呼ばれる読み取りパスであり、全域的です：言語が
    /// 未選択でもキーが未登録でも [`Resolution::Missing`] を返します。
    #[must_use]
    pub fn lookup(&self, key: &str) -> Resolution {
        let Some(table) = self.current() else {
            tracing::warn!(%key, "No language is currently selected");
            return Resolution::missing(key);
        };
        let resolution = table.get(key);
        if resolution.is_missing() {
            tracing::warn!(
                %key,
                language = table.name(),
                "Translation is missing in the current language"
            );
        }
        resolution
    }

    /// 登録済みのテーブル名を登録順で返す
    ///
    /// 言語選択 UI（ドロップダウンなど）の一覧表示用。
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }

    /// 名前でテーブルを参照する
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&TranslationTable> {
        self.tables.get(name)
    }

    /// 名前でテーブルを可変参照する（オーサリング用）
    #[must_use]
    pub fn get_mut(&mut self, name: &str) -> Option<&mut TranslationTable> {
        self.tables.get_mut(name)
    }

    /// 登録済みテーブル数
    #[must_use]
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// テーブルが 1 つも登録されていないか
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// 言語変更の購読を登録する
    ///
    /// レジストリはオブザーバーを弱参照で保持するため、購読したまま
    /// 破棄されたオブザーバーは通知時に自動でスキップされます。明示的な
    /// 解除には返されたハンドルを [`LanguageRegistry::unsubscribe`] に
    /// 渡してください。
    pub fn subscribe(&mut self, observer: Weak<RefCell<dyn LanguageObserver>>) -> SubscriptionId {
        self.observers.subscribe(observer)
    }

    /// 言語変更の購読を解除する
    ///
    /// 既に解除済み・未知のハンドルの場合は `false` を返す
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    /// 現在の購読数（診断用）
    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// 生存している全購読者へ同期的に通知する
    ///
    /// 配信中は `self` を共有参照で貸し出すため、オブザーバーが購読や
    /// 選択を変更することはない（借用規則で静的に保証される）。
    fn notify(&mut self) {
        let live = self.observers.collect_live();
        for observer in live {
            observer.borrow_mut().language_changed(self);
        }
    }
}

impl std::fmt::Debug for LanguageRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LanguageRegistry")
            .field("tables", &self.tables.keys().collect::<Vec<_>>())
            .field("current", &self.current)
            .field("observers", &self.observers.len())
            .finish()
    }
}
