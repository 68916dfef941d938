//! 言語変更の通知機構
//!
//! 購読は安定したハンドル（[`SubscriptionId`]）で管理し、オブザーバー
//! 自体は弱参照で保持します。破棄済みのオブザーバーは通知時にスキップ
//! され、リストから取り除かれます。

use std::cell::RefCell;
use std::rc::{
    Rc,
    Weak,
};

use super::manager::LanguageRegistry;

/// 言語の変更を監視するオブザーバー
pub trait LanguageObserver {
    /// 現在の言語が変わったときに呼ばれる
    ///
    /// 通知は同期的で、レジストリの変更操作が戻る前に全購読者への配信が
    /// 完了します。配信中のレジストリは共有参照なので、オブザーバーから
    /// 購読の追加・解除や言語の変更はできません。
    fn language_changed(&mut self, registry: &LanguageRegistry);
}

/// 購読を識別する安定したハンドル
///
/// [`LanguageRegistry::subscribe`] が払い出し、解除時にそのまま渡します。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// 購読中のオブザーバー一覧（購読順）
#[derive(Default)]
pub(super) struct ObserverList {
    /// 購読順のエントリ
    entries: Vec<ObserverEntry>,
    /// 次に払い出す ID
    next_id: u64,
}

/// 1 件の購読
struct ObserverEntry {
    /// 購読ハンドル
    id: SubscriptionId,
    /// オブザーバーへの弱参照
    observer: Weak<RefCell<dyn LanguageObserver>>,
}

impl ObserverList {
    /// オブザーバーを登録し、購読ハンドルを返す
    pub(super) fn subscribe(
        &mut self,
        observer: Weak<RefCell<dyn LanguageObserver>>,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push(ObserverEntry { id, observer });
        id
    }

    /// 購読を解除する
    ///
    /// 既に解除済み・未知のハンドルの場合は `false` を返す
    pub(super) fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        before != self.entries.len()
    }

    /// 生存しているオブザーバーを購読順で集める
    ///
    /// 破棄済みのエントリはここでリストから取り除かれる
    pub(super) fn collect_live(&mut self) -> Vec<Rc<RefCell<dyn LanguageObserver>>> {
        self.entries.retain(|entry| entry.observer.strong_count() > 0);
        self.entries.iter().filter_map(|entry| entry.observer.upgrade()).collect()
    }

    /// 現在の購読数
    pub(super) fn len(&self) -> usize {
        self.entries.len()
    }
}
