//! テスト用ユーティリティ関数
//!
//! 複数のテストモジュールで使用される共通のヘルパー関数を提供します。
#![allow(clippy::expect_used)]

use std::cell::RefCell;
use std::rc::Rc;

use crate::binding::TextSink;
use crate::table::TranslationTable;

/// テスト用の `TranslationTable` を作成する
///
/// # Arguments
/// * `name` - 言語名（例: "English", "French"）
/// * `entries` - キーと値のペア
///
/// # Returns
/// 作成された `TranslationTable`
pub(crate) fn create_table(name: &str, entries: &[(&str, &str)]) -> TranslationTable {
    let mut table = TranslationTable::new(name).expect("test table name must not be empty");
    for (key, value) in entries {
        table.add(*key, *value).expect("test entry key must not be empty");
    }
    table
}

/// 表示結果を検査できる共有シンクを作成する
///
/// 返されたバッファはシンクと同じ文字列を共有しており、バインディングが
/// 書き込んだ内容をテストから観測できる。
pub(crate) fn shared_sink() -> (Rc<RefCell<String>>, Box<dyn TextSink>) {
    let buffer = Rc::new(RefCell::new(String::new()));
    (Rc::clone(&buffer), Box::new(Rc::clone(&buffer)))
}
