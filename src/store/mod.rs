//! 言語レコードの永続化（読み込み・保存・探索）
mod files;
mod scanner;
mod types;

pub use files::{
    load_all,
    load_language_file,
    save_language_file,
};
pub use scanner::find_language_files;
pub use types::StoreError;
