//! 言語ファイルの探索

use std::path::{
    Path,
    PathBuf,
};

use globset::{
    Glob,
    GlobSetBuilder,
};
use ignore::WalkBuilder;

use super::types::StoreError;

/// ロケールディレクトリから言語ファイルを探索する
///
/// `pattern` は `dir` からの相対パスに対して照合される。結果は決定的な
/// 順序（パスの昇順）で返す：走査順は環境依存のため、そのままでは
/// 「最初に登録された言語」が環境ごとに変わってしまう。
///
/// # Errors
/// `pattern` が不正な glob の場合は [`StoreError::Pattern`]。
pub fn find_language_files(dir: &Path, pattern: &str) -> Result<Vec<PathBuf>, StoreError> {
    let glob = Glob::new(pattern).map_err(|e| StoreError::Pattern {
        pattern: pattern.to_string(),
        message: e.to_string(),
    })?;
    let mut builder = GlobSetBuilder::new();
    builder.add(glob);
    let glob_set = builder.build().map_err(|e| StoreError::Pattern {
        pattern: pattern.to_string(),
        message: e.to_string(),
    })?;

    let mut found_files = Vec::new();

    // ignore クレートでファイルを走査
    for result in WalkBuilder::new(dir)
        .hidden(false)
        .git_ignore(true)
        .git_global(true)
        .git_exclude(true)
        .follow_links(false)
        .build()
    {
        let entry = match result {
            Ok(entry) => entry,
            Err(err) => {
                tracing::debug!(?err, "Failed to read directory entry");
                continue;
            }
        };

        // ファイルのみを対象
        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }

        let path = entry.path();

        // ロケールディレクトリからの相対パスを取得
        let Ok(relative_path) = path.strip_prefix(dir) else {
            continue;
        };
        if !glob_set.is_match(relative_path) {
            continue;
        }

        found_files.push(path.to_path_buf());
    }

    found_files.sort();
    Ok(found_files)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use std::fs;

    use googletest::prelude::*;
    use rstest::rstest;
    use tempfile::TempDir;

    use super::*;

    #[googletest::test]
    fn finds_matching_files_in_sorted_order() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("fr.json"), "{}").unwrap();
        fs::write(temp_dir.path().join("en.json"), "{}").unwrap();
        fs::write(temp_dir.path().join("notes.txt"), "").unwrap();

        let files = find_language_files(temp_dir.path(), "**/*.json").unwrap();

        let names: Vec<_> = files
            .iter()
            .map(|path| path.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        expect_that!(names, elements_are![eq("en.json"), eq("fr.json")]);
    }

    #[googletest::test]
    fn finds_files_in_subdirectories() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("extra")).unwrap();
        fs::write(temp_dir.path().join("en.json"), "{}").unwrap();
        fs::write(temp_dir.path().join("extra").join("de.json"), "{}").unwrap();

        let files = find_language_files(temp_dir.path(), "**/*.json").unwrap();

        expect_that!(files.len(), eq(2));
    }

    /// パターンに合わないファイルは対象外
    #[rstest]
    fn respects_the_file_pattern() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("en.json"), "{}").unwrap();
        fs::write(temp_dir.path().join("en.yaml"), "").unwrap();

        let files = find_language_files(temp_dir.path(), "*.json").unwrap();

        assert_eq!(files.len(), 1);
    }

    #[rstest]
    fn invalid_pattern_is_an_error() {
        let temp_dir = TempDir::new().unwrap();

        let result = find_language_files(temp_dir.path(), "**/{en,fr/*.json");

        assert!(matches!(result, Err(StoreError::Pattern { .. })));
    }

    /// 存在しないディレクトリは空の結果
    #[rstest]
    fn missing_directory_yields_no_files() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("does-not-exist");

        let files = find_language_files(&missing, "**/*.json").unwrap();

        assert!(files.is_empty());
    }
}
