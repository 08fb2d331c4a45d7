//! 移行実行器
//!
//! 1ファイルずつ順番に処理する。ファイル間の並行性はなく、
//! 途中で失敗しても残りのファイルは処理される。

use crate::backup;
use crate::config::MigrateConfig;
use crate::fs::FileSystem;
use crate::transform::imports;
use crate::transform::{ImportInsertion, StyleRules};

pub mod result;

pub use result::{FileReport, MigrateResult, Outcome, SkipReason};

/// 移行実行器
pub struct Migrator<'a> {
    fs: &'a dyn FileSystem,
    config: MigrateConfig,
    rules: StyleRules,
}

impl<'a> Migrator<'a> {
    pub fn new(fs: &'a dyn FileSystem, config: MigrateConfig) -> Self {
        Self {
            fs,
            config,
            rules: StyleRules::new(),
        }
    }

    pub fn config(&self) -> &MigrateConfig {
        &self.config
    }

    /// 1ファイルを処理して結果を返す
    ///
    /// 処理順序:
    /// 1. 存在チェック（なければスキップ、バックアップなし）
    /// 2. 読み込み（失敗はエラー）
    /// 3. StyleSheet マーカーチェック（なければスキップ、バックアップなし）
    /// 4. バックアップ作成（失敗はエラー、以降の処理は行わない）
    /// 5. import 挿入（既存 or アンカーなしはスキップ。バックアップは残る）
    /// 6. スタイル値の書き換え
    /// 7. 書き戻し（失敗はエラー）
    pub fn process_file(&self, name: &str) -> FileReport {
        let path = self.config.target_path(name);

        if !self.fs.exists(&path) {
            return FileReport::skipped(name, SkipReason::NotFound);
        }

        let content = match self.fs.read_to_string(&path) {
            Ok(content) => content,
            Err(err) => return FileReport::failed(name, err.to_string()),
        };

        if !imports::has_style_marker(&content) {
            return FileReport::skipped(name, SkipReason::NoStyleSheet);
        }

        // マーカーを通過したら、import チェックより先にバックアップを取る
        let backup = match backup::create(self.fs, &path) {
            Ok(backup) => backup,
            Err(err) => return FileReport::failed(name, err.to_string()),
        };

        let inserted = match imports::insert_responsive_import(&content) {
            ImportInsertion::Inserted(content) => content,
            ImportInsertion::AlreadyPresent => {
                return FileReport::skipped_after_backup(
                    name,
                    SkipReason::AlreadyResponsive,
                    backup,
                );
            }
            ImportInsertion::AnchorNotFound => {
                return FileReport::skipped_after_backup(name, SkipReason::AnchorNotFound, backup);
            }
        };

        let converted = self.rules.apply(&inserted);

        if let Err(err) = self.fs.write(&path, converted.as_bytes()) {
            return FileReport::failed_after_backup(name, err.to_string(), backup);
        }

        FileReport::updated(name, backup)
    }
}

#[cfg(test)]
#[path = "migrate_test.rs"]
mod tests;
