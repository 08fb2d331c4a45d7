//! 移行結果の定義

use std::path::PathBuf;

/// スキップ理由
///
/// いずれも想定内の分岐であり、エラーとしては扱わない。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// ファイルが存在しない
    NotFound,
    /// StyleSheet を使用していない
    NoStyleSheet,
    /// responsive import が既に存在する
    AlreadyResponsive,
    /// 挿入先となる react-native import が見つからない
    AnchorNotFound,
}

impl SkipReason {
    pub fn message(&self) -> &'static str {
        match self {
            SkipReason::NotFound => "file not found",
            SkipReason::NoStyleSheet => "no StyleSheet usage",
            SkipReason::AlreadyResponsive => "already has responsive imports",
            SkipReason::AnchorNotFound => "no react-native import to anchor on",
        }
    }
}

/// 1ファイルの処理結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// 変換して書き戻した
    Updated,
    /// 想定内の理由で何もしなかった
    Skipped(SkipReason),
    /// 読み書きに失敗した
    Failed(String),
}

/// ファイルごとのレポート
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    /// 対象ファイル名
    pub file: String,
    /// 作成されたバックアップのパス（作成前にスキップした場合は None）
    pub backup: Option<PathBuf>,
    /// 処理結果
    pub outcome: Outcome,
}

impl FileReport {
    pub fn updated(file: impl Into<String>, backup: PathBuf) -> Self {
        Self {
            file: file.into(),
            backup: Some(backup),
            outcome: Outcome::Updated,
        }
    }

    pub fn skipped(file: impl Into<String>, reason: SkipReason) -> Self {
        Self {
            file: file.into(),
            backup: None,
            outcome: Outcome::Skipped(reason),
        }
    }

    /// バックアップ作成後にスキップが確定したケース
    pub fn skipped_after_backup(
        file: impl Into<String>,
        reason: SkipReason,
        backup: PathBuf,
    ) -> Self {
        Self {
            file: file.into(),
            backup: Some(backup),
            outcome: Outcome::Skipped(reason),
        }
    }

    pub fn failed(file: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            backup: None,
            outcome: Outcome::Failed(error.into()),
        }
    }

    /// バックアップ作成後に書き戻しで失敗したケース
    pub fn failed_after_backup(
        file: impl Into<String>,
        error: impl Into<String>,
        backup: PathBuf,
    ) -> Self {
        Self {
            file: file.into(),
            backup: Some(backup),
            outcome: Outcome::Failed(error.into()),
        }
    }
}

/// 移行結果の集計
#[derive(Debug, Clone, Default)]
pub struct MigrateResult {
    /// 更新されたファイル
    pub updated: Vec<FileReport>,
    /// スキップされたファイル
    pub skipped: Vec<FileReport>,
    /// 失敗したファイル
    pub failed: Vec<FileReport>,
}

impl MigrateResult {
    /// レポートを結果へ振り分ける
    pub fn record(&mut self, report: FileReport) {
        match report.outcome {
            Outcome::Updated => self.updated.push(report),
            Outcome::Skipped(_) => self.skipped.push(report),
            Outcome::Failed(_) => self.failed.push(report),
        }
    }

    /// 更新数
    pub fn updated_count(&self) -> usize {
        self.updated.len()
    }

    /// スキップ数
    pub fn skip_count(&self) -> usize {
        self.skipped.len()
    }

    /// 失敗数
    pub fn failure_count(&self) -> usize {
        self.failed.len()
    }

    /// 全アイテム数
    pub fn total_count(&self) -> usize {
        self.updated.len() + self.skipped.len() + self.failed.len()
    }

    /// 結果が空か（何も処理されなかった）
    pub fn is_empty(&self) -> bool {
        self.total_count() == 0
    }

    /// 全て成功したか（失敗なし）
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

#[cfg(test)]
#[path = "result_test.rs"]
mod tests;
