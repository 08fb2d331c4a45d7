//! 移行対象の設定
//!
//! 対象ディレクトリとファイル一覧はコンパイル時定数をデフォルトとし、
//! CLI から上書きしてドライバへ注入する。

use std::path::PathBuf;

/// デフォルトの対象ディレクトリ
pub const DEFAULT_SCREENS_DIR: &str = "src/screens";

/// デフォルトの対象スクリーンファイル
pub const DEFAULT_TARGET_FILES: [&str; 4] = [
    "bagemptyscreen.js",
    "bagquantityselectormodaloverlay.js",
    "bagsizeselectormodaloverlay.js",
    "InviteAFriend.js",
];

/// 移行設定
#[derive(Debug, Clone)]
pub struct MigrateConfig {
    /// 対象スクリーンのディレクトリ
    pub screens_dir: PathBuf,
    /// 処理するファイル名（宣言順に処理される）
    pub files: Vec<String>,
}

impl Default for MigrateConfig {
    fn default() -> Self {
        Self {
            screens_dir: PathBuf::from(DEFAULT_SCREENS_DIR),
            files: DEFAULT_TARGET_FILES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl MigrateConfig {
    /// 対象ディレクトリを上書き
    pub fn with_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.screens_dir = dir.into();
        self
    }

    /// 対象ファイル一覧を上書き
    pub fn with_files(mut self, files: Vec<String>) -> Self {
        self.files = files;
        self
    }

    /// ファイル名から対象パスを組み立てる
    pub fn target_path(&self, name: &str) -> PathBuf {
        self.screens_dir.join(name)
    }
}
