//! バックアップ作成
//!
//! 変更前のファイルを同じディレクトリへ秒精度のタイムスタンプ付きで
//! コピーする。復元は手動（プログラムがバックアップを読み返すことはない）。

use crate::error::Result;
use crate::fs::FileSystem;
use chrono::Local;
use std::path::{Path, PathBuf};

/// バックアップファイル名のタイムスタンプ形式
const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// 元ファイルを `<path>.backup.<timestamp>` へ逐語コピーする
///
/// 同一秒内の再実行では同名になり上書きされる。
pub fn create(fs: &dyn FileSystem, path: &Path) -> Result<PathBuf> {
    let timestamp = Local::now().format(TIMESTAMP_FORMAT).to_string();
    let backup = backup_path(path, &timestamp);
    fs.copy_file(path, &backup)?;
    Ok(backup)
}

/// 元パスとタイムスタンプからバックアップパスを組み立てる
pub fn backup_path(path: &Path, timestamp: &str) -> PathBuf {
    PathBuf::from(format!("{}.backup.{}", path.display(), timestamp))
}

#[cfg(test)]
#[path = "backup_test.rs"]
mod tests;
