//! ファイルシステム抽象化
//!
//! 移行パイプラインが使用するファイル操作の抽象化レイヤー。
//! テスト時に MockFs を注入してファイル操作をモック化できる。

use crate::error::Result;
use std::path::Path;

/// ファイルシステム操作を抽象化するトレイト
///
/// テスト時に MockFs を注入してファイル操作をモック化できる。
/// 本番コードでは RealFs を使用する。
pub trait FileSystem: Send + Sync {
    /// パスが存在するか
    fn exists(&self, path: &Path) -> bool;

    /// ファイル内容を読み込み
    fn read_to_string(&self, path: &Path) -> Result<String>;

    /// ファイルに書き込み
    ///
    /// - 親ディレクトリは自動作成
    /// - 既存ファイルは上書き
    /// - アトミック性は保証しない
    fn write(&self, path: &Path, content: &[u8]) -> Result<()>;

    /// ファイルをコピー
    ///
    /// - 宛先が存在すれば上書き
    /// - 親ディレクトリは自動作成
    fn copy_file(&self, src: &Path, dst: &Path) -> Result<()>;
}

/// 本番用ファイルシステム実装
pub struct RealFs;

impl FileSystem for RealFs {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        Ok(std::fs::read_to_string(path)?)
    }

    fn write(&self, path: &Path, content: &[u8]) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    fn copy_file(&self, src: &Path, dst: &Path) -> Result<()> {
        if let Some(parent) = dst.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::copy(src, dst)?;
        Ok(())
    }
}

#[cfg(test)]
pub mod mock;

#[cfg(test)]
#[path = "fs_test.rs"]
mod tests;
