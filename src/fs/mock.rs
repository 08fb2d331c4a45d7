//! テスト用モックファイルシステム

use super::*;
use std::collections::HashMap;
use std::sync::RwLock;

/// テスト用モックファイルシステム
pub struct MockFs {
    files: RwLock<HashMap<String, String>>,
}

impl MockFs {
    pub fn new() -> Self {
        Self {
            files: RwLock::new(HashMap::new()),
        }
    }

    /// ファイルを追加
    pub fn add_file(&self, path: &str, content: &str) {
        self.files
            .write()
            .unwrap()
            .insert(path.to_string(), content.to_string());
    }

    /// 保持している全パス（ソート済み）
    pub fn paths(&self) -> Vec<String> {
        let mut paths: Vec<String> = self.files.read().unwrap().keys().cloned().collect();
        paths.sort();
        paths
    }
}

impl Default for MockFs {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem for MockFs {
    fn exists(&self, path: &Path) -> bool {
        self.files
            .read()
            .unwrap()
            .contains_key(path.to_string_lossy().as_ref())
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        self.files
            .read()
            .unwrap()
            .get(path.to_string_lossy().as_ref())
            .cloned()
            .ok_or_else(|| {
                std::io::Error::new(std::io::ErrorKind::NotFound, "not found").into()
            })
    }

    fn write(&self, path: &Path, content: &[u8]) -> Result<()> {
        self.files.write().unwrap().insert(
            path.to_string_lossy().to_string(),
            String::from_utf8_lossy(content).to_string(),
        );
        Ok(())
    }

    fn copy_file(&self, src: &Path, dst: &Path) -> Result<()> {
        let content = self.read_to_string(src)?;
        self.files
            .write()
            .unwrap()
            .insert(dst.to_string_lossy().to_string(), content);
        Ok(())
    }
}
