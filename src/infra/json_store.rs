use std::path::PathBuf;

use tracing::{debug, warn};

use crate::domain::model::library::Library;
use crate::domain::repository::LibraryRepository;

#[derive(Debug, thiserror::Error)]
pub enum JsonStoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// JSONファイルによるLibraryRepository実装。
/// 1ファイル = 全コレクション。毎回全量を読み書きする。
pub struct JsonLibraryStore {
    path: PathBuf,
}

impl JsonLibraryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl LibraryRepository for JsonLibraryStore {
    type Error = JsonStoreError;

    /// ファイル不在 → 空のLibrary。パース不能 → 警告ログの上で空として扱う
    /// （寛容ポリシー。旧内容は次のsaveで上書き破棄される）。
    fn load(&self) -> Result<Library, Self::Error> {
        if !self.path.exists() {
            return Ok(Library::new());
        }
        let content = std::fs::read_to_string(&self.path)?;
        match serde_json::from_str(&content) {
            Ok(library) => Ok(library),
            Err(e) => {
                warn!(
                    path = %self.path.display(),
                    error = %e,
                    "data file is not a valid book array, treating as empty"
                );
                Ok(Library::new())
            }
        }
    }

    fn save(&self, library: &Library) -> Result<(), Self::Error> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let content = serde_json::to_string_pretty(library)?;
        let tmp = self.path.with_extension("tmp");
        std::fs::write(&tmp, &content)?;
        std::fs::rename(&tmp, &self.path)?;
        debug!(path = %self.path.display(), books = library.len(), "library saved");
        Ok(())
    }
}
