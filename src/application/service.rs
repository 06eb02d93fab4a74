use crate::domain::error::DomainError;
use crate::domain::model::book::Book;
use crate::domain::model::id::BookId;
use crate::domain::model::library::Library;
use crate::domain::repository::LibraryRepository;

use super::error::AppError;

/// Libraryに対するユースケース。
/// 毎回 load → mutate → save のパターンで操作する（プロセス間で状態を持たない）。
pub struct LibraryService<R: LibraryRepository> {
    repo: R,
}

impl<R: LibraryRepository> LibraryService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Bookを追加し、採番されたIDを返す。
    pub fn create(&self, title: &str, author: &str) -> Result<BookId, AppError> {
        let mut library = self.load_library()?;
        let id = library.add(title, author);
        self.persist(&library)?;
        Ok(id)
    }

    /// 全Bookを格納順で返す。読み取り専用（ファイルを作らない）。
    pub fn list(&self) -> Result<Vec<Book>, AppError> {
        Ok(self.load_library()?.books().to_vec())
    }

    /// ID指定で1件読む。読み取り専用。
    pub fn read(&self, id: BookId) -> Result<Book, AppError> {
        let library = self.load_library()?;
        let book = library.get(id).ok_or(DomainError::BookNotFound(id))?;
        Ok(book.clone())
    }

    /// タイトル・著者を差し替える。見つからなければsaveしない。
    pub fn update(&self, id: BookId, title: &str, author: &str) -> Result<(), AppError> {
        let mut library = self.load_library()?;
        library.update(id, title, author)?;
        self.persist(&library)?;
        Ok(())
    }

    /// Bookを削除する。見つからなければsaveしない。
    pub fn delete(&self, id: BookId) -> Result<(), AppError> {
        let mut library = self.load_library()?;
        library.remove(id)?;
        self.persist(&library)?;
        Ok(())
    }

    // --- private ---

    fn load_library(&self) -> Result<Library, AppError> {
        self.repo
            .load()
            .map_err(|e| AppError::Storage(Box::new(e)))
    }

    fn persist(&self, library: &Library) -> Result<(), AppError> {
        self.repo
            .save(library)
            .map_err(|e| AppError::Storage(Box::new(e)))
    }
}
