//! Shared test harness for integration tests.

#![allow(dead_code)]

use std::cell::RefCell;

use bookstore::application::service::LibraryService;
use bookstore::domain::model::library::Library;
use bookstore::domain::repository::LibraryRepository;

// =============================================================================
// InMemoryRepo — テスト用リポジトリ
// =============================================================================

#[derive(Debug, thiserror::Error)]
#[error("in-memory store error")]
pub struct InMemoryError;

/// ファイルI/O不要のインメモリリポジトリ。
/// 永続化と同じ経路を通すため、中身はJSON文字列で保持する。
pub struct InMemoryRepo {
    store: RefCell<Option<String>>,
}

impl InMemoryRepo {
    pub fn new() -> Self {
        Self {
            store: RefCell::new(None),
        }
    }
}

impl LibraryRepository for InMemoryRepo {
    type Error = InMemoryError;

    fn load(&self) -> Result<Library, Self::Error> {
        match self.store.borrow().as_deref() {
            Some(json) => Ok(serde_json::from_str(json).unwrap()),
            None => Ok(Library::new()),
        }
    }

    fn save(&self, library: &Library) -> Result<(), Self::Error> {
        let json = serde_json::to_string(library).unwrap();
        *self.store.borrow_mut() = Some(json);
        Ok(())
    }
}

// =============================================================================
// Seeded helpers
// =============================================================================

/// 3冊入りのServiceを返す。採番は 1, 2, 3。
pub fn seeded_service() -> LibraryService<InMemoryRepo> {
    let svc = LibraryService::new(InMemoryRepo::new());
    svc.create("Dune", "Frank Herbert").unwrap();
    svc.create("Foundation", "Isaac Asimov").unwrap();
    svc.create("Hyperion", "Dan Simmons").unwrap();
    svc
}

/// 空のServiceを返す。
pub fn empty_service() -> LibraryService<InMemoryRepo> {
    LibraryService::new(InMemoryRepo::new())
}
