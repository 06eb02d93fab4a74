use serde::{Deserialize, Serialize};

use super::id::BookId;

/// 管理対象のレコード。Libraryが所有し、Libraryを通じて操作する。
/// フィールド宣言順 = 永続化JSONのキー順（id, title, author）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    id: BookId,
    title: String,
    author: String,
}

impl Book {
    pub(crate) fn new(id: BookId, title: String, author: String) -> Self {
        Self { id, title, author }
    }

    pub fn id(&self) -> BookId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    // --- 内部操作（Library経由でのみ呼ばれる） ---

    pub(crate) fn set_title(&mut self, title: String) {
        self.title = title;
    }

    pub(crate) fn set_author(&mut self, author: String) {
        self.author = author;
    }
}
