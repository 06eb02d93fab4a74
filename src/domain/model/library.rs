use serde::{Deserialize, Serialize};

use super::book::Book;
use super::id::BookId;
use crate::domain::error::DomainError;

/// Library — 集約ルート。全Book操作はここを経由する。
/// 挿入順を保持する列。検索はID線形走査（インデックスなし）。
/// 永続化表現はBookの素のJSON配列（transparent）。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Library {
    books: Vec<Book>,
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn get(&self, id: BookId) -> Option<&Book> {
        self.books.iter().find(|b| b.id() == id)
    }

    /// Book追加。IDは max既存ID + 1（空なら1）で採番して返す。
    /// 採番はloadスナップショットに対する純関数。
    pub fn add(&mut self, title: impl Into<String>, author: impl Into<String>) -> BookId {
        let id = self.next_id();
        self.books.push(Book::new(id, title.into(), author.into()));
        id
    }

    /// タイトルと著者をin-placeで差し替える。IDは不変。
    pub fn update(
        &mut self,
        id: BookId,
        title: impl Into<String>,
        author: impl Into<String>,
    ) -> Result<(), DomainError> {
        let book = self
            .books
            .iter_mut()
            .find(|b| b.id() == id)
            .ok_or(DomainError::BookNotFound(id))?;
        book.set_title(title.into());
        book.set_author(author.into());
        Ok(())
    }

    /// Book削除。一意性不変条件により一致は高々1件。
    pub fn remove(&mut self, id: BookId) -> Result<(), DomainError> {
        let before = self.books.len();
        self.books.retain(|b| b.id() != id);
        if self.books.len() == before {
            return Err(DomainError::BookNotFound(id));
        }
        Ok(())
    }

    fn next_id(&self) -> BookId {
        self.books
            .iter()
            .map(|b| b.id())
            .max()
            .map(BookId::next)
            .unwrap_or(BookId::new(1))
    }
}
