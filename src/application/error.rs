use crate::domain::error::DomainError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("storage error: {0}")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl AppError {
    /// not-foundはユーザー向けの通常の結果であり、障害ではない。
    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::Domain(DomainError::BookNotFound(_)))
    }
}
