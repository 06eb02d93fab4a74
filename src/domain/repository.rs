use super::model::library::Library;

/// 永続化の抽象。Infra層が実装する。
pub trait LibraryRepository {
    type Error: std::error::Error + Send + Sync + 'static;

    /// ファイル不在は空のLibraryとして返す（エラーにしない）。
    fn load(&self) -> Result<Library, Self::Error>;
    fn save(&self, library: &Library) -> Result<(), Self::Error>;
}
