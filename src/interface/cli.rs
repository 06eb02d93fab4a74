//! CLI for bookstore
//!
//! clap subcommands <-> application::LibraryService
//!
//! 5 commands: create, list, read, update, delete

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::application::error::AppError;
use crate::application::service::LibraryService;
use crate::domain::model::book::Book;
use crate::domain::model::id::BookId;
use crate::domain::repository::LibraryRepository;
use crate::infra::json_store::JsonLibraryStore;

// =============================================================================
// Public entry point
// =============================================================================

/// CLIを実行する。data_pathはレコード永続化先のJSONファイル。
pub fn run(data_path: PathBuf) -> anyhow::Result<()> {
    let cli = Cli::parse();
    let service = LibraryService::new(JsonLibraryStore::new(data_path));
    let output = dispatch(&cli.command, &service)?;
    println!("{output}");
    Ok(())
}

// =============================================================================
// Command definitions
// =============================================================================

#[derive(Debug, Parser)]
#[command(
    name = "bookstore",
    about = "Manage book records in a local JSON file",
    arg_required_else_help = true
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Create a new book
    Create { title: String, author: String },
    /// List all books
    List,
    /// Read a book by id
    Read { id: BookId },
    /// Update a book by id
    Update {
        id: BookId,
        title: String,
        author: String,
    },
    /// Delete a book by id
    Delete { id: BookId },
}

// =============================================================================
// Dispatch
// =============================================================================

/// コマンドを実行してstdout向けの文字列を返す。
/// not-foundはメッセージとして返す正常系（exit 0）。それ以外のエラーは伝播。
fn dispatch<R: LibraryRepository>(
    command: &Command,
    service: &LibraryService<R>,
) -> Result<String, AppError> {
    match command {
        Command::Create { title, author } => {
            let id = service.create(title, author)?;
            Ok(format!("Created book with id {id}"))
        }
        Command::List => Ok(render_list(&service.list()?)),
        Command::Read { id } => match service.read(*id) {
            Ok(book) => render_book(&book),
            Err(e) if e.is_not_found() => Ok(NOT_FOUND.to_string()),
            Err(e) => Err(e),
        },
        Command::Update { id, title, author } => {
            confirm(service.update(*id, title, author), "Book updated.")
        }
        Command::Delete { id } => confirm(service.delete(*id), "Book deleted."),
    }
}

const NOT_FOUND: &str = "Book not found.";

fn confirm(result: Result<(), AppError>, message: &str) -> Result<String, AppError> {
    match result {
        Ok(()) => Ok(message.to_string()),
        Err(e) if e.is_not_found() => Ok(NOT_FOUND.to_string()),
        Err(e) => Err(e),
    }
}

// =============================================================================
// Rendering
// =============================================================================

/// 一覧表示。"{id}: {title} by {author}" を1行ずつ。空なら "No books found."
pub fn render_list(books: &[Book]) -> String {
    if books.is_empty() {
        return "No books found.".to_string();
    }
    books
        .iter()
        .map(|b| format!("{}: {} by {}", b.id(), b.title(), b.author()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// 1件をインデント付きJSONで表示する。
pub fn render_book(book: &Book) -> Result<String, AppError> {
    serde_json::to_string_pretty(book).map_err(|e| AppError::Storage(Box::new(e)))
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::library::Library;

    fn sample_books() -> Vec<Book> {
        let mut library = Library::new();
        library.add("Dune", "Frank Herbert");
        library.add("Foundation", "Isaac Asimov");
        library.books().to_vec()
    }

    // ---- render_list ----

    #[test]
    fn render_list_empty() {
        assert_eq!(render_list(&[]), "No books found.");
    }

    #[test]
    fn render_list_one_line_per_book() {
        let out = render_list(&sample_books());
        assert_eq!(out, "1: Dune by Frank Herbert\n2: Foundation by Isaac Asimov");
    }

    #[test]
    fn render_list_allows_empty_fields() {
        let mut library = Library::new();
        library.add("", "");
        let out = render_list(library.books());
        assert_eq!(out, "1:  by ");
    }

    // ---- render_book ----

    #[test]
    fn render_book_pretty_json_key_order() {
        let books = sample_books();
        let out = render_book(&books[0]).unwrap();
        assert_eq!(
            out,
            "{\n  \"id\": 1,\n  \"title\": \"Dune\",\n  \"author\": \"Frank Herbert\"\n}"
        );
    }

    // ---- id parsing ----

    #[test]
    fn book_id_parses_from_digits() {
        let id: BookId = "42".parse().unwrap();
        assert_eq!(id, BookId::new(42));
    }

    #[test]
    fn book_id_rejects_non_digits() {
        assert!("abc".parse::<BookId>().is_err());
        assert!("-1".parse::<BookId>().is_err());
        assert!("".parse::<BookId>().is_err());
    }

    // ---- clap wiring ----

    #[test]
    fn cli_parses_create() {
        let cli = Cli::try_parse_from(["bookstore", "create", "Dune", "Frank Herbert"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Create { ref title, ref author }
                if title == "Dune" && author == "Frank Herbert"
        ));
    }

    #[test]
    fn cli_parses_update_with_id() {
        let cli = Cli::try_parse_from(["bookstore", "update", "3", "New", "Author"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Update { id, .. } if id == BookId::new(3)
        ));
    }

    #[test]
    fn cli_without_command_shows_help() {
        let err = Cli::try_parse_from(["bookstore"]).unwrap_err();
        assert_eq!(
            err.kind(),
            clap::error::ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
        );
    }
}
