use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let data_path = std::env::var_os("BOOKSTORE_FILE")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("books.json"));

    bookstore::interface::cli::run(data_path)
}

/// stderrへのログ出力。stdoutはコマンド出力専用に保つ。
fn init_tracing() {
    use tracing_subscriber::prelude::*;
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}
