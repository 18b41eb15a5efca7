use std::io;
use std::path::PathBuf;
use clap::Parser;
use tracing::info;
use library_engine::catalog::domain::Catalog;
use library_engine::console::Session;
use library_engine::core::domain::Configuration;
use library_engine::core::library::{LibraryError, LibraryResult};
use library_engine::utils::logs::{parse_level, setup_tracing};

/// Interactive library catalog: load book files, then list, group, search and remove books.
#[derive(Debug, Parser)]
#[command(name = "library", version)]
struct Cli {
    /// JSON configuration file; missing keys keep their defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Data file to load before the session starts (repeatable)
    #[arg(long = "load")]
    load: Vec<String>,

    /// Log level written to stderr
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Write logs as JSON
    #[arg(long)]
    json_logs: bool,
}

fn main() -> LibraryResult<()> {
    let cli = Cli::parse();
    let level = parse_level(cli.log_level.as_str()).ok_or_else(|| LibraryError::invalid_argument(
        format!("unknown log level {}", cli.log_level).as_str(), None))?;
    setup_tracing(level, cli.json_logs);

    let config = match &cli.config {
        Some(path) => Configuration::load(path)?,
        None => Configuration::new(),
    };
    info!("starting library session");

    let stdin = io::stdin();
    let mut session = Session::new(config, Catalog::new(), stdin.lock(), io::stdout());
    for path in &cli.load {
        session.handle_line(format!("ADD {}", path).as_str())?;
    }
    session.run()
}
