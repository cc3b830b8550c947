mod commands;
mod render;
mod shell;
mod utils;

use std::path::PathBuf;

use agenda_core::{AgendaConfig, EventStore};
use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::utils::tui::Terminal;

#[derive(Parser)]
#[command(name = "agenda")]
#[command(about = "Keep a list of events (name, date, time) in a CSV file")]
struct Cli {
    /// CSV file to load on startup and save on exit (default: eventos.csv)
    #[arg(short, long)]
    file: Option<PathBuf>,
}

/// Filter used when `RUST_LOG` is unset or unparsable.
const DEFAULT_LOG_FILTER: &str = "agenda=warn";

fn log_filter(rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

fn main() -> Result<()> {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(rust_log.as_deref()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = AgendaConfig::load()?;
    let path = config.events_file(cli.file.as_deref());
    info!(path = %path.display(), "using events file");

    let mut store = EventStore::new();
    let mut out = std::io::stdout();
    shell::load_on_startup(&mut store, &path, &mut out)?;

    shell::run(&mut store, &path, &mut Terminal, &mut out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_filter_defaults_to_warn() {
        assert_eq!(log_filter(None).to_string(), "agenda=warn");
    }

    #[test]
    fn test_log_filter_honours_rust_log() {
        assert_eq!(log_filter(Some("agenda=debug")).to_string(), "agenda=debug");
        assert_eq!(log_filter(Some("debug")).to_string(), "debug");
    }
}
