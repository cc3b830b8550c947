use std::io::Write;
use std::path::Path;

use agenda_core::EventStore;
use anyhow::{Context, Result};
use owo_colors::OwoColorize;

pub fn run(store: &EventStore, path: &Path, out: &mut impl Write) -> Result<()> {
    store
        .save(path)
        .with_context(|| format!("Failed to save events to {}", path.display()))?;

    writeln!(out, "{}", "Events saved.".green())?;
    Ok(())
}
