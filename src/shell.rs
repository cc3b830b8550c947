//! The interactive menu loop.
//!
//! The shell owns no state of its own: it borrows the store it was handed
//! and calls into it once per menu choice.

use std::io::Write;
use std::path::Path;

use agenda_core::EventStore;
use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use tracing::warn;

use crate::commands;
use crate::utils::tui::Prompt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Search,
    List,
    Modify,
    Delete,
    SaveAndExit,
}

impl MenuChoice {
    const ALL: [MenuChoice; 6] = [
        MenuChoice::Add,
        MenuChoice::Search,
        MenuChoice::List,
        MenuChoice::Modify,
        MenuChoice::Delete,
        MenuChoice::SaveAndExit,
    ];

    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::Add),
            "2" => Some(MenuChoice::Search),
            "3" => Some(MenuChoice::List),
            "4" => Some(MenuChoice::Modify),
            "5" => Some(MenuChoice::Delete),
            "6" => Some(MenuChoice::SaveAndExit),
            _ => None,
        }
    }

    fn label(self) -> &'static str {
        match self {
            MenuChoice::Add => "Add event",
            MenuChoice::Search => "Search events by date",
            MenuChoice::List => "List events",
            MenuChoice::Modify => "Modify event",
            MenuChoice::Delete => "Delete event",
            MenuChoice::SaveAndExit => "Save and exit",
        }
    }
}

fn print_menu(out: &mut impl Write) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "--- Event Manager ---".bold())?;
    for (i, choice) in MenuChoice::ALL.iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, choice.label())?;
    }
    Ok(())
}

/// Load the events file before the menu starts.
///
/// A missing file is not an error: the session starts empty. Any other
/// failure, including malformed CSV, is returned so the program stops before
/// a later save could overwrite the file.
pub fn load_on_startup(store: &mut EventStore, path: &Path, out: &mut impl Write) -> Result<()> {
    match store.load(path) {
        Ok(count) => writeln!(out, "{}", format!("Events loaded ({}).", count).dimmed())?,
        Err(e) if e.is_not_found() => {
            warn!(path = %path.display(), "events file not found, starting empty");
            writeln!(out, "{}", "File not found.".dimmed())?;
        }
        Err(e) => {
            return Err(e)
                .with_context(|| format!("Could not load events from {}", path.display()));
        }
    }
    Ok(())
}

/// Run the menu until the user picks "save and exit".
///
/// Returns once the events have been written to `path`. A failed save is
/// returned as an error so the caller can report it before exiting.
pub fn run(
    store: &mut EventStore,
    path: &Path,
    prompt: &mut impl Prompt,
    out: &mut impl Write,
) -> Result<()> {
    loop {
        print_menu(out)?;
        let input = prompt.ask("Select an option")?;

        match MenuChoice::parse(&input) {
            Some(MenuChoice::Add) => commands::add::run(store, prompt, out)?,
            Some(MenuChoice::Search) => commands::search::run(store, prompt, out)?,
            Some(MenuChoice::List) => commands::list::run(store, out)?,
            Some(MenuChoice::Modify) => commands::modify::run(store, prompt, out)?,
            Some(MenuChoice::Delete) => commands::delete::run(store, prompt, out)?,
            Some(MenuChoice::SaveAndExit) => {
                commands::save::run(store, path, out)?;
                writeln!(out, "Goodbye!")?;
                return Ok(());
            }
            None => writeln!(out, "{}", "Invalid option.".red())?,
        }
    }
}
