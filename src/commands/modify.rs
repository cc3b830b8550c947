use std::io::Write;

use agenda_core::{EventPatch, EventStore};
use anyhow::Result;
use owo_colors::OwoColorize;
use tracing::warn;

use crate::utils::tui::Prompt;

pub fn run(store: &mut EventStore, prompt: &mut impl Prompt, out: &mut impl Write) -> Result<()> {
    let target = prompt.ask("Name of the event to modify")?;
    writeln!(out, "{}", "Enter the new values (leave blank to keep the current one):".dimmed())?;

    let name = prompt.ask("New name")?;
    let date = prompt.ask("New date (DD-MM-YYYY)")?;
    let time = prompt.ask("New time (HH:MM)")?;
    let patch = EventPatch::from_inputs(&name, &date, &time);

    match store.modify(&target, patch) {
        Ok(()) => writeln!(out, "{}", "Event modified.".green())?,
        Err(e) if e.is_not_found() => {
            warn!(name = %target, "modify matched no event");
            writeln!(out, "{}", "Event not found.".yellow())?;
        }
        Err(e) => return Err(e.into()),
    }
    Ok(())
}
