use std::io::Write;

use agenda_core::{Event, EventStore};
use anyhow::Result;
use owo_colors::OwoColorize;

use crate::utils::tui::Prompt;

pub fn run(store: &mut EventStore, prompt: &mut impl Prompt, out: &mut impl Write) -> Result<()> {
    let name = prompt.ask("Event name")?;
    let date = prompt.ask("Date (DD-MM-YYYY)")?;
    let time = prompt.ask("Time (HH:MM)")?;

    store.add(Event::new(name, date, time));

    writeln!(out, "{}", "Event added.".green())?;
    Ok(())
}
