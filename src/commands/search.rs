use std::io::Write;

use agenda_core::EventStore;
use anyhow::Result;

use crate::render::render_event_list;
use crate::utils::tui::Prompt;

pub fn run(store: &EventStore, prompt: &mut impl Prompt, out: &mut impl Write) -> Result<()> {
    let date = prompt.ask("Date (DD-MM-YYYY)")?;
    let matches = store.find_by_date(&date);

    for line in render_event_list(&matches, "No events on that date.") {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}
