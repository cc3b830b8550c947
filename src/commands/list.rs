use std::io::Write;

use agenda_core::EventStore;
use anyhow::Result;

use crate::render::render_event_list;

pub fn run(store: &EventStore, out: &mut impl Write) -> Result<()> {
    for line in render_event_list(&store.list_sorted_by_date(), "No events.") {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}
