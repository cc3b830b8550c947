use std::io::Write;

use agenda_core::EventStore;
use anyhow::Result;
use owo_colors::OwoColorize;

use crate::render::pluralize;
use crate::utils::tui::Prompt;

/// Removes every event with the given name. Reports success even when
/// nothing matched.
pub fn run(store: &mut EventStore, prompt: &mut impl Prompt, out: &mut impl Write) -> Result<()> {
    let name = prompt.ask("Name of the event to delete")?;
    let removed = store.remove(&name);

    if removed > 1 {
        let message = format!("Event deleted ({} {}).", removed, pluralize("event", removed));
        writeln!(out, "{}", message.green())?;
    } else {
        writeln!(out, "{}", "Event deleted.".green())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::tui::Scripted;
    use agenda_core::Event;

    fn store() -> EventStore {
        let mut store = EventStore::new();
        store.add(Event::new("Retro", "02-03-2024", "17:00"));
        store.add(Event::new("Kickoff", "01-03-2024", "09:00"));
        store.add(Event::new("Retro", "09-03-2024", "17:00"));
        store
    }

    #[test]
    fn test_delete_removes_all_matches() {
        let mut store = store();
        let mut out = Vec::new();

        run(&mut store, &mut Scripted::new(&["Retro"]), &mut out).unwrap();

        assert_eq!(store.events(), &[Event::new("Kickoff", "01-03-2024", "09:00")]);
        assert!(String::from_utf8(out).unwrap().contains("(2 events)"));
    }

    #[test]
    fn test_delete_unknown_name_still_succeeds() {
        let mut store = store();
        let mut out = Vec::new();

        run(&mut store, &mut Scripted::new(&["Standup"]), &mut out).unwrap();

        assert_eq!(store.len(), 3);
        assert!(String::from_utf8(out).unwrap().contains("Event deleted."));
    }
}
