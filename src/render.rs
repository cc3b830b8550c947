//! Terminal rendering for agenda types.

use agenda_core::Event;
use owo_colors::OwoColorize;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Event {
    fn render(&self) -> String {
        format!(
            "{} {} {}",
            self.name.bold(),
            "-".dimmed(),
            format!("{} {}", self.date, self.time).dimmed()
        )
    }
}

/// Render events one per line, or a placeholder when there are none.
pub fn render_event_list(events: &[&Event], empty_message: &str) -> Vec<String> {
    if events.is_empty() {
        return vec![empty_message.dimmed().to_string()];
    }

    events.iter().map(|e| format!("  {}", e.render())).collect()
}

pub fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}
