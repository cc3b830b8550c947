//! Event records and partial updates.
//!
//! Dates (`DD-MM-YYYY`) and times (`HH:MM`) are kept as the text the user
//! typed. They are never parsed, only compared.

use std::fmt;

use serde::Deserialize;

/// A calendar event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    /// Used for lookups by modify/remove. Not required to be unique.
    pub name: String,
    /// `DD-MM-YYYY`, compared as a plain string
    pub date: String,
    /// `HH:MM`
    pub time: String,
}

impl Event {
    pub fn new(name: impl Into<String>, date: impl Into<String>, time: impl Into<String>) -> Self {
        Event {
            name: name.into(),
            date: date.into(),
            time: time.into(),
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} {}", self.name, self.date, self.time)
    }
}

/// Fields to overwrite on an existing event. `None` leaves the field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EventPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub time: Option<String>,
}

impl EventPatch {
    /// Build a patch from raw prompt answers, where blank input means "keep".
    pub fn from_inputs(name: &str, date: &str, time: &str) -> Self {
        EventPatch {
            name: non_empty(name),
            date: non_empty(date),
            time: non_empty(time),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.date.is_none() && self.time.is_none()
    }

    pub fn apply(&self, event: &mut Event) {
        if let Some(name) = &self.name {
            event.name = name.clone();
        }
        if let Some(date) = &self.date {
            event.date = date.clone();
        }
        if let Some(time) = &self.time {
            event.time = time.clone();
        }
    }
}

fn non_empty(input: &str) -> Option<String> {
    if input.is_empty() {
        None
    } else {
        Some(input.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kickoff() -> Event {
        Event::new("Kickoff", "01-03-2024", "09:00")
    }

    #[test]
    fn test_display() {
        assert_eq!(kickoff().to_string(), "Kickoff - 01-03-2024 09:00");
    }

    #[test]
    fn test_apply_only_set_fields() {
        let mut event = kickoff();
        let patch = EventPatch {
            time: Some("09:30".to_string()),
            ..Default::default()
        };
        patch.apply(&mut event);

        assert_eq!(event, Event::new("Kickoff", "01-03-2024", "09:30"));
    }

    #[test]
    fn test_from_inputs_blank_means_keep() {
        let patch = EventPatch::from_inputs("", "02-03-2024", "");
        assert_eq!(patch.name, None);
        assert_eq!(patch.date.as_deref(), Some("02-03-2024"));
        assert_eq!(patch.time, None);

        assert!(EventPatch::from_inputs("", "", "").is_empty());
    }

    #[test]
    fn test_patch_rejects_unknown_fields() {
        let content = "time = \"10:00\"\nlocation = \"Room 1\"";
        let parsed: Result<EventPatch, _> = toml::from_str(content);
        assert!(parsed.is_err());

        let parsed: EventPatch = toml::from_str("time = \"10:00\"").unwrap();
        assert_eq!(parsed.time.as_deref(), Some("10:00"));
        assert_eq!(parsed.name, None);
    }
}
