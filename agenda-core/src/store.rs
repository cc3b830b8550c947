//! In-memory event collection with CSV persistence.
//!
//! The file layout is a `name,date,time` header followed by one row per
//! event in storage order. Saving always truncates and rewrites the file.

use std::fs::File;
use std::io::ErrorKind;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use tracing::debug;

use crate::error::{AgendaError, AgendaResult};
use crate::event::{Event, EventPatch};

/// Column names, in the order they are written.
pub const CSV_HEADER: [&str; 3] = ["name", "date", "time"];

/// Owns the ordered list of events.
///
/// Events are only reachable through the store, which hands out shared
/// references and never exposes the backing `Vec` mutably.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EventStore {
    events: Vec<Event>,
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Events in storage (insertion) order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    // =========================================================================
    // Event operations
    // =========================================================================

    pub fn add(&mut self, event: Event) {
        debug!(name = %event.name, date = %event.date, "adding event");
        self.events.push(event);
    }

    /// All events whose date equals `date` exactly, in storage order.
    pub fn find_by_date(&self, date: &str) -> Vec<&Event> {
        self.events.iter().filter(|e| e.date == date).collect()
    }

    /// Every event, ordered by the date string.
    ///
    /// This is a plain lexicographic sort, so `01-12-2024` comes before
    /// `15-01-2023`. The sort is stable: equal dates keep insertion order.
    pub fn list_sorted_by_date(&self) -> Vec<&Event> {
        let mut sorted: Vec<&Event> = self.events.iter().collect();
        sorted.sort_by(|a, b| a.date.cmp(&b.date));
        sorted
    }

    /// Apply `patch` to the first event named `name`.
    pub fn modify(&mut self, name: &str, patch: EventPatch) -> AgendaResult<()> {
        let event = self
            .events
            .iter_mut()
            .find(|e| e.name == name)
            .ok_or_else(|| AgendaError::EventNotFound(name.to_string()))?;

        patch.apply(event);
        debug!(name, ?patch, "modified event");
        Ok(())
    }

    /// Remove every event named `name`. Returns how many were removed,
    /// which may be zero.
    pub fn remove(&mut self, name: &str) -> usize {
        let before = self.events.len();
        self.events.retain(|e| e.name != name);
        let removed = before - self.events.len();
        debug!(name, removed, "removed events");
        removed
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    /// Write the whole collection to `path`, replacing any existing file.
    pub fn save(&self, path: &Path) -> AgendaResult<()> {
        let mut writer = WriterBuilder::new().has_headers(false).from_path(path)?;

        writer.write_record(CSV_HEADER)?;
        for event in &self.events {
            writer.write_record([&event.name, &event.date, &event.time])?;
        }
        writer.flush()?;

        debug!(path = %path.display(), count = self.events.len(), "saved events");
        Ok(())
    }

    /// Replace the collection with the events stored at `path`.
    ///
    /// A missing file returns `FileNotFound` and leaves the store untouched.
    /// Malformed content fails the whole load, also leaving the store
    /// untouched. Returns the number of events loaded.
    pub fn load(&mut self, path: &Path) -> AgendaResult<usize> {
        let file = File::open(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => AgendaError::FileNotFound(path.to_path_buf()),
            _ => AgendaError::Io(e),
        })?;

        let events = read_events(file)?;
        let count = events.len();
        self.events = events;

        debug!(path = %path.display(), count, "loaded events");
        Ok(count)
    }
}

/// Where each named column sits in the file's header row.
struct ColumnIndex {
    name: usize,
    date: usize,
    time: usize,
}

impl ColumnIndex {
    fn from_header(header: &StringRecord) -> AgendaResult<Self> {
        let position = |column: &'static str| {
            header
                .iter()
                .position(|h| h == column)
                .ok_or(AgendaError::MissingColumn(column))
        };

        Ok(ColumnIndex {
            name: position("name")?,
            date: position("date")?,
            time: position("time")?,
        })
    }

    fn event_from(&self, record: &StringRecord) -> AgendaResult<Event> {
        let field = |idx: usize| {
            record.get(idx).map(str::to_string).ok_or_else(|| {
                let line = record.position().map(|p| p.line()).unwrap_or_default();
                let column = idx + 1;
                AgendaError::Parse(format!("CSV parse error: line {line}: missing field {column}"))
            })
        };

        Ok(Event {
            name: field(self.name)?,
            date: field(self.date)?,
            time: field(self.time)?,
        })
    }
}

fn read_events<R: std::io::Read>(source: R) -> AgendaResult<Vec<Event>> {
    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(source);

    let columns = ColumnIndex::from_header(reader.headers()?)?;

    reader
        .records()
        .map(|record| columns.event_from(&record?))
        .collect()
}
