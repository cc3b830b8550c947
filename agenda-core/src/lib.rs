//! Core types for agenda.
//!
//! This crate holds everything the interactive shell drives:
//! - `Event` and `EventPatch` for calendar entries and partial updates
//! - `EventStore`, the in-memory collection and its CSV persistence
//! - `AgendaConfig` for locating the data file

pub mod config;
pub mod error;
pub mod event;
pub mod store;

pub use config::AgendaConfig;
pub use error::{AgendaError, AgendaResult};
pub use event::{Event, EventPatch};
pub use store::EventStore;
