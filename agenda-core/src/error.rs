//! Error types for agenda.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur in agenda operations.
#[derive(Error, Debug)]
pub enum AgendaError {
    #[error("Event not found: {0}")]
    EventNotFound(String),

    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Missing column '{0}' in CSV header")]
    MissingColumn(&'static str),

    /// Message already names the failing record or line.
    #[error("{0}")]
    Parse(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AgendaError {
    /// True for the non-fatal "nothing matched" outcomes (missing event or missing file).
    pub fn is_not_found(&self) -> bool {
        matches!(self, AgendaError::EventNotFound(_) | AgendaError::FileNotFound(_))
    }

    /// True for malformed CSV content.
    pub fn is_parse(&self) -> bool {
        matches!(self, AgendaError::MissingColumn(_) | AgendaError::Parse(_))
    }
}

impl From<csv::Error> for AgendaError {
    fn from(err: csv::Error) -> Self {
        let message = err.to_string();
        match err.into_kind() {
            csv::ErrorKind::Io(e) => AgendaError::Io(e),
            _ => AgendaError::Parse(message),
        }
    }
}

/// Result type alias for agenda operations.
pub type AgendaResult<T> = Result<T, AgendaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_kinds() {
        assert!(AgendaError::EventNotFound("Retro".into()).is_not_found());
        assert!(AgendaError::FileNotFound(PathBuf::from("eventos.csv")).is_not_found());
        assert!(!AgendaError::Parse("bad row".into()).is_not_found());
    }

    #[test]
    fn test_parse_kinds() {
        assert!(AgendaError::MissingColumn("date").is_parse());
        assert!(AgendaError::Parse("bad row".into()).is_parse());
        assert!(!AgendaError::EventNotFound("Retro".into()).is_parse());
    }

    #[test]
    fn test_csv_error_message_not_prefixed_twice() {
        let content = "name,date,time\nKickoff,01-03-2024\n";
        let mut reader = csv::Reader::from_reader(content.as_bytes());
        let csv_err = reader.records().next().unwrap().unwrap_err();
        let expected = csv_err.to_string();

        let err = AgendaError::from(csv_err);

        assert!(err.is_parse());
        assert_eq!(err.to_string(), expected);
    }

    #[test]
    fn test_display_includes_path() {
        let err = AgendaError::FileNotFound(PathBuf::from("data/eventos.csv"));
        assert_eq!(err.to_string(), "File not found: data/eventos.csv");
    }
}
