//! Agenda configuration.

use std::path::{Path, PathBuf};

use config::{Config, File};
use serde::Deserialize;
use tracing::debug;

use crate::error::{AgendaError, AgendaResult};

static DEFAULT_EVENTS_FILE: &str = "eventos.csv";

fn default_events_file() -> PathBuf {
    PathBuf::from(DEFAULT_EVENTS_FILE)
}

/// Configuration at ~/.config/agenda/config.toml
///
/// The file is optional. Anything it leaves out falls back to the defaults.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct AgendaConfig {
    /// CSV file holding the events, relative to the working directory
    #[serde(default = "default_events_file")]
    pub events_file: PathBuf,
}

impl Default for AgendaConfig {
    fn default() -> Self {
        AgendaConfig {
            events_file: default_events_file(),
        }
    }
}

impl AgendaConfig {
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("agenda").join("config.toml"))
    }

    /// Load the user's config file, or the defaults if there is none.
    pub fn load() -> AgendaResult<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> AgendaResult<Self> {
        debug!(path = %path.display(), "reading config");

        Config::builder()
            .add_source(File::from(path).required(false))
            .build()
            .map_err(|e| AgendaError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| AgendaError::Config(e.to_string()))
    }

    /// The events file to use, with an explicit override taking precedence.
    pub fn events_file(&self, override_path: Option<&Path>) -> PathBuf {
        override_path
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.events_file.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_config_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AgendaConfig::load_from(&dir.path().join("config.toml")).unwrap();

        assert_eq!(config, AgendaConfig::default());
        assert_eq!(config.events_file, PathBuf::from("eventos.csv"));
    }

    #[test]
    fn test_config_file_sets_events_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "events_file = \"/tmp/agenda/events.csv\"\n").unwrap();

        let config = AgendaConfig::load_from(&path).unwrap();

        assert_eq!(config.events_file, PathBuf::from("/tmp/agenda/events.csv"));
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "events_file = [1, 2\n").unwrap();

        let err = AgendaConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, AgendaError::Config(_)));
    }

    #[test]
    fn test_override_takes_precedence() {
        let config = AgendaConfig {
            events_file: PathBuf::from("from-config.csv"),
        };

        assert_eq!(
            config.events_file(Some(Path::new("from-flag.csv"))),
            PathBuf::from("from-flag.csv")
        );
        assert_eq!(config.events_file(None), PathBuf::from("from-config.csv"));
    }
}
