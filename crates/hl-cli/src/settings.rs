//! Persistent settings for the `hl` front end.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CliError, CliResult};

/// Settings file looked up in the working directory when none is given.
pub const DEFAULT_SETTINGS_FILE: &str = "hidden-london.json";

/// Chat log file name used when the settings do not name one.
pub const DEFAULT_CHAT_LOG: &str = "hidden-london-chat.json";

/// User-editable settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Whether the threat roll command is available.
    pub enable_threat_rolls: bool,
    /// Where posted messages are kept. Relative paths are resolved against
    /// the settings file's directory.
    pub chat_log: PathBuf,
    /// Default RNG seed; unset means fresh entropy for every roll.
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            enable_threat_rolls: true,
            chat_log: PathBuf::from(DEFAULT_CHAT_LOG),
            seed: None,
        }
    }
}

impl Settings {
    /// Enable or disable threat rolls.
    pub fn with_threat_rolls(mut self, enabled: bool) -> Self {
        self.enable_threat_rolls = enabled;
        self
    }

    /// Set the chat log location.
    pub fn with_chat_log(mut self, path: impl Into<PathBuf>) -> Self {
        self.chat_log = path.into();
        self
    }

    /// Set or clear the default seed.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Load settings from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> CliResult<Self> {
        match fs::read_to_string(path) {
            Ok(json) => serde_json::from_str(&json).map_err(|source| CliError::Json {
                path: path.to_path_buf(),
                source,
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no settings file, using defaults");
                Ok(Self::default())
            }
            Err(source) => Err(CliError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Write settings to `path` as pretty JSON.
    pub fn save(&self, path: &Path) -> CliResult<()> {
        let json = serde_json::to_string_pretty(self).map_err(|source| CliError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        fs::write(path, json + "\n").map_err(|source| CliError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// The chat log path, resolved against the settings file location.
    pub fn chat_log_path(&self, settings_path: &Path) -> PathBuf {
        if self.chat_log.is_absolute() {
            return self.chat_log.clone();
        }
        match settings_path.parent() {
            Some(dir) => dir.join(&self.chat_log),
            None => self.chat_log.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let s = Settings::default();
        assert!(s.enable_threat_rolls);
        assert_eq!(s.chat_log, PathBuf::from(DEFAULT_CHAT_LOG));
        assert_eq!(s.seed, None);
    }

    #[test]
    fn builder_methods() {
        let s = Settings::default()
            .with_threat_rolls(false)
            .with_chat_log("log.json")
            .with_seed(Some(7));
        assert!(!s.enable_threat_rolls);
        assert_eq!(s.chat_log, PathBuf::from("log.json"));
        assert_eq!(s.seed, Some(7));
    }

    #[test]
    fn partial_json_fills_defaults() {
        let s: Settings = serde_json::from_str(r#"{"enableThreatRolls": false}"#).unwrap();
        assert!(!s.enable_threat_rolls);
        assert_eq!(s.chat_log, PathBuf::from(DEFAULT_CHAT_LOG));
    }

    #[test]
    fn chat_log_relative_to_settings() {
        let s = Settings::default();
        assert_eq!(
            s.chat_log_path(Path::new("/campaign/hidden-london.json")),
            PathBuf::from("/campaign").join(DEFAULT_CHAT_LOG)
        );
        let s = s.with_chat_log("/var/log/chat.json");
        assert_eq!(
            s.chat_log_path(Path::new("/campaign/hidden-london.json")),
            PathBuf::from("/var/log/chat.json")
        );
    }

    #[test]
    fn missing_file_is_default() {
        let s = Settings::load(Path::new("/nonexistent/hidden-london.json")).unwrap();
        assert_eq!(s, Settings::default());
    }
}
