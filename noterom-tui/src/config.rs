use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

const APP_DIR: &str = "noterom";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoteromConfig {
    /// Where the class list is stored. Defaults to `<data dir>/noterom/classes.json`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,
    /// Live clock refresh interval in milliseconds.
    #[serde(default = "default_clock_tick_ms")]
    pub clock_tick_ms: u64,
    /// How often the active class is re-evaluated, in seconds.
    #[serde(default = "default_active_refresh_secs")]
    pub active_refresh_secs: u64,
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_filter: Option<String>,
}

fn default_clock_tick_ms() -> u64 {
    1000
}

fn default_active_refresh_secs() -> u64 {
    30
}

impl Default for NoteromConfig {
    fn default() -> Self {
        Self {
            data_file: None,
            clock_tick_ms: default_clock_tick_ms(),
            active_refresh_secs: default_active_refresh_secs(),
            log_filter: None,
        }
    }
}

impl NoteromConfig {
    pub fn config_path() -> Result<PathBuf> {
        Ok(dirs::config_dir()
            .context("Cannot determine config directory")?
            .join(APP_DIR)
            .join("config.toml"))
    }

    pub fn data_dir() -> Result<PathBuf> {
        Ok(dirs::data_dir()
            .context("Cannot determine data directory")?
            .join(APP_DIR))
    }

    pub fn log_path() -> Result<PathBuf> {
        Ok(Self::data_dir()?.join("noterom.log"))
    }

    /// Load config from disk. Returns default config if file doesn't exist.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        Self::parse(&raw).with_context(|| format!("Failed to parse config at {}", path.display()))
    }

    pub fn parse(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let raw = toml::to_string_pretty(self)?;
        std::fs::write(&path, raw)?;
        Ok(())
    }

    /// The storage file, preferring an explicit override.
    pub fn resolve_data_file(&self, cli_override: Option<PathBuf>) -> Result<PathBuf> {
        if let Some(path) = cli_override.or_else(|| self.data_file.clone()) {
            return Ok(path);
        }
        Ok(Self::data_dir()?.join("classes.json"))
    }

    pub fn clock_tick(&self) -> Duration {
        Duration::from_millis(self.clock_tick_ms.max(100))
    }

    pub fn active_refresh(&self) -> Duration {
        Duration::from_secs(self.active_refresh_secs.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        assert_eq!(NoteromConfig::parse("").unwrap(), NoteromConfig::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let cfg = NoteromConfig::parse("active_refresh_secs = 5\n").unwrap();
        assert_eq!(cfg.active_refresh(), Duration::from_secs(5));
        assert_eq!(cfg.clock_tick(), Duration::from_secs(1));
        assert_eq!(cfg.data_file, None);
    }

    #[test]
    fn cli_override_beats_config_file() {
        let cfg = NoteromConfig {
            data_file: Some(PathBuf::from("/tmp/from-config.json")),
            ..NoteromConfig::default()
        };
        assert_eq!(
            cfg.resolve_data_file(Some(PathBuf::from("/tmp/cli.json")))
                .unwrap(),
            PathBuf::from("/tmp/cli.json")
        );
        assert_eq!(
            cfg.resolve_data_file(None).unwrap(),
            PathBuf::from("/tmp/from-config.json")
        );
    }

    #[test]
    fn zero_intervals_are_clamped() {
        let cfg = NoteromConfig::parse("clock_tick_ms = 0\nactive_refresh_secs = 0\n").unwrap();
        assert_eq!(cfg.clock_tick(), Duration::from_millis(100));
        assert_eq!(cfg.active_refresh(), Duration::from_secs(1));
    }

    #[test]
    fn unknown_types_fail_to_parse() {
        assert!(NoteromConfig::parse("clock_tick_ms = \"fast\"").is_err());
    }
}
