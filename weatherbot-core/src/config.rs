use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

/// Default number of geocoding matches requested per lookup.
pub const DEFAULT_MAX_CANDIDATES: u8 = 5;

/// Default number of consecutive "check another city" presses needed to
/// confirm resetting the conversation.
pub const DEFAULT_CONFIRM_CLICKS: u32 = 2;

/// Top-level configuration stored on disk.
///
/// The Open-Meteo base URLs are compile-time constants on purpose; only the
/// dialogue tunables live here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Upper bound on geocoding matches offered for disambiguation.
    #[serde(default = "default_max_candidates")]
    pub max_candidates: u8,

    /// Reset-confirmation threshold for the report step.
    #[serde(default = "default_confirm_clicks")]
    pub confirm_clicks: u32,
}

fn default_max_candidates() -> u8 {
    DEFAULT_MAX_CANDIDATES
}

fn default_confirm_clicks() -> u32 {
    DEFAULT_CONFIRM_CLICKS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_candidates: DEFAULT_MAX_CANDIDATES,
            confirm_clicks: DEFAULT_CONFIRM_CLICKS,
        }
    }
}

impl Config {
    /// Load config from disk, or return the defaults if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file, use defaults.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weatherbot", "weatherbot-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_constants() {
        let cfg = Config::default();
        assert_eq!(cfg.max_candidates, DEFAULT_MAX_CANDIDATES);
        assert_eq!(cfg.confirm_clicks, DEFAULT_CONFIRM_CLICKS);
    }

    #[test]
    fn empty_file_falls_back_to_defaults() {
        let cfg: Config = toml::from_str("").expect("empty config must parse");
        assert_eq!(cfg.max_candidates, DEFAULT_MAX_CANDIDATES);
        assert_eq!(cfg.confirm_clicks, DEFAULT_CONFIRM_CLICKS);
    }

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let cfg: Config = toml::from_str("confirm_clicks = 3").expect("partial config must parse");
        assert_eq!(cfg.confirm_clicks, 3);
        assert_eq!(cfg.max_candidates, DEFAULT_MAX_CANDIDATES);
    }

    #[test]
    fn round_trips_through_toml() {
        let cfg = Config {
            max_candidates: 8,
            confirm_clicks: 1,
        };

        let serialized = toml::to_string_pretty(&cfg).expect("config must serialize");
        let parsed: Config = toml::from_str(&serialized).expect("config must reparse");

        assert_eq!(parsed.max_candidates, 8);
        assert_eq!(parsed.confirm_clicks, 1);
    }
}
