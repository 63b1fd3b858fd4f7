use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::application::SortMode;
use crate::constants::{LOAD_DELAY_MS, SAVE_DELAY_MS, UPDATE_DELAY_MS};
use crate::domain::{NotificationSettings, Profile};
use crate::infrastructure::latency::SimulatedLatency;
use crate::infrastructure::markdown::RenderMode;

/// TOML configuration for noteview
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub defaults: Defaults,
    #[serde(default)]
    pub latency: LatencyConfig,
    #[serde(default)]
    pub profile: ProfileConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Defaults {
    #[serde(default)]
    pub sort: SortMode,
    #[serde(default)]
    pub render_mode: RenderMode,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct LatencyConfig {
    #[serde(default = "default_save_ms")]
    pub save_ms: u64,
    #[serde(default = "default_update_ms")]
    pub update_ms: u64,
    #[serde(default = "default_load_ms")]
    pub load_ms: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct ProfileConfig {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_email")]
    pub email: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct ServerConfig {
    #[serde(default = "default_origin")]
    pub origin: String,
}

// Default value functions
fn default_save_ms() -> u64 { SAVE_DELAY_MS }
fn default_update_ms() -> u64 { UPDATE_DELAY_MS }
fn default_load_ms() -> u64 { LOAD_DELAY_MS }
fn default_name() -> String { "John Doe".to_string() }
fn default_email() -> String { "john@example.com".to_string() }
fn default_origin() -> String { "http://localhost:3000".to_string() }

impl Default for Defaults {
    fn default() -> Self {
        Self {
            sort: SortMode::default(),
            render_mode: RenderMode::default(),
        }
    }
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            save_ms: default_save_ms(),
            update_ms: default_update_ms(),
            load_ms: default_load_ms(),
        }
    }
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            email: default_email(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            origin: default_origin(),
        }
    }
}

impl LatencyConfig {
    /// No waiting at all, for tests and scripted runs
    pub fn instant() -> Self {
        Self {
            save_ms: 0,
            update_ms: 0,
            load_ms: 0,
        }
    }

    pub fn save(&self) -> SimulatedLatency {
        SimulatedLatency::from_millis(self.save_ms)
    }

    pub fn update(&self) -> SimulatedLatency {
        SimulatedLatency::from_millis(self.update_ms)
    }

    pub fn load(&self) -> SimulatedLatency {
        SimulatedLatency::from_millis(self.load_ms)
    }
}

impl ProfileConfig {
    pub fn to_profile(&self) -> Profile {
        Profile {
            name: self.name.clone(),
            email: self.email.clone(),
            notifications: NotificationSettings::default(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .context("Failed to read config file")?;

        let config: Config = toml::from_str(&content)
            .context("Failed to parse TOML config")?;

        Ok(config)
    }

    /// Load configuration, falling back to defaults when the file does not exist
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            debug!(?path, "No config file, using defaults");
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Save configuration to TOML file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let toml_string = toml::to_string_pretty(self)
            .context("Failed to serialize config to TOML")?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory {}", parent.display())
            })?;
        }
        std::fs::write(path, toml_string)
            .context("Failed to write config file")?;

        Ok(())
    }

    /// Create default configuration file at path
    pub fn create_default(path: impl AsRef<Path>) -> Result<Self> {
        let config = Self::default();
        config.save(path)?;
        Ok(config)
    }
}

/// `<config dir>/noteview/config.toml`
pub fn default_config_path() -> Result<PathBuf> {
    let config_dir = dirs::config_dir().context("Could not find config directory")?;
    Ok(config_dir.join("noteview").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn given_no_file_when_creating_default_then_creates_with_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("noteview.toml");

        let config = Config::create_default(&config_path).unwrap();

        assert_eq!(config.defaults.sort, SortMode::UpdatedDesc);
        assert_eq!(config.latency.save_ms, 1000);
        assert_eq!(config.server.origin, "http://localhost:3000");
        assert!(config_path.exists());
    }

    #[test]
    fn given_missing_parent_directory_when_creating_default_then_creates_it() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("noteview").join("nested").join("config.toml");

        Config::create_default(&config_path).unwrap();

        assert!(config_path.exists());
        assert_eq!(Config::load(&config_path).unwrap(), Config::default());
    }

    #[test]
    fn given_config_when_saving_then_writes_toml_sections() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("test.toml");

        Config::default().save(&config_path).unwrap();

        let content = fs::read_to_string(&config_path).unwrap();
        assert!(content.contains("[defaults]"));
        assert!(content.contains("sort = \"updated-desc\""));
        assert!(content.contains("[latency]"));
        assert!(content.contains("[profile]"));
        assert!(content.contains("[server]"));
    }

    #[test]
    fn given_toml_file_when_loading_then_reads_values() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("load_test.toml");

        let toml_content = r#"
[defaults]
sort = "title-asc"
render_mode = "commonmark"

[latency]
save_ms = 5
update_ms = 6
load_ms = 7

[profile]
name = "Jane Roe"
email = "jane@example.com"

[server]
origin = "https://notes.example.com"
"#;
        fs::write(&config_path, toml_content).unwrap();

        let config = Config::load(&config_path).unwrap();

        assert_eq!(config.defaults.sort, SortMode::TitleAsc);
        assert_eq!(config.defaults.render_mode, RenderMode::CommonMark);
        assert_eq!(config.latency.load().duration().as_millis(), 7);
        assert_eq!(config.profile.to_profile().name, "Jane Roe");
        assert_eq!(config.server.origin, "https://notes.example.com");
    }

    #[test]
    fn given_partial_toml_when_loading_then_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("partial.toml");
        fs::write(&config_path, "[latency]\nsave_ms = 0\n").unwrap();

        let config = Config::load(&config_path).unwrap();

        assert_eq!(config.latency.save_ms, 0);
        assert_eq!(config.latency.update_ms, 1000);
        assert_eq!(config.defaults.render_mode, RenderMode::Compat);
        assert_eq!(config.profile.email, "john@example.com");
    }

    #[test]
    fn given_unknown_sort_mode_when_loading_then_returns_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("bad.toml");
        fs::write(&config_path, "[defaults]\nsort = \"newest\"\n").unwrap();

        assert!(Config::load(&config_path).is_err());
    }

    #[test]
    fn given_missing_file_when_loading_or_defaulting_then_returns_defaults() {
        let config = Config::load_or_default("/nonexistent/path/config.toml").unwrap();

        assert_eq!(config, Config::default());
        assert!(Config::load("/nonexistent/path/config.toml").is_err());
    }
}
