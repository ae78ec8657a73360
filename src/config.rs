//! Configuration system using TOML files.
//!
//! Config is stored in the OS-standard config directory:
//! - Windows: %APPDATA%\brainzcloud\config.toml
//! - macOS: ~/Library/Application Support/brainzcloud/config.toml
//! - Linux: ~/.config/brainzcloud/config.toml
//!
//! The config file is human-readable and editable. Credentials are written
//! by the `login` command; the `[cloud]` section holds the layout defaults
//! handed to the external word-cloud renderer.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// ListenBrainz account credentials
    pub credentials: Credentials,

    /// Word-cloud defaults
    pub cloud: CloudConfig,
}

/// ListenBrainz account credentials
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Credentials {
    /// Account name, filled in by `login` from the validate-token response
    pub username: Option<String>,

    /// ListenBrainz user token
    pub token: Option<String>,
}

/// Word-cloud generation defaults.
///
/// The layout fields are passed through to the renderer input document
/// unchanged; only `max_listens` and `tag_limit` affect aggregation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CloudConfig {
    /// How many recent listens to aggregate
    pub max_listens: u32,

    /// How many ranked tags to keep
    pub tag_limit: usize,

    /// Canvas width in pixels
    pub width: u32,

    /// Canvas height in pixels
    pub height: u32,

    /// Canvas background color (CSS color string)
    pub background_color: String,

    /// Word color (CSS color string)
    pub color: String,

    /// Minimum word size
    pub min_size: u32,

    /// Maximum word size
    pub max_size: u32,

    /// Layout grid granularity
    pub grid_size: u32,
}

impl Default for CloudConfig {
    fn default() -> Self {
        Self {
            max_listens: 1000,
            tag_limit: 500,
            width: 500,
            height: 500,
            background_color: "rgba(0,0,0,0)".to_string(),
            color: "#666".to_string(),
            min_size: 1,
            max_size: 100,
            grid_size: 4,
        }
    }
}

// ============================================================================
// Config File Operations
// ============================================================================

/// Get the config directory path
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("brainzcloud"))
}

/// Get the full path to the config file
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load configuration from disk
///
/// Returns default config if file doesn't exist or can't be parsed.
/// Logs warnings but doesn't fail - we always return a usable config.
pub fn load() -> Config {
    let Some(path) = config_path() else {
        tracing::warn!("Could not determine config directory, using defaults");
        return Config::default();
    };

    if !path.exists() {
        tracing::debug!("No config file found at {:?}, using defaults", path);
        return Config::default();
    }

    match std::fs::read_to_string(&path) {
        Ok(contents) => match toml::from_str(&contents) {
            Ok(config) => {
                tracing::debug!("Loaded config from {:?}", path);
                config
            }
            Err(e) => {
                tracing::error!("Failed to parse config file {:?}: {}", path, e);
                tracing::warn!("Using default configuration");
                Config::default()
            }
        },
        Err(e) => {
            tracing::error!("Failed to read config file {:?}: {}", path, e);
            Config::default()
        }
    }
}

/// Save configuration to disk
///
/// Creates the config directory if it doesn't exist.
pub fn save(config: &Config) -> Result<(), ConfigError> {
    let dir = config_dir().ok_or(ConfigError::NoConfigDir)?;
    let path = dir.join("config.toml");

    // Ensure directory exists
    std::fs::create_dir_all(&dir).map_err(|e| ConfigError::CreateDir(dir.clone(), e))?;

    // Serialize to pretty TOML
    let contents = toml::to_string_pretty(config).map_err(ConfigError::Serialize)?;

    // Write atomically (write to temp, then rename)
    let temp_path = path.with_extension("toml.tmp");
    std::fs::write(&temp_path, &contents).map_err(|e| ConfigError::Write(temp_path.clone(), e))?;
    std::fs::rename(&temp_path, &path)
        .map_err(|e| ConfigError::Rename(temp_path, path.clone(), e))?;

    tracing::info!("Saved config to {:?}", path);
    Ok(())
}

// ============================================================================
// Error Types
// ============================================================================

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to create config directory {0}: {1}")]
    CreateDir(PathBuf, std::io::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(toml::ser::Error),

    #[error("Failed to write config to {0}: {1}")]
    Write(PathBuf, std::io::Error),

    #[error("Failed to rename temp file {0} to {1}: {2}")]
    Rename(PathBuf, PathBuf, std::io::Error),
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_serializes() {
        let config = Config::default();
        let toml = toml::to_string_pretty(&config).unwrap();
        assert!(toml.contains("[credentials]"));
        assert!(toml.contains("[cloud]"));
    }

    #[test]
    fn test_config_roundtrip() {
        let mut config = Config::default();
        config.credentials.username = Some("listener".to_string());
        config.credentials.token = Some("test-token-123".to_string());
        config.cloud.tag_limit = 50;
        config.cloud.color = "#ba0000".to_string();

        let toml = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&toml).unwrap();

        assert_eq!(parsed.credentials.username, Some("listener".to_string()));
        assert_eq!(parsed.credentials.token, Some("test-token-123".to_string()));
        assert_eq!(parsed.cloud.tag_limit, 50);
        assert_eq!(parsed.cloud.color, "#ba0000");
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        // Config with only some fields
        let toml = r#"
[credentials]
token = "my-token"
"#;
        let config: Config = toml::from_str(toml).unwrap();

        // Specified field is set
        assert_eq!(config.credentials.token, Some("my-token".to_string()));
        assert!(config.credentials.username.is_none());

        // Other fields use defaults
        assert_eq!(config.cloud.max_listens, 1000);
        assert_eq!(config.cloud.tag_limit, 500);
        assert_eq!(config.cloud.background_color, "rgba(0,0,0,0)");
        assert_eq!(config.cloud.grid_size, 4);
    }
}
