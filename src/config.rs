//! Configuration using TOML files.
//!
//! The Gracenote options live in a `[gracenote]` table:
//!
//! ```toml
//! [gracenote]
//! client_id = "12345678-0123456789ABCDEF0123456789ABCDEF"
//! source_weight = 0.5
//! ```
//!
//! Config is stored in the OS-standard config directory:
//! - Windows: %APPDATA%\gracenote-autotag\config.toml
//! - macOS: ~/Library/Application Support/gracenote-autotag/config.toml
//! - Linux: ~/.config/gracenote-autotag/config.toml
//!
//! `client_id` is a credential. It is wrapped in [`Secret`] so it never shows
//! up in `Debug` output, and [`Config::to_redacted_toml`] masks it when the
//! config is dumped.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Keys whose values are masked in dumps
pub const SENSITIVE_KEYS: &[&str] = &["client_id"];

/// Replacement text for masked values
pub const REDACTED: &str = "REDACTED";

/// Top-level configuration file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub gracenote: GracenoteConfig,
}

/// Options of the Gracenote metadata source
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GracenoteConfig {
    /// Gracenote client id. Empty disables the source.
    pub client_id: Secret,

    /// Distance penalty applied to every Gracenote match
    pub source_weight: f64,
}

impl Default for GracenoteConfig {
    fn default() -> Self {
        Self {
            client_id: Secret::default(),
            source_weight: 0.5,
        }
    }
}

/// A string that is kept out of logs.
///
/// Serializes as the real value (so configs can be saved); use
/// [`Config::to_redacted_toml`] for anything shown to a user.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Secret(String);

impl Secret {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The actual value. Don't log it.
    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            f.write_str("Secret(\"\")")
        } else {
            write!(f, "Secret({})", REDACTED)
        }
    }
}

impl From<&str> for Secret {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Secret {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Config {
    /// Serialize to TOML with every [`SENSITIVE_KEYS`] value masked.
    pub fn to_redacted_toml(&self) -> Result<String, ConfigError> {
        let mut value = toml::Value::try_from(self).map_err(ConfigError::Serialize)?;
        redact(&mut value);
        toml::to_string_pretty(&value).map_err(ConfigError::Serialize)
    }
}

fn redact(value: &mut toml::Value) {
    let Some(table) = value.as_table_mut() else {
        return;
    };
    for (key, entry) in table.iter_mut() {
        if SENSITIVE_KEYS.contains(&key.as_str()) {
            if entry.as_str().is_some_and(|s| !s.is_empty()) {
                *entry = toml::Value::String(REDACTED.to_string());
            }
        } else {
            redact(entry);
        }
    }
}

// ============================================================================
// Config File Operations
// ============================================================================

/// Get the config directory path
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("gracenote-autotag"))
}

/// Get the full path to the config file
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load configuration from the default location.
///
/// Returns default config if file doesn't exist or can't be parsed.
/// Logs warnings but doesn't fail - we always return a usable config.
pub fn load() -> Config {
    let Some(path) = config_path() else {
        tracing::warn!("Could not determine config directory, using defaults");
        return Config::default();
    };

    if !path.exists() {
        tracing::info!("No config file found at {:?}, using defaults", path);
        return Config::default();
    }

    match load_from(&path) {
        Ok(config) => {
            tracing::info!("Loaded config from {:?}", path);
            config
        }
        Err(e) => {
            tracing::error!("{}", e);
            tracing::warn!("Using default configuration");
            Config::default()
        }
    }
}

/// Load configuration from a specific file.
pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
    let contents =
        std::fs::read_to_string(path).map_err(|e| ConfigError::Read(path.to_path_buf(), e))?;
    toml::from_str(&contents).map_err(|e| ConfigError::Parse(path.to_path_buf(), e))
}

// ============================================================================
// Error Types
// ============================================================================

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {0}: {1}")]
    Read(PathBuf, std::io::Error),

    #[error("Failed to parse config file {0}: {1}")]
    Parse(PathBuf, toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(toml::ser::Error),
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const CLIENT_ID: &str = "12345678-0123456789ABCDEF0123456789ABCDEF";

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.gracenote.client_id.is_empty());
        assert_eq!(config.gracenote.source_weight, 0.5);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let toml = format!("[gracenote]\nclient_id = \"{}\"\n", CLIENT_ID);
        let config: Config = toml::from_str(&toml).unwrap();

        assert_eq!(config.gracenote.client_id.expose(), CLIENT_ID);
        assert_eq!(config.gracenote.source_weight, 0.5);
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.gracenote.client_id.is_empty());
    }

    #[test]
    fn test_debug_never_shows_client_id() {
        let config = GracenoteConfig {
            client_id: Secret::new(CLIENT_ID),
            source_weight: 1.0,
        };

        let debug = format!("{:?}", config);

        assert!(!debug.contains(CLIENT_ID));
        assert!(!debug.contains("12345678"));
        assert!(debug.contains(REDACTED));
    }

    #[test]
    fn test_redacted_dump() {
        let config = Config {
            gracenote: GracenoteConfig {
                client_id: Secret::new(CLIENT_ID),
                source_weight: 0.75,
            },
        };

        let dump = config.to_redacted_toml().unwrap();

        assert!(!dump.contains(CLIENT_ID));
        assert!(dump.contains(REDACTED));
        assert!(dump.contains("source_weight = 0.75"));
    }

    #[test]
    fn test_redacted_dump_leaves_empty_secret() {
        let dump = Config::default().to_redacted_toml().unwrap();
        assert!(!dump.contains(REDACTED));
    }

    #[test]
    fn test_secret_roundtrips_unredacted() {
        let config = Config {
            gracenote: GracenoteConfig {
                client_id: Secret::from(CLIENT_ID),
                ..Default::default()
            },
        };

        let toml = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&toml).unwrap();

        assert_eq!(parsed.gracenote.client_id, config.gracenote.client_id);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            format!("[gracenote]\nclient_id = \"{}\"\nsource_weight = 2.0\n", CLIENT_ID),
        )
        .unwrap();

        let config = load_from(&path).unwrap();

        assert_eq!(config.gracenote.client_id.expose(), CLIENT_ID);
        assert_eq!(config.gracenote.source_weight, 2.0);
    }

    #[test]
    fn test_load_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_from(&dir.path().join("nope.toml"));
        assert!(matches!(result, Err(ConfigError::Read(_, _))));
    }

    #[test]
    fn test_load_from_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[gracenote]\nsource_weight = \"heavy\"\n").unwrap();

        let result = load_from(&path);

        assert!(matches!(result, Err(ConfigError::Parse(_, _))));
    }
}
