//! Client Configuration
//!
//! Explicit configuration for the verse client: connection parameters plus
//! log level, injected at construction rather than read from ambient
//! process state.
//!
//! # Sources
//! - A JSON config file (`ClientConfig::load`), by convention at
//!   `~/.config/scriptura/config.json`
//! - Environment variables (`ClientConfig::from_env`): `DB_HOST`,
//!   `DB_PORT`, `DB_USER`, `DB_PASSWORD`, `DB_NAME`, `LOG_LEVEL`
//! - Built-in defaults (local MariaDB, database `bible`)
//!
//! Passwords may be kept out of config files via `password_env`, which
//! names an environment variable to read at resolution time.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::Level;

use crate::error::{Result, ScripturaError};
use crate::store::StoreConfig;

/// Full client configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Database connection parameters
    #[serde(flatten)]
    pub store: StoreConfig,

    /// Environment variable name for the password (if not stored directly)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password_env: Option<String>,

    /// Log level name: TRACE, DEBUG, INFO, WARNING or ERROR
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
}

impl ClientConfig {
    /// Load configuration from a JSON file
    ///
    /// A missing file is not an error: defaults apply. A file that exists
    /// but cannot be read or parsed is `InvalidConfig`.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path).map_err(|e| {
            ScripturaError::invalid_config(format!("Could not read config file: {e}"))
        })?;

        serde_json::from_str(&contents).map_err(|e| {
            ScripturaError::invalid_config(format!("Invalid config file format: {e}"))
        })
    }

    /// Build configuration from environment variables
    ///
    /// Reads `DB_HOST`, `DB_PORT`, `DB_USER`, `DB_PASSWORD`, `DB_NAME` and
    /// `LOG_LEVEL`; unset variables fall back to the defaults.
    pub fn from_env() -> Result<Self> {
        let defaults = StoreConfig::default();

        let port = match std::env::var("DB_PORT") {
            Ok(raw) => raw.parse().map_err(|_| {
                ScripturaError::invalid_config(format!("DB_PORT is not a valid port number: {raw}"))
            })?,
            Err(_) => defaults.port,
        };

        Ok(Self {
            store: StoreConfig {
                host: std::env::var("DB_HOST").unwrap_or(defaults.host),
                port,
                user: std::env::var("DB_USER").unwrap_or(defaults.user),
                password: std::env::var("DB_PASSWORD").unwrap_or(defaults.password),
                database: std::env::var("DB_NAME").unwrap_or(defaults.database),
            },
            password_env: None,
            log_level: std::env::var("LOG_LEVEL").ok(),
        })
    }

    /// Resolve indirections and return the final `StoreConfig`
    ///
    /// If `password_env` is set, the named environment variable supplies
    /// the password and must exist.
    pub fn resolve(&self) -> Result<StoreConfig> {
        let mut store = self.store.clone();

        if let Some(env_var) = &self.password_env {
            match std::env::var(env_var) {
                Ok(password) => store.password = password,
                Err(_) => {
                    return Err(ScripturaError::invalid_config(format!(
                        "Environment variable {env_var} not found for password"
                    )));
                }
            }
        }

        Ok(store)
    }

    /// Parse the configured log level, defaulting to WARNING
    pub fn log_level(&self) -> Result<Level> {
        parse_log_level(self.log_level.as_deref().unwrap_or("WARNING"))
    }
}

/// Parse a log level name into a tracing `Level`
///
/// Level names are matched case-insensitively; "WARNING" is accepted
/// alongside "WARN".
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_uppercase().as_str() {
        "TRACE" => Ok(Level::TRACE),
        "DEBUG" => Ok(Level::DEBUG),
        "INFO" => Ok(Level::INFO),
        "WARN" | "WARNING" => Ok(Level::WARN),
        "ERROR" => Ok(Level::ERROR),
        other => Err(ScripturaError::invalid_config(format!("Invalid log level '{other}'"))),
    }
}

/// Get the default config file path (`~/.config/scriptura/config.json`)
pub fn default_config_path() -> Result<PathBuf> {
    let config_dir = dirs::config_dir().ok_or_else(|| {
        ScripturaError::invalid_config("Could not determine user config directory")
    })?;

    Ok(config_dir.join("scriptura").join("config.json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_config_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(name);
        fs::write(&path, contents).expect("Failed to write temp config");
        path
    }

    #[test]
    fn test_load_missing_file_yields_defaults() {
        let path = std::env::temp_dir().join("scriptura_config_does_not_exist.json");
        let config = ClientConfig::load(&path).unwrap();
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn test_load_config_file() {
        let path = temp_config_file(
            "scriptura_test_load.json",
            r#"{"host": "db.example.com", "port": 3307, "log_level": "DEBUG"}"#,
        );

        let config = ClientConfig::load(&path).unwrap();
        assert_eq!(config.store.host, "db.example.com");
        assert_eq!(config.store.port, 3307);
        assert_eq!(config.store.database, "bible");
        assert_eq!(config.log_level.as_deref(), Some("DEBUG"));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_malformed_config_file() {
        let path = temp_config_file("scriptura_test_malformed.json", "{not json");

        let result = ClientConfig::load(&path);
        assert!(matches!(result, Err(ScripturaError::InvalidConfig(_))));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_resolve_password_env() {
        std::env::set_var("SCRIPTURA_TEST_DB_PASSWORD", "hunter2");

        let config = ClientConfig {
            password_env: Some("SCRIPTURA_TEST_DB_PASSWORD".to_string()),
            ..ClientConfig::default()
        };

        let store = config.resolve().unwrap();
        assert_eq!(store.password, "hunter2");

        std::env::remove_var("SCRIPTURA_TEST_DB_PASSWORD");
    }

    #[test]
    fn test_resolve_password_env_missing() {
        let config = ClientConfig {
            password_env: Some("SCRIPTURA_TEST_UNSET_VARIABLE".to_string()),
            ..ClientConfig::default()
        };

        let result = config.resolve();
        assert!(matches!(result, Err(ScripturaError::InvalidConfig(_))));
    }

    #[test]
    fn test_resolve_without_indirection_keeps_password() {
        let config = ClientConfig {
            store: StoreConfig { password: "direct".to_string(), ..StoreConfig::default() },
            ..ClientConfig::default()
        };

        let store = config.resolve().unwrap();
        assert_eq!(store.password, "direct");
    }

    #[test]
    fn test_parse_log_level() {
        assert_eq!(parse_log_level("DEBUG").unwrap(), Level::DEBUG);
        assert_eq!(parse_log_level("debug").unwrap(), Level::DEBUG);
        assert_eq!(parse_log_level("WARNING").unwrap(), Level::WARN);
        assert_eq!(parse_log_level("warn").unwrap(), Level::WARN);
        assert_eq!(parse_log_level("Info").unwrap(), Level::INFO);

        let result = parse_log_level("LOUD");
        assert!(matches!(result, Err(ScripturaError::InvalidConfig(_))));
    }

    #[test]
    fn test_default_log_level_is_warning() {
        let config = ClientConfig::default();
        assert_eq!(config.log_level().unwrap(), Level::WARN);
    }
}
