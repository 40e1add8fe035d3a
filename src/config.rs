// Configuration module
//
// All settings are environment-sourced. The four RDS_* variables are
// required; everything else falls back to a default.

use std::env;
use std::path::PathBuf;

use canlog_core::db::DbSettings;
use thiserror::Error;

const DEFAULT_HTTP_HOST: &str = "0.0.0.0";
const DEFAULT_HTTP_PORT: u16 = 5000;
const DEFAULT_EXPORT_DIR: &str = "export";
const DEFAULT_LOG_LEVEL: &str = "info";

/// Configuration loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("required environment variable {0} is not set")]
    MissingVar(&'static str),

    #[error("environment variable {0} has invalid value '{1}'")]
    InvalidVar(&'static str, String),
}

/// Main server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub server: ServerSettings,
    pub database: DbSettings,
    pub export: ExportSettings,
    pub logging: LoggingSettings,
}

/// HTTP listener settings
#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

/// Export scratch directory settings
#[derive(Debug, Clone)]
pub struct ExportSettings {
    pub dir: PathBuf,
}

/// Logging settings
#[derive(Debug, Clone)]
pub struct LoggingSettings {
    pub level: String,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// `from_env` goes through here; tests inject a map instead of
    /// mutating process-wide environment state.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let required =
            |key: &'static str| get(key).ok_or(ConfigError::MissingVar(key));

        let database = DbSettings {
            host: required("RDS_HOST")?,
            user: required("RDS_USER")?,
            password: required("RDS_PASSWORD")?,
            database: required("RDS_DB")?,
        };

        let port = match get("CANLOG_HTTP_PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidVar("CANLOG_HTTP_PORT", raw))?,
            None => DEFAULT_HTTP_PORT,
        };

        Ok(Self {
            server: ServerSettings {
                host: get("CANLOG_HTTP_HOST").unwrap_or_else(|| DEFAULT_HTTP_HOST.to_string()),
                port,
            },
            database,
            export: ExportSettings {
                dir: PathBuf::from(
                    get("CANLOG_EXPORT_DIR").unwrap_or_else(|| DEFAULT_EXPORT_DIR.to_string()),
                ),
            },
            logging: LoggingSettings {
                level: get("CANLOG_LOG_LEVEL").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn base_env() -> HashMap<&'static str, &'static str> {
        HashMap::from([
            ("RDS_HOST", "db.internal"),
            ("RDS_USER", "canlog"),
            ("RDS_PASSWORD", "secret"),
            ("RDS_DB", "canlogs"),
        ])
    }

    fn lookup(env: HashMap<&'static str, &'static str>) -> impl Fn(&str) -> Option<String> {
        move |key| env.get(key).map(|v| v.to_string())
    }

    #[test]
    fn defaults_fill_every_optional_setting() {
        let config = ServerConfig::from_lookup(lookup(base_env())).unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.export.dir, PathBuf::from("export"));
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.database.host, "db.internal");
    }

    #[test]
    fn missing_database_variable_is_an_error() {
        let mut env = base_env();
        env.remove("RDS_PASSWORD");
        let err = ServerConfig::from_lookup(lookup(env)).unwrap_err();
        assert!(matches!(err, ConfigError::MissingVar("RDS_PASSWORD")));
    }

    #[test]
    fn overrides_take_effect() {
        let mut env = base_env();
        env.insert("CANLOG_HTTP_HOST", "127.0.0.1");
        env.insert("CANLOG_HTTP_PORT", "8080");
        env.insert("CANLOG_EXPORT_DIR", "/tmp/exports");
        env.insert("CANLOG_LOG_LEVEL", "debug");
        let config = ServerConfig::from_lookup(lookup(env)).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.export.dir, PathBuf::from("/tmp/exports"));
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn unparseable_port_is_an_error() {
        let mut env = base_env();
        env.insert("CANLOG_HTTP_PORT", "not-a-port");
        let err = ServerConfig::from_lookup(lookup(env)).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidVar("CANLOG_HTTP_PORT", _)));
    }
}
