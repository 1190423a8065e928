//! Application configuration loaded from environment variables.

use common::Setting;
use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_ENVIRONMENT: &str = "development";
const DEFAULT_LOG_LEVEL: &str = "info";

/// Errors raised while reading configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {var} value {value:?}: expected a port number")]
    InvalidPort { var: &'static str, value: String },

    #[error("invalid LOG_FORMAT value {0:?}: expected \"text\" or \"json\"")]
    InvalidLogFormat(String),
}

/// Output format of the log subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Server configuration, read once at startup and never mutated.
///
/// Reads from environment variables:
/// - `HOST` — bind address (default: `"0.0.0.0"`)
/// - `PORT` — listen port (default: `8080`)
/// - `ENVIRONMENT` — deployment name (default: `"development"`)
/// - `BEDROCK_MODEL_ARN` — inference model (default: `"not-configured"`)
/// - `DOCUMENTDB_ENDPOINT` — datastore endpoint (default: `"not-configured"`)
/// - `RUST_LOG` — tracing filter directive (default: `"info"`)
/// - `LOG_FORMAT` — `"text"` or `"json"` (default: `"text"`)
/// - `METRICS_PORT` — Prometheus scrape port (default: disabled)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub environment: String,
    pub bedrock_model_arn: Setting,
    pub documentdb_endpoint: Setting,
    pub log_level: String,
    pub log_format: LogFormat,
    pub metrics_port: Option<u16>,
}

impl Config {
    /// Loads configuration from the process environment, falling back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through `lookup`, which maps a variable name to its value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Empty values count as unset.
        let var = |key: &str| lookup(key).filter(|v| !v.is_empty());

        let port = match var("PORT") {
            Some(raw) => parse_port("PORT", raw)?,
            None => DEFAULT_PORT,
        };
        let metrics_port = var("METRICS_PORT")
            .map(|raw| parse_port("METRICS_PORT", raw))
            .transpose()?;
        let log_format = match var("LOG_FORMAT").as_deref() {
            None | Some("text") => LogFormat::Text,
            Some("json") => LogFormat::Json,
            Some(other) => return Err(ConfigError::InvalidLogFormat(other.to_string())),
        };

        Ok(Self {
            host: var("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            environment: var("ENVIRONMENT").unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string()),
            bedrock_model_arn: Setting::from_raw(var("BEDROCK_MODEL_ARN")),
            documentdb_endpoint: Setting::from_raw(var("DOCUMENTDB_ENDPOINT")),
            log_level: var("RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            log_format,
            metrics_port,
        })
    }

    /// Returns the `"host:port"` bind address string.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Returns the Prometheus listener address, if metrics are enabled.
    pub fn metrics_addr(&self) -> Option<String> {
        self.metrics_port.map(|port| format!("{}:{port}", self.host))
    }
}

fn parse_port(var: &'static str, raw: String) -> Result<u16, ConfigError> {
    raw.trim()
        .parse()
        .map_err(|_| ConfigError::InvalidPort { var, value: raw })
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            environment: DEFAULT_ENVIRONMENT.to_string(),
            bedrock_model_arn: Setting::NotConfigured,
            documentdb_endpoint: Setting::NotConfigured,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_format: LogFormat::Text,
            metrics_port: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_default_values() {
        let config = Config::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.environment, "development");
        assert!(!config.bedrock_model_arn.is_configured());
        assert!(!config.documentdb_endpoint.is_configured());
        assert_eq!(config.log_format, LogFormat::Text);
        assert_eq!(config.metrics_port, None);
    }

    #[test]
    fn test_empty_environment_matches_defaults() {
        assert_eq!(load(&[]).unwrap(), Config::default());
    }

    #[test]
    fn test_reads_all_variables() {
        let config = load(&[
            ("PORT", "9000"),
            ("ENVIRONMENT", "production"),
            ("BEDROCK_MODEL_ARN", "arn:test"),
            ("DOCUMENTDB_ENDPOINT", "mongodb://x"),
            ("LOG_FORMAT", "json"),
            ("METRICS_PORT", "9100"),
        ])
        .unwrap();

        assert_eq!(config.port, 9000);
        assert_eq!(config.environment, "production");
        assert_eq!(config.bedrock_model_arn.as_str(), "arn:test");
        assert_eq!(config.documentdb_endpoint.as_str(), "mongodb://x");
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.metrics_addr().as_deref(), Some("0.0.0.0:9100"));
    }

    #[test]
    fn test_empty_values_fall_back() {
        let config = load(&[("ENVIRONMENT", ""), ("PORT", "")]).unwrap();
        assert_eq!(config.environment, "development");
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let err = load(&[("PORT", "eighty")]).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidPort {
                var: "PORT",
                value: "eighty".to_string()
            }
        );
    }

    #[test]
    fn test_invalid_log_format_is_rejected() {
        let err = load(&[("LOG_FORMAT", "xml")]).unwrap_err();
        assert_eq!(err, ConfigError::InvalidLogFormat("xml".to_string()));
    }

    #[test]
    fn test_addr_formatting() {
        let config = Config {
            host: "127.0.0.1".to_string(),
            ..Config::default()
        };
        assert_eq!(config.addr(), "127.0.0.1:8080");
    }
}
