//! Configuration module for the chat relay.

use serde::Deserialize;
use std::net::SocketAddr;
use std::path::Path;

use crate::{RelayError, Result};

/// Environment variable overriding `server.host`.
pub const ENV_HOST: &str = "CHATRELAY_HOST";

/// Environment variable overriding `server.port`.
pub const ENV_PORT: &str = "CHATRELAY_PORT";

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host address to bind.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port number to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
    /// CORS allowed origins. Empty allows any origin.
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    4000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: vec![],
        }
    }
}

impl ServerConfig {
    /// Resolve host and port into a socket address.
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| RelayError::Config(format!("invalid server address: {e}")))
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Path to the log file. Console only when unset.
    #[serde(default)]
    pub file: Option<String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(RelayError::Io)?;
        Self::parse(&content)
    }

    /// Load configuration from a TOML file and apply environment variable overrides.
    pub fn load_with_env<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| RelayError::Validation(format!("config parse error: {e}")))
    }

    /// Apply environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `CHATRELAY_HOST`: Override the bind host
    /// - `CHATRELAY_PORT`: Override the listen port
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(host) = std::env::var(ENV_HOST) {
            if !host.is_empty() {
                self.server.host = host;
            }
        }
        if let Ok(port) = std::env::var(ENV_PORT) {
            if !port.is_empty() {
                self.server.port = port.parse().map_err(|e| {
                    RelayError::Validation(format!("{ENV_PORT} is not a valid port: {e}"))
                })?;
            }
        }
        Ok(())
    }

    /// Validate the configuration.
    ///
    /// Returns an error if host and port do not form a socket address.
    pub fn validate(&self) -> Result<()> {
        self.server.socket_addr().map(|_| ())
    }
}
