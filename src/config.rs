//! Server configuration
//!
//! Values come from built-in defaults, then an optional TOML file named by
//! `AZIMUTH_CALC_CONFIG`, then the `HOST` and `PORT` environment variables.
//!
//! ```toml
//! host = "127.0.0.1"
//! port = 8080
//! body_limit_mb = 20
//! max_batch_rows = 50000
//! ellipsoid = "wgs84"
//! ```

use std::env;
use std::fs;
use std::net::SocketAddr;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::geodesy::Ellipsoid;

/// Environment variable naming the TOML configuration file
pub const CONFIG_PATH_ENV: &str = "AZIMUTH_CALC_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Maximum request body size in megabytes
    pub body_limit_mb: usize,
    /// Maximum number of rows accepted in one batch
    pub max_batch_rows: usize,
    pub ellipsoid: Ellipsoid,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            body_limit_mb: 100,
            max_batch_rows: 100_000,
            ellipsoid: Ellipsoid::Wgs84,
        }
    }
}

impl ServerConfig {
    /// Parses configuration from TOML text; missing keys keep their defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))
    }

    /// Loads configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            Error::Config(format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        Self::from_toml_str(&content)
    }

    /// Loads defaults, the optional config file and environment overrides
    pub fn load() -> Result<Self> {
        let config = match env::var(CONFIG_PATH_ENV) {
            Ok(path) => Self::from_file(path)?,
            Err(_) => Self::default(),
        };

        config.with_overrides(env::var("HOST").ok(), env::var("PORT").ok())
    }

    /// Applies host/port overrides given as raw text
    pub fn with_overrides(mut self, host: Option<String>, port: Option<String>) -> Result<Self> {
        if let Some(host) = host {
            self.host = host;
        }

        if let Some(port) = port {
            self.port = port
                .trim()
                .parse()
                .map_err(|_| Error::Config(format!("Invalid port: {}", port)))?;
        }

        Ok(self)
    }

    /// Socket address to bind
    pub fn bind_address(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| Error::Config(format!("Invalid bind address {}:{}", self.host, self.port)))
    }

    /// Maximum request body size in bytes
    pub fn body_limit_bytes(&self) -> usize {
        self.body_limit_mb.saturating_mul(1024 * 1024)
    }
}
