// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Service configuration
//!
//! Loaded once at startup from a JSON or TOML file, optionally overridden
//! from the environment, validated, and then passed by value to the server.

use serde::{Deserialize, Deserializer, Serialize};
use std::env;
use std::io;
use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

use crate::access::{AccessError, AccessGuard};

/// Configuration loading and validation errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid TOML config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    InvalidRange(#[from] AccessError),

    #[error("Port must be between 1 and 65535")]
    InvalidPort,

    #[error("Invalid bind address '{0}'")]
    InvalidBindAddress(String),

    #[error("Corpus directory {} does not exist or is not a directory", .path.display())]
    DirectoryMissing { path: PathBuf },

    #[error("Invalid value '{value}' for {var}")]
    InvalidEnv { var: String, value: String },
}

/// Immutable configuration snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Listening port; JSON configs may give it as a string
    #[serde(default = "default_port", deserialize_with = "deserialize_port")]
    pub port: u16,

    /// Interface to bind
    #[serde(default = "default_bind_address", alias = "bindAddress")]
    pub bind_address: String,

    /// CIDR ranges allowed to use the service
    #[serde(default, alias = "IPRanges", alias = "ipRanges")]
    pub ip_ranges: Vec<String>,

    /// Corpus root
    #[serde(default = "default_directory")]
    pub directory: PathBuf,

    /// Search form served when no query is given
    #[serde(default, alias = "searchPage")]
    pub search_page: Option<PathBuf>,

    /// Stylesheet served at `/style.css`
    #[serde(default)]
    pub stylesheet: Option<PathBuf>,

    /// Apply the allowlist to `/static/` as well as to search
    #[serde(default = "default_protect_static", alias = "protectStatic")]
    pub protect_static: bool,
}

fn default_port() -> u16 {
    8080
}

fn default_bind_address() -> String {
    "0.0.0.0".to_string()
}

fn default_directory() -> PathBuf {
    PathBuf::from("./docs")
}

fn default_protect_static() -> bool {
    true
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PortValue {
    Number(u16),
    Text(String),
}

fn deserialize_port<'de, D>(deserializer: D) -> Result<u16, D::Error>
where
    D: Deserializer<'de>,
{
    match PortValue::deserialize(deserializer)? {
        PortValue::Number(port) => Ok(port),
        PortValue::Text(text) => text.trim().parse().map_err(serde::de::Error::custom),
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            bind_address: default_bind_address(),
            ip_ranges: Vec::new(),
            directory: default_directory(),
            search_page: None,
            stylesheet: None,
            protect_static: default_protect_static(),
        }
    }
}

impl AppConfig {
    /// Load configuration from file; `.toml` files are TOML, anything else JSON
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config = match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Self::from_toml_str(&content)?,
            _ => Self::from_json_str(&content)?,
        };
        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Override fields from `DOCSEARCH_*` environment variables
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides(|key| env::var(key).ok())
    }

    /// Override fields from a variable lookup
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup("DOCSEARCH_PORT") {
            self.port = value.trim().parse().map_err(|_| ConfigError::InvalidEnv {
                var: "DOCSEARCH_PORT".to_string(),
                value: value.clone(),
            })?;
        }
        if let Some(value) = lookup("DOCSEARCH_BIND_ADDRESS") {
            self.bind_address = value;
        }
        if let Some(value) = lookup("DOCSEARCH_DIRECTORY") {
            self.directory = PathBuf::from(value);
        }
        if let Some(value) = lookup("DOCSEARCH_IP_RANGES") {
            self.ip_ranges = value
                .split(',')
                .map(str::trim)
                .filter(|r| !r.is_empty())
                .map(String::from)
                .collect();
        }
        debug!("Configuration after overrides: {:?}", self);
        Ok(())
    }

    /// Check everything that would otherwise fail per request
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.port == 0 {
            return Err(ConfigError::InvalidPort);
        }
        self.socket_addr()?;
        self.access_guard()?;
        if !self.directory.is_dir() {
            return Err(ConfigError::DirectoryMissing {
                path: self.directory.clone(),
            });
        }
        Ok(())
    }

    /// Parsed allowlist; fails on the first malformed range
    pub fn access_guard(&self) -> Result<AccessGuard, ConfigError> {
        Ok(AccessGuard::new(&self.ip_ranges)?)
    }

    /// Address the server listens on
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip: IpAddr = self
            .bind_address
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidBindAddress(self.bind_address.clone()))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}
