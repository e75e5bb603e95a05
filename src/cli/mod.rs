// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use crate::config::AppConfig;

/// Full-text search over a directory of HTML documents
#[derive(Parser, Debug)]
#[command(name = "docsearch-node")]
#[command(version)]
#[command(about = "Serve case-insensitive search over HTML documents to allowed networks", long_about = None)]
pub struct Cli {
    /// Configuration file (.json or .toml)
    #[arg(long, short, env = "DOCSEARCH_CONFIG", default_value = "config.json")]
    pub config: PathBuf,

    /// Listening port, overrides the config file
    #[arg(long, short)]
    pub port: Option<u16>,

    /// Corpus directory, overrides the config file
    #[arg(long, short)]
    pub directory: Option<PathBuf>,
}

impl Cli {
    /// Load, override and validate the configuration
    ///
    /// Precedence: command line, then `DOCSEARCH_*` variables, then the file.
    pub fn load_config(&self) -> Result<AppConfig> {
        let mut config = AppConfig::from_file(&self.config)
            .with_context(|| format!("loading {}", self.config.display()))?;
        config.apply_env_overrides()?;

        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(ref directory) = self.directory {
            config.directory = directory.clone();
        }

        config.validate().context("invalid configuration")?;
        info!(
            "{} allowed ranges, corpus at {}",
            config.ip_ranges.len(),
            config.directory.display()
        );
        Ok(config)
    }
}
