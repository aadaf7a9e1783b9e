//! Application configuration
//!
//! Combines CLI verbosity with the helper settings loaded from a file or
//! the environment.

use crate::config::HelpersConfig;
use anyhow::{Context, Result};
use std::path::Path;

/// Application configuration structure
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Verbosity level for logging
    pub verbose: u8,
    /// Settings passed down to the helpers
    pub helpers: HelpersConfig,
}

impl AppConfig {
    /// Build the configuration from an optional config file, falling back to
    /// `EVERYBOT_*` environment variables.
    pub fn new(verbose: u8, config_path: Option<&Path>) -> Result<Self> {
        let helpers = match config_path {
            Some(path) => HelpersConfig::load(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?,
            None => HelpersConfig::from_env().context("Invalid EVERYBOT_* environment")?,
        };

        Ok(Self { verbose, helpers })
    }

    /// Get the log level string based on verbosity
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "info",
            1 => "debug",
            2 => "trace",
            _ => "trace,hyper=debug,reqwest=debug",
        }
    }
}
