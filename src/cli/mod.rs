//! CLI argument parsing types.
//!
//! This module provides the command-line interface structure for the
//! `external` binary.

use std::time::Duration;

use clap::{Parser, Subcommand};

use crate::config::{Config, API_URL_VAR, DEFAULT_TIMEOUT, TIMEOUT_MS_VAR};
use crate::error::{FetchError, Result};

/// External record fetch command-line interface.
#[derive(Parser, Debug)]
#[command(name = "external", about = "Fetch records from an external endpoint", version)]
pub struct Cli {
    /// Output results as JSON instead of a formatted record.
    #[arg(long, global = true, default_value = "false")]
    pub json: bool,

    /// Base URL of the endpoint.
    #[arg(long, global = true, env = API_URL_VAR)]
    pub base_url: Option<String>,

    /// Per-call timeout in milliseconds.
    #[arg(long, global = true, env = TIMEOUT_MS_VAR)]
    pub timeout_ms: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fetch a single record by identifier.
    Get {
        /// The record identifier. Sent as-is, so an empty string is allowed.
        id: String,
    },
}

impl Cli {
    /// Resolve the fetcher configuration from flags and environment.
    ///
    /// # Errors
    ///
    /// Returns an error if no base URL was given or the timeout is zero.
    pub fn config(&self) -> Result<Config> {
        let base_url = self.base_url.clone().ok_or_else(|| {
            FetchError::ConfigMissing(format!("--base-url or {API_URL_VAR} required"))
        })?;

        let timeout = self
            .timeout_ms
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_TIMEOUT);

        let config = Config::new(base_url).with_timeout(timeout);
        config.validate()?;
        Ok(config)
    }
}
