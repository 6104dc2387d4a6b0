//! Configuration loading for the TUI.
//!
//! Responsibilities:
//! - Resolve the runtime `Config` from `.env`, environment variables and CLI flags.
//!
//! Does NOT handle:
//! - Creating the tours client (see `tours_client::ToursClient::from_config`).
//!
//! Invariants:
//! - Configuration precedence: CLI args > env vars > `.env` > defaults.
//! - `load_dotenv()` is called before environment variables are read.

use std::time::Duration;

use anyhow::{Context, Result};
use tours_config::{Config, ConfigLoader};

use crate::cli::Cli;

/// Load configuration, applying CLI overrides on top of the environment.
pub fn load_config(cli: &Cli) -> Result<Config> {
    let mut loader = ConfigLoader::new()
        .load_dotenv()
        .context("Failed to load .env file")?
        .from_env()
        .context("Invalid environment configuration")?;

    if let Some(url) = &cli.url {
        loader = loader.with_tours_url(url.clone());
    }
    if let Some(secs) = cli.timeout {
        loader = loader.with_timeout(Duration::from_secs(secs));
    }
    if let Some(theme) = cli.theme {
        loader = loader.with_theme(theme);
    }

    let config = loader.build().context("Invalid configuration")?;
    tracing::debug!(
        url = %config.tours_url,
        timeout_secs = config.timeout.map(|t| t.as_secs()),
        theme = %config.theme,
        "Configuration resolved"
    );
    Ok(config)
}
