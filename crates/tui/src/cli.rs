//! Command-line argument parsing for tours-tui.
//!
//! Responsibilities:
//! - Define CLI argument structure using clap derive macros.
//!
//! Does NOT handle:
//! - Configuration loading or validation (see `runtime::config`).
//! - Environment variable parsing (handled by `tours_config`).
//!
//! Invariants:
//! - CLI arguments are parsed once at startup via `Cli::parse()`.
//! - All path arguments are resolved relative to the current working directory.

use clap::Parser;
use std::path::PathBuf;
use tours_config::ColorTheme;
use tours_config::constants::DEFAULT_LOG_DIR;

/// Command-line arguments for tours-tui.
///
/// Configuration precedence (highest to lowest):
/// 1. CLI arguments (e.g., --url, --timeout)
/// 2. Environment variables (e.g., TOURS_URL, TOURS_TIMEOUT)
/// 3. `.env` file in the working directory
/// 4. Default values
#[derive(Debug, Parser)]
#[command(
    name = "tours-tui",
    about = "Browse available tours in the terminal",
    version,
    after_help = "Examples:\n  tours-tui\n  tours-tui --url http://localhost:8080/tours\n  tours-tui --timeout 10 --theme dark\n  tours-tui --log-dir /var/log/tours-tui --no-mouse\n"
)]
pub struct Cli {
    /// Endpoint returning the JSON array of tours
    #[arg(long)]
    pub url: Option<String>,

    /// Request timeout in seconds (no timeout unless set)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Color theme: default, light, dark, high-contrast or monochrome
    #[arg(long)]
    pub theme: Option<ColorTheme>,

    /// Directory for log files
    #[arg(long, default_value = DEFAULT_LOG_DIR)]
    pub log_dir: PathBuf,

    /// Disable mouse support
    #[arg(long)]
    pub no_mouse: bool,
}
