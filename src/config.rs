// Command line and runtime configuration.

use std::path::PathBuf;

use clap::Parser;
use reqwest::Url;

use crate::api::{DEFAULT_BASE_URL, parse_base_url};
use crate::error::Result;
use crate::logging;

/// Terminal console for a debug API: loaded mods, code search, and log files.
#[derive(Parser, Debug)]
#[command(name = "debug-console")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Base URL of the debug API
    #[arg(long, env = "DEBUG_CONSOLE_URL", default_value = DEFAULT_BASE_URL)]
    pub url: String,

    /// Write diagnostics here instead of the cache directory
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

/// Resolved configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: Url,
    /// Diagnostics destination; `None` disables logging.
    pub log_file: Option<PathBuf>,
}

impl Config {
    pub fn from_cli(cli: Cli) -> Result<Self> {
        let base_url = parse_base_url(&cli.url)?;
        let log_file = cli.log_file.or_else(logging::default_log_path);
        Ok(Self { base_url, log_file })
    }
}
