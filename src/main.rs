// debug-console: terminal front end for an application's debug API.
// Parses configuration, sets up logging and the fetch runtime, and runs the TUI.

mod api;
mod app;
mod config;
mod error;
mod fetch;
mod logging;
mod state;
mod ui;

use std::process::ExitCode;

use clap::Parser;

use crate::api::DebugClient;
use crate::app::App;
use crate::config::{Cli, Config};
use crate::error::Result;
use crate::fetch::Fetcher;

fn main() -> ExitCode {
    let config = match Config::from_cli(Cli::parse()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    logging::init(config.log_file.as_deref());

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "debug console exited with an error");
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    let client = DebugClient::new(config.base_url.clone())?;
    tracing::info!(base_url = %client.base_url(), "starting debug console");

    let mut app = App::new(Fetcher::new(client, runtime.handle().clone()));

    let mut terminal = ratatui::try_init()?;
    let result = app.run(&mut terminal);
    ratatui::restore();

    // Requests still in flight are abandoned.
    runtime.shutdown_background();

    result?;
    tracing::info!("debug console closed");
    Ok(())
}
