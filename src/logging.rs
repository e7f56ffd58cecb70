// Diagnostics logging.
// The terminal belongs to the UI, so tracing output goes to a file.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use directories::ProjectDirs;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_FILTER: &str = "debug_console=debug,info";
const LOG_FILE_NAME: &str = "debug-console.log";

/// Log file in the platform cache directory (~/.cache/debug-console on Linux).
pub fn default_log_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "debug-console").map(|dirs| dirs.cache_dir().join(LOG_FILE_NAME))
}

/// Open a log file for appending, creating its directory if needed.
pub fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Install the global subscriber. Without a usable log file, diagnostics are
/// dropped and the console runs anyway.
pub fn init(log_file: Option<&Path>) {
    let Some(path) = log_file else {
        return;
    };

    let file = match open_log_file(path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!(
                "warning: cannot open log file {}: {}",
                path.display(),
                e
            );
            return;
        }
    };

    tracing_subscriber::registry()
        .with(EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_FILTER.into()),
        ))
        .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
        .init();
}
