//! Launch Tracker - an interactive client for the public launch-data API.
//!
//! Search launches by year, keep a list of favorite launches, look up
//! payload details and view per-rocket success statistics computed from
//! the launches searched so far.

mod format;
mod menu;

use std::io;

use anyhow::{Context, Result};
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use launchtrack_core::{ApiClient, Config, LaunchService};

use menu::Menu;

/// Log file name prefix inside the log directory
const LOG_FILE_PREFIX: &str = "launchtrack.log";

/// Initialize the tracing subscriber for logging.
///
/// Logs go to a daily rolling file so they never interleave with the menu.
/// Falls back to stderr at `warn` when no log directory is available.
fn init_tracing() -> Option<WorkerGuard> {
    // Use RUST_LOG env var to control log level (e.g., RUST_LOG=debug)
    let log_dir = Config::log_dir()
        .and_then(|dir| std::fs::create_dir_all(&dir).map(|_| dir).map_err(Into::into));

    match log_dir {
        Ok(dir) => {
            let filter = EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info"));
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);

            tracing_subscriber::registry()
                .with(fmt::layer().with_writer(writer).with_ansi(false))
                .with(filter)
                .init();
            Some(guard)
        }
        Err(e) => {
            let filter = EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn"));

            tracing_subscriber::registry()
                .with(fmt::layer().with_writer(io::stderr))
                .with(filter)
                .init();
            warn!(error = %e, "No log directory available, logging to stderr");
            None
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = Config::load().context("Failed to load configuration")?;

    // Keep the guard alive so buffered log lines are flushed on exit
    let _log_guard = init_tracing();
    info!(api = %config.api_base_url, timeout_secs = config.request_timeout_secs, "Launch Tracker starting");

    let client = ApiClient::new(&config).context("Failed to create API client")?;
    let service = LaunchService::new(client);

    let stdin = io::stdin();
    let mut menu = Menu::new(service, stdin.lock(), io::stdout());
    menu.run().await?;

    info!("Launch Tracker shutting down");
    Ok(())
}
