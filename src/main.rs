//! taskdeck - A paginated, sortable task board for the terminal.
//!
//! This is the main binary that loads the configuration and tasks, then
//! launches the TUI application.

use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::Context;
use taskdeck_config::{Config, LogConfig, load_tasks};
use taskdeck_protocol::{Task, dummy::dummy_tasks};
use taskdeck_tui::{App, terminal};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Environment variable holding a log filter that overrides `log.level`.
const LOG_FILTER_ENV: &str = "TASKDECK_LOG";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load()
        .await
        .context("failed to load configuration")?;
    init_logging(&config.log)?;

    let tasks = board_tasks(&config).await?;
    let mut app = App::new(&tasks).context("failed to render the board")?;

    // Install panic hook to restore terminal on panic
    terminal::install_panic_hook();
    let mut terminal = terminal::setup_terminal()?;

    let result = app.run(&mut terminal).await;

    // Always restore terminal, even if app.run() failed
    terminal::restore_terminal(&mut terminal)?;

    result
}

/// Sends log records to the configured file; without one nothing is logged.
fn init_logging(config: &LogConfig) -> anyhow::Result<()> {
    let Some(path) = &config.file else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    let filter = EnvFilter::try_from_env(LOG_FILTER_ENV)
        .or_else(|_| EnvFilter::try_new(&config.level))
        .with_context(|| format!("invalid log filter in {LOG_FILTER_ENV}"))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install log subscriber: {e}"))?;

    info!(path = %path.display(), "logging started");
    Ok(())
}

/// Reads the configured task file, or falls back to sample tasks.
async fn board_tasks(config: &Config) -> anyhow::Result<Vec<Task>> {
    match &config.tasks_file {
        Some(path) => load_tasks(path)
            .await
            .with_context(|| format!("failed to load tasks from {}", path.display())),
        None => {
            warn!("no tasks file configured, showing sample tasks");
            Ok(dummy_tasks())
        }
    }
}
