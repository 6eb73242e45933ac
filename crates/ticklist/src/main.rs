/*
[INPUT]:  CLI arguments, task data file, terminal key events
[OUTPUT]: Interactive to-do list TUI session
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags, startup flow, or terminal handling
*/

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use ticklist_store::TaskStore;

use crate::app::App;

mod app;
mod ui;

#[derive(Parser, Debug)]
#[command(name = "ticklist", version, about = "Terminal to-do list")]
struct Cli {
    /// Directory holding tasks.json and logs (defaults to the platform data dir)
    #[arg(long = "data-dir", value_name = "PATH")]
    data_dir: Option<PathBuf>,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();

    let data_dir = match args.data_dir.clone() {
        Some(dir) => dir,
        None => dirs::data_dir()
            .context("could not determine data directory")?
            .join("ticklist"),
    };

    let _log_guard = init_tracing(&args.log_level, &data_dir)?;
    info!(data_dir = %data_dir.display(), "starting ticklist");

    let store = Arc::new(
        TaskStore::new_in_dir(&data_dir)
            .await
            .context("open task store")?,
    );

    let mut app = App::new(store).await?;
    let mut terminal = ratatui::try_init().context("initialize terminal")?;
    let result = app.run(&mut terminal).await;
    ratatui::restore();

    result
}

/// Log to a file under the data dir; the terminal belongs to the TUI.
fn init_tracing(log_level: &str, data_dir: &Path) -> Result<WorkerGuard> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    let log_dir = data_dir.join("logs");
    std::fs::create_dir_all(&log_dir).context("create log directory")?;
    let appender = tracing_appender::rolling::daily(&log_dir, "ticklist.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(guard)
}
