use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use glosa_core::GlossaryStore;
use glosa_types::AppEvent;
use tokio::signal;

mod command;
mod controller;
mod events;
mod io;
mod loader;
mod logging;
mod oneshot;
mod profile;
mod state;
mod ui;

#[cfg(test)]
mod tests;

use self::controller::AppController;
use self::state::AppState;

/// Glossary lookup in the terminal.
#[derive(Parser, Debug)]
#[command(name = "glosa", version)]
pub struct Cli {
    /// JSON config file (defaults to ./glosa.json when present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the effective config as JSON to this path and exit
    #[arg(long, value_name = "PATH")]
    write_config: Option<PathBuf>,

    /// CSV URL to fetch
    #[arg(long)]
    source_url: Option<String>,

    /// Local CSV file, used instead of the URL
    #[arg(long)]
    source_path: Option<String>,

    /// Search once for this keyword, print and exit
    #[arg(long, short, conflicts_with = "category")]
    query: Option<String>,

    /// Filter once by this category, print and exit
    #[arg(long, short)]
    category: Option<String>,

    /// Print one-shot results as JSON
    #[arg(long)]
    json: bool,

    /// Show the search tier of each one-shot result
    #[arg(long)]
    explain: bool,

    /// Debug logging
    #[arg(long, short)]
    verbose: bool,
}

impl Cli {
    fn is_one_shot(&self) -> bool {
        self.query.is_some() || self.category.is_some()
    }
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let mut config = profile::load_config(cli.config.as_deref())?;
    if let Some(url) = &cli.source_url {
        config.source.url = url.clone();
        config.source.path = None;
    }
    if let Some(path) = &cli.source_path {
        config.source.path = Some(path.clone());
    }

    if let Some(path) = &cli.write_config {
        return profile::write_config(&config, path);
    }

    logging::init_tracing(&config.log, cli.verbose)?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let result = runtime.block_on(run(cli, config));
    // stdin reads park a blocking thread until the next line
    runtime.shutdown_timeout(Duration::from_millis(200));

    result
}

async fn run(cli: Cli, config: glosa_config::Config) -> anyhow::Result<()> {
    if cli.is_one_shot() {
        return oneshot::run_once(&cli, &config).await;
    }

    let (store, load_error) = match loader::load_store(&config).await {
        Ok(store) => (store, None),
        Err(e) => {
            tracing::error!("Initial load failed: {e:#}");
            (GlossaryStore::default(), Some(e))
        }
    };

    let state = Arc::new(AppState::new(config, store));
    let controller = AppController::new(state).await;

    if let Some(e) = load_error {
        controller
            .notify(AppEvent::Status(format!(
                "Could not load the glossary ({e:#}). Type :reload to try again."
            )))
            .await?;
    }

    let mut tasks = controller.spawn_tasks();

    tokio::select! {
        result = signal::ctrl_c() => {
            match result {
                Ok(()) => tracing::info!("Shutdown requested"),
                Err(e) => tracing::error!("failed to listen for ctrl+c: {e}"),
            }
        }
        Some(result) = tasks.join_next() => {
            match result {
                Ok(Ok(())) => tracing::info!("task finished, shutting down"),
                Ok(Err(e)) => tracing::error!("task failed: {e:#}"),
                Err(e) => tracing::error!("task panicked: {e}"),
            }
        }
    }

    controller.shutdown();
    tasks.abort_all();

    Ok(())
}
