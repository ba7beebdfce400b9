use glosa_config::log::LogConfig;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber. Logs go to stderr; stdout belongs to the UI.
///
/// Filter priority: `GLOSA_LOG`, then `RUST_LOG`, then `--verbose`, then the
/// configured filter.
pub fn init_tracing(config: &LogConfig, verbose: bool) -> anyhow::Result<()> {
    let fallback = if verbose {
        "glosa=debug".to_string()
    } else {
        config.filter.clone()
    };

    let filter = EnvFilter::try_from_env("GLOSA_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .or_else(|_| EnvFilter::try_new(&fallback))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true);

    let installed = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    installed.map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))
}
