use std::path::Path;

use anyhow::Context;
use glosa_config::Config;

/// Picked up from the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "glosa.json";

/// Explicit file, else `./glosa.json`, else defaults plus environment.
pub fn load_config(explicit: Option<&Path>) -> anyhow::Result<Config> {
    if let Some(path) = explicit {
        return Config::from_file(path)
            .with_context(|| format!("failed to load config {}", path.display()));
    }

    let local = Path::new(DEFAULT_CONFIG_FILE);
    if local.exists() {
        return Config::from_file(local)
            .with_context(|| format!("failed to load config {}", local.display()));
    }

    Ok(Config::new())
}

pub fn write_config(config: &Config, path: &Path) -> anyhow::Result<()> {
    std::fs::write(path, config.to_json_pretty()?)
        .with_context(|| format!("failed to write config {}", path.display()))?;
    println!("Wrote config to {}", path.display());
    Ok(())
}
