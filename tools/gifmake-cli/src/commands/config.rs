//! Config file management.

use anyhow::Context;
use gifmake_common::config::{config_file_path, AppConfig};

/// Write a default config file to the standard location.
pub fn init(force: bool) -> anyhow::Result<()> {
    let path = config_file_path();
    if path.exists() && !force {
        anyhow::bail!(
            "Config already exists at {} (use --force to overwrite)",
            path.display()
        );
    }

    let written = AppConfig::default()
        .save()
        .with_context(|| format!("Failed to write config to {}", path.display()))?;
    println!("Wrote {}", written.display());
    Ok(())
}

/// Print the config in effect and where it is read from.
pub fn show(config: &AppConfig) -> anyhow::Result<()> {
    let path = config_file_path();
    let state = if path.exists() { "" } else { " (not present, using defaults)" };
    println!("# {}{state}", path.display());
    println!("{}", serde_json::to_string_pretty(config)?);
    Ok(())
}
