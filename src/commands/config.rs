use std::path::Path;
use anyhow::{Context, Result};

use crate::configtool::Settings;

pub fn show(settings: &Settings, path: &Path) -> Result<()> {
    println!("# {}", path.display());
    let json = serde_json::to_string_pretty(settings).context("Failed to serialize settings")?;
    println!("{}", json);
    Ok(())
}

pub fn reset(path: &Path) -> Result<()> {
    Settings::default()
        .save_to(path)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    println!("Settings reset: {}", path.display());
    Ok(())
}
