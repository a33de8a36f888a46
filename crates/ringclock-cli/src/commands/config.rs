use std::path::Path;

use anyhow::{bail, Context, Result};

use ringclock_core::AppConfig;

pub fn path() -> Result<()> {
    println!("{}", AppConfig::config_path().display());
    Ok(())
}

pub fn init(force: bool) -> Result<()> {
    let path = AppConfig::config_path();
    write_defaults(&path, force)?;
    println!("Wrote default configuration to {}", path.display());
    Ok(())
}

/// Write the default configuration to `path` without reading what is there
fn write_defaults(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "{} already exists.\nUse --force to overwrite it with the defaults.",
            path.display()
        );
    }

    AppConfig::default()
        .save_to(path)
        .with_context(|| format!("writing {}", path.display()))
}
