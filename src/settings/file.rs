//! Settings file persistence (TOML under `~/.config/polypass/`).

use std::env;
use std::path::{Path, PathBuf};

use super::Settings;
use crate::error::{AppError, Result};

pub fn config_path() -> PathBuf {
    let home = env::var("HOME").unwrap_or_else(|_| ".".into());
    Path::new(&home).join(".config/polypass/config.toml")
}

/// Load settings, writing the defaults on first run so the user has a file
/// to edit. A malformed file is an error; it is never silently replaced.
pub fn load(path: &Path) -> Result<Settings> {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            let settings = Settings::default();
            save(&settings, path)?;
            return Ok(settings);
        }
        Err(e) => return Err(e.into()),
    };
    toml::from_str(&text)
        .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))
}

pub fn save(settings: &Settings, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    let text = toml::to_string_pretty(settings)
        .map_err(|e| AppError::Config(e.to_string()))?;
    std::fs::write(path, text)?;
    Ok(())
}
