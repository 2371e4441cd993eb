//! Persisted generation defaults and backup configuration.

mod file;

use serde::{Deserialize, Serialize};

use crate::error::Result;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub pass_length: usize,
    pub enabled_pools: Vec<String>,
    pub vault_path: String,
    /// Directory with `<pool>.txt` charset overrides; empty means built-ins.
    pub charset_dir: String,
    pub to_clipboard: bool,
    pub github: GithubSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GithubSettings {
    pub enabled: bool,
    pub token: String,
    pub repo: String,
    pub branch: String,
}

impl Settings {
    pub fn load() -> Result<Self> {
        file::load(&file::config_path())
    }

    pub fn save(&self) -> Result<()> {
        file::save(self, &file::config_path())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pass_length: 16,
            enabled_pools: vec![
                "uppercase".to_string(),
                "lowercase".to_string(),
                "symbols".to_string(),
            ],
            vault_path: String::from("password.md"),
            charset_dir: String::new(),
            to_clipboard: true,
            github: GithubSettings::default(),
        }
    }
}

impl Default for GithubSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            token: String::new(),
            repo: String::new(),
            branch: String::from("main"),
        }
    }
}
