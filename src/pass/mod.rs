//! Password generation: pools, composer, and the per-action pipeline.

pub mod charset;
mod compose;
pub mod output;
pub mod pool;

pub use compose::{ComposeError, compose};
pub use pool::{Pool, PoolSelection};

use crate::settings::Settings;

/// Everything one generate action needs, captured up front.
///
/// Built once per action by the CLI or the TUI form and passed by value;
/// nothing about a request is shared or mutated while it runs.
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    pub label: String,
    pub length: usize,
    pub enabled_pools: Vec<String>,
    pub to_clipboard: bool,
    pub backup: bool,
}

impl GenerateRequest {
    /// Request pre-filled from the persisted defaults; the collector then
    /// overrides whatever the user supplied.
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            label: String::new(),
            length: settings.pass_length,
            enabled_pools: settings.enabled_pools.clone(),
            to_clipboard: settings.to_clipboard,
            backup: settings.github.enabled,
        }
    }
}
