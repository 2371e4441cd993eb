//! One generate action: compose, persist, copy, back up.

use std::path::PathBuf;

use copypasta::{ClipboardContext, ClipboardProvider};
use zeroize::Zeroize;

use super::{GenerateRequest, charset, compose};
use crate::backup::{BackupOutcome, GithubClient};
use crate::error::Result;
use crate::rand::SplitMix64;
use crate::settings::Settings;
use crate::store;

/// What a completed action did, for the collector to report. The password
/// itself is zeroized before this is returned; only the vault keeps it.
pub struct Outcome {
    pub vault_path: PathBuf,
    pub entropy_bits: f64,
    pub copied: bool,
    /// `None` when no backup was requested; `Some(Err(_))` when the upload
    /// failed; a failed backup never undoes a persisted password.
    pub backup: Option<Result<BackupOutcome>>,
}

pub fn run(request: &GenerateRequest, settings: &Settings) -> Result<Outcome> {
    let selection = charset::select(&request.enabled_pools, &settings.charset_dir)?;

    let mut rng = SplitMix64::from_entropy();
    let mut password = compose(request.length, &selection, &mut rng)?;
    let entropy_bits =
        crate::terminal::calculate_entropy(request.length, selection.charset_size());

    let mut entry = store::format_entry(&request.label, &password);
    let vault_path = store::append(&settings.vault_path, &entry)?;

    let copied = request.to_clipboard && copy_entry(&entry);

    let backup = request.backup.then(|| {
        let message = format!("Add password entry for {}", request.label);
        GithubClient::new(&settings.github).and_then(|c| c.upload(&vault_path, &message))
    });

    password.zeroize();
    entry.zeroize();

    Ok(Outcome {
        vault_path,
        entropy_bits,
        copied,
        backup,
    })
}

/// Copy the formatted entry to the system clipboard. Returns false (after
/// logging) when no clipboard is reachable, e.g. on a headless session.
fn copy_entry(entry: &str) -> bool {
    let mut ctx = match ClipboardContext::new() {
        Ok(ctx) => ctx,
        Err(e) => {
            log::warn!("clipboard unavailable: {e}");
            return false;
        }
    };
    match ctx.set_contents(entry.to_owned()) {
        Ok(()) => {
            // read back so the clipboard owns its copy, then wipe the echo
            if let Ok(mut echoed) = ctx.get_contents() {
                echoed.zeroize();
            }
            true
        }
        Err(e) => {
            log::warn!("clipboard copy failed: {e}");
            false
        }
    }
}
