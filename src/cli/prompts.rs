//! Centralized user-visible messages, with a process-wide quiet mode.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::backup::BackupOutcome;
use crate::pass::output::Outcome;
use crate::terminal::{box_bottom, box_line, box_top, entropy_strength};

const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

static QUIET: AtomicBool = AtomicBool::new(false);

/// Suppress warnings and non-essential output.
pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::SeqCst);
}

pub fn quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

/// Warning to stderr (yellow) - suppressed in quiet mode.
pub fn warn(msg: &str) {
    if !quiet() {
        eprintln!("{YELLOW}{msg}{RESET}");
    }
}

/// Error to stderr (red) - never suppressed.
pub fn error(msg: &str) {
    eprintln!("{RED}{msg}{RESET}");
}

/// Summary box after a successful generate action.
pub fn generation_report(label: &str, outcome: &Outcome) {
    if quiet() {
        return;
    }
    println!();
    box_top("Saved");
    box_line(&format!("'{label}' \u{2192} {}", outcome.vault_path.display()));
    box_line(&format!(
        "Entropy: {:.1} bits ({})",
        outcome.entropy_bits,
        entropy_strength(outcome.entropy_bits)
    ));
    if outcome.copied {
        box_line("Entry copied to clipboard");
    }
    match &outcome.backup {
        Some(Ok(BackupOutcome::Created)) => box_line("GitHub backup: vault created"),
        Some(Ok(BackupOutcome::Updated)) => box_line("GitHub backup: vault updated"),
        Some(Err(e)) => box_line(&format!("GitHub backup failed: {e}")),
        None => {}
    }
    box_bottom();
    println!();
}
