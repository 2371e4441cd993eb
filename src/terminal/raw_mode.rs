//! RAII raw-mode guard.

use crossterm::terminal::{disable_raw_mode, enable_raw_mode};

/// Enables raw mode on creation, restores cooked mode on drop so early
/// returns and panics cannot leave the terminal unusable.
pub struct RawModeGuard;

impl RawModeGuard {
    pub fn new() -> std::io::Result<Self> {
        enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}
