//! Markdown vault persistence.
//!
//! Each successful generation appends a labelled entry; the vault is never
//! truncated or rewritten.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Vault entry text: a heading with the label, then the password in a
/// fenced block. The same text goes to the clipboard sink.
pub fn format_entry(label: &str, password: &str) -> String {
    format!("# {label}\n```\n{password}\n```\n\n")
}

/// Append one entry to the vault at `path`, creating the file and any
/// parent directories on first use. Returns the resolved vault path.
pub fn append(path: &str, entry: &str) -> Result<PathBuf> {
    let path = Path::new(path);
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(entry.as_bytes())?;

    log::debug!("vault entry appended to {}", path.display());
    Ok(std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf()))
}
