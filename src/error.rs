//! Application error taxonomy.

use thiserror::Error;

use crate::pass::ComposeError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("password generation failed: {0}")]
    Compose(#[from] ComposeError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("charset '{name}' could not be read: {source}")]
    Charset {
        name: String,
        source: std::io::Error,
    },

    #[error("GitHub backup rejected with status {status}")]
    Backup { status: u16 },
}

pub type Result<T> = std::result::Result<T, AppError>;
