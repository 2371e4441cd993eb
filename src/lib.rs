//! polypass - multi-script password generation with a Markdown vault and
//! optional GitHub backup.
//!
//! The core is [`pass::compose`]: a target length and a selection of named
//! character pools become one password, each non-empty pool contributing
//! roughly `length / k` characters before the result is shuffled. Everything
//! around it - charset files, the vault, the clipboard, the backup call - is
//! plumbing over that one routine.

pub mod backup;
pub mod cli;
pub mod error;
pub mod exits;
pub mod pass;
pub mod rand;
pub mod settings;
pub mod store;
pub mod terminal;
pub mod tui;

pub use error::{AppError, Result};
pub use pass::{ComposeError, GenerateRequest, Pool, PoolSelection, compose};
pub use rand::{RandomSource, SplitMix64};
pub use settings::Settings;
