//! Interactive form mode.

mod form;
mod input;

pub use form::run;
pub use input::{get_editable_input, get_numeric_input};
