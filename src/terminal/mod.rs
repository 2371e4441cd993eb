//! Terminal control and styled output.

mod output;
mod raw_mode;

pub use output::{
    BOX_WIDTH, box_bottom, box_line, box_top, calculate_entropy, clear, console_width,
    entropy_strength, flush, print_centered, reset_terminal,
};
pub use raw_mode::RawModeGuard;
