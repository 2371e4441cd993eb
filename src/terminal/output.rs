//! Terminal output utilities: box drawing, entropy readout, ANSI helpers.

use std::io::{self, Write};

use crossterm::terminal::disable_raw_mode;

pub const BOX_WIDTH: usize = 62;

/// Clear screen and move cursor to top-left.
pub fn clear() {
    print!("\x1b[2J\x1b[3J\x1b[H");
    flush();
}

pub fn flush() {
    let _ = io::stdout().flush();
}

/// Reset terminal to a sane state.
pub fn reset_terminal() {
    let _ = disable_raw_mode();
    print!("\x1b[0m");
    flush();
}

// ============================================================================
// Box drawing
// ============================================================================

/// Box top with optional title: ┌─ Title ─────────┐
pub fn box_top(title: &str) {
    if title.is_empty() {
        println!("┌{}┐", "─".repeat(BOX_WIDTH - 2));
    } else {
        let title_part = format!("─ {title} ");
        let remaining = (BOX_WIDTH - 2).saturating_sub(title_part.chars().count());
        println!("┌{title_part}{}┐", "─".repeat(remaining));
    }
}

/// Box content line, padded to the box width.
pub fn box_line(content: &str) {
    let inner_width = BOX_WIDTH - 4;
    let width = console_width(content);
    if width <= inner_width {
        println!("│ {content}{} │", " ".repeat(inner_width - width));
    } else {
        println!("│ {content} │");
    }
}

pub fn box_bottom() {
    println!("└{}┘", "─".repeat(BOX_WIDTH - 2));
}

/// Center a line within the box width.
pub fn print_centered(content: &str) {
    let width = console_width(content);
    if width < BOX_WIDTH {
        print!("{}", " ".repeat((BOX_WIDTH - width) / 2));
    }
    println!("{content}");
}

/// Display columns a string occupies. CJK characters render double-width;
/// combining marks (Tibetan vowel signs) render zero-width.
pub fn console_width(s: &str) -> usize {
    s.chars()
        .map(|c| match c {
            '\u{0F71}'..='\u{0F84}' => 0,
            '\u{1100}'..='\u{115F}'
            | '\u{2E80}'..='\u{A4CF}'
            | '\u{AC00}'..='\u{D7A3}'
            | '\u{F900}'..='\u{FAFF}'
            | '\u{FF00}'..='\u{FF60}' => 2,
            _ => 1,
        })
        .sum()
}

// ============================================================================
// Entropy readout
// ============================================================================

/// Bits of entropy for a password of `length` drawn from `charset_size`
/// candidates.
pub fn calculate_entropy(length: usize, charset_size: usize) -> f64 {
    if charset_size < 2 {
        return 0.0;
    }
    length as f64 * (charset_size as f64).log2()
}

pub fn entropy_strength(bits: f64) -> &'static str {
    match bits {
        b if b < 28.0 => "very weak",
        b if b < 36.0 => "weak",
        b if b < 60.0 => "reasonable",
        b if b < 128.0 => "strong",
        _ => "very strong",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entropy_grows_with_length_and_charset() {
        let narrow = calculate_entropy(16, 26);
        let wide = calculate_entropy(16, 94);
        assert!(wide > narrow);
        assert!(calculate_entropy(32, 26) > narrow);
        assert_eq!(calculate_entropy(16, 1), 0.0);
    }

    #[test]
    fn strength_labels_cover_the_scale() {
        assert_eq!(entropy_strength(10.0), "very weak");
        assert_eq!(entropy_strength(30.0), "weak");
        assert_eq!(entropy_strength(50.0), "reasonable");
        assert_eq!(entropy_strength(90.0), "strong");
        assert_eq!(entropy_strength(200.0), "very strong");
    }

    #[test]
    fn cjk_chars_count_as_two_columns() {
        assert_eq!(console_width("ab"), 2);
        assert_eq!(console_width("中文"), 4);
    }
}
