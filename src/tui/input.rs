//! Raw-mode line editing for the interactive form.

use crossterm::event::{Event, KeyCode, KeyModifiers, read};

use crate::terminal::{RawModeGuard, console_width, flush, reset_terminal};

/// Single-line editor with cursor movement. Enter accepts, Esc cancels
/// (returns `None`), Ctrl+C exits the process after restoring the terminal.
pub fn get_editable_input(prompt: &str, initial: &str) -> Option<String> {
    let mut input: Vec<char> = initial.chars().collect();
    let mut cursor = input.len();
    let mut cancelled = false;

    // without raw mode there is nothing to edit; accept the initial value
    let _guard = match RawModeGuard::new() {
        Ok(g) => g,
        Err(_) => return Some(initial.to_string()),
    };

    let mut last_width = redraw(prompt, &input, cursor, 0);

    loop {
        match read() {
            Ok(Event::Key(key)) => {
                match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        // process::exit skips destructors; restore first
                        reset_terminal();
                        println!();
                        std::process::exit(0);
                    }
                    KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        input.clear();
                        cursor = 0;
                    }
                    KeyCode::Esc => {
                        cancelled = true;
                        break;
                    }
                    KeyCode::Enter => break,
                    KeyCode::Backspace => {
                        if cursor > 0 {
                            cursor -= 1;
                            input.remove(cursor);
                        }
                    }
                    KeyCode::Delete => {
                        if cursor < input.len() {
                            input.remove(cursor);
                        }
                    }
                    KeyCode::Left => cursor = cursor.saturating_sub(1),
                    KeyCode::Right => {
                        if cursor < input.len() {
                            cursor += 1;
                        }
                    }
                    KeyCode::Home => cursor = 0,
                    KeyCode::End => cursor = input.len(),
                    KeyCode::Char(c) => {
                        input.insert(cursor, c);
                        cursor += 1;
                    }
                    _ => {}
                }
                last_width = redraw(prompt, &input, cursor, last_width);
            }
            Err(_) => break,
            _ => {}
        }
    }

    drop(_guard);
    println!();
    if cancelled {
        None
    } else {
        Some(input.iter().collect())
    }
}

/// Redraw the line and park the terminal cursor at the edit position.
/// Returns the display width of the rendered input for the next erase.
fn redraw(prompt: &str, input: &[char], cursor: usize, last_width: usize) -> usize {
    let text: String = input.iter().collect();
    print!("\r{prompt}: {}", " ".repeat(last_width + 1));
    print!("\r{prompt}: {text}");

    let before: String = input[..cursor].iter().collect();
    let col = console_width(prompt) + 3 + console_width(&before);
    print!("\x1b[{col}G");
    flush();
    console_width(&text)
}

/// Numeric input on top of the line editor; re-prompts until the value
/// parses. Empty input maps to 0 so callers can treat it as "unset".
pub fn get_numeric_input(prompt: &str, initial: usize) -> Option<usize> {
    let mut current = if initial > 0 {
        initial.to_string()
    } else {
        String::new()
    };

    loop {
        let raw = get_editable_input(prompt, &current)?;
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Some(0);
        }
        match trimmed.parse() {
            Ok(n) => return Some(n),
            Err(_) => {
                crate::cli::prompts::warn("Please enter a whole number");
                current = trimmed.chars().filter(|c| c.is_ascii_digit()).collect();
            }
        }
    }
}
