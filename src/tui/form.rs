//! Interactive generate form - the no-arguments mode.

use super::input::{get_editable_input, get_numeric_input};
use crate::cli::prompts;
use crate::pass::charset::POOL_NAMES;
use crate::pass::{self, GenerateRequest};
use crate::settings::Settings;
use crate::terminal::{box_bottom, box_line, box_top, clear, print_centered, reset_terminal};

const POOL_LABELS: [&str; 5] = [
    "Uppercase letters",
    "Lowercase letters",
    "Symbols",
    "Chinese characters",
    "Tibetan characters",
];

pub fn run() {
    reset_terminal();
    clear();

    let mut settings = Settings::load().unwrap_or_else(|e| {
        prompts::warn(&format!("Failed to load settings: {e}"));
        Settings::default()
    });
    let mut request = GenerateRequest::from_settings(&settings);
    let mut flash: Option<String> = None;

    loop {
        clear();
        draw_form(&request, &settings, flash.take());

        let choice = match get_editable_input("Enter choice", "") {
            Some(s) => s,
            None => continue,
        };

        match choice.trim() {
            "" => {
                if let Err(msg) = generate(&request, &settings) {
                    flash = Some(msg);
                }
            }
            "1" => {
                if let Some(label) = get_editable_input("Label", &request.label) {
                    request.label = label.trim().to_string();
                }
            }
            "2" => {
                if let Some(n) = get_numeric_input("Length", request.length) {
                    request.length = n;
                }
            }
            "3" | "4" | "5" | "6" | "7" => {
                let idx = choice.trim().parse::<usize>().unwrap_or(3) - 3;
                toggle_pool(&mut request.enabled_pools, POOL_NAMES[idx]);
            }
            "8" => request.to_clipboard = !request.to_clipboard,
            "9" => request.backup = !request.backup,
            "g" | "G" => edit_github(&mut settings),
            "s" | "S" => flash = Some(save_defaults(&request, &mut settings)),
            "q" | "Q" => {
                clear();
                break;
            }
            _ => flash = Some("Invalid choice".to_string()),
        }
    }
}

/// Validate, run the pipeline, show the report. Errors come back as the
/// flash line for the next redraw.
fn generate(request: &GenerateRequest, settings: &Settings) -> Result<(), String> {
    if request.label.trim().is_empty() {
        return Err("A label is required before generating".into());
    }
    if request.length == 0 {
        return Err("Length must be at least 1".into());
    }

    match pass::output::run(request, settings) {
        Ok(outcome) => {
            clear();
            prompts::generation_report(&request.label, &outcome);
            let _ = get_editable_input("Press Enter to continue", "");
            Ok(())
        }
        Err(e) => Err(e.to_string()),
    }
}

fn toggle_pool(enabled: &mut Vec<String>, name: &str) {
    if let Some(pos) = enabled.iter().position(|e| e == name) {
        enabled.remove(pos);
    } else {
        enabled.push(name.to_string());
    }
}

fn save_defaults(request: &GenerateRequest, settings: &mut Settings) -> String {
    if request.length > 0 {
        settings.pass_length = request.length;
    }
    settings.enabled_pools = request.enabled_pools.clone();
    settings.to_clipboard = request.to_clipboard;
    settings.github.enabled = request.backup;

    match settings.save() {
        Ok(()) => "Defaults saved".to_string(),
        Err(e) => format!("Save failed: {e}"),
    }
}

fn edit_github(settings: &mut Settings) {
    let github = &mut settings.github;
    if let Some(token) = get_editable_input("GitHub token", &github.token) {
        github.token = token.trim().to_string();
    }
    if let Some(repo) = get_editable_input("GitHub repo (owner/name)", &github.repo) {
        github.repo = repo.trim().to_string();
    }
    if let Some(branch) = get_editable_input("GitHub branch", &github.branch) {
        github.branch = branch.trim().to_string();
    }
}

fn mark(on: bool) -> &'static str {
    if on { "[x]" } else { "[ ]" }
}

fn draw_form(request: &GenerateRequest, settings: &Settings, flash: Option<String>) {
    box_top("polypass");
    box_line(&format!(
        "1. Label:  {}",
        if request.label.is_empty() {
            "(unset)"
        } else {
            request.label.as_str()
        }
    ));
    box_line(&format!("2. Length: {}", request.length));
    box_line("");
    for (i, (name, label)) in POOL_NAMES.iter().zip(POOL_LABELS).enumerate() {
        let on = request.enabled_pools.iter().any(|e| e == name);
        box_line(&format!("{}. {} {label}", i + 3, mark(on)));
    }
    box_line("");
    box_line(&format!(
        "8. {} Copy entry to clipboard",
        mark(request.to_clipboard)
    ));
    box_line(&format!(
        "9. {} Back up vault to GitHub",
        mark(request.backup)
    ));
    box_line("");
    box_line(&format!("   Vault: {}", settings.vault_path));
    if request.backup {
        let repo = if settings.github.repo.is_empty() {
            "(unset)"
        } else {
            settings.github.repo.as_str()
        };
        box_line(&format!("   GitHub: {repo}@{}", settings.github.branch));
    }
    box_bottom();
    print_centered("[Enter] generate \u{2022} [g] GitHub \u{2022} [s] save defaults \u{2022} [q] quit");
    if let Some(msg) = flash {
        print_centered(&msg);
    }
    println!();
}
