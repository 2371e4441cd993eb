//! CLI context - settings plus parsed flags for one invocation.

use super::{CliFlags, print_help, prompts};
use crate::error::Result;
use crate::pass::{self, ComposeError, GenerateRequest};
use crate::settings::Settings;

pub struct Context {
    pub settings: Settings,
    pub flags: CliFlags,
}

impl Context {
    /// Parse arguments and load persisted settings. Returns the parse error
    /// text when the command line is malformed.
    pub fn new(args: Vec<String>) -> std::result::Result<Self, String> {
        let flags = super::parse(&args).map_err(|e| e.to_string())?;

        let settings = Settings::load().unwrap_or_else(|e| {
            prompts::warn(&format!("Failed to load settings: {e}"));
            Settings::default()
        });

        Ok(Self { settings, flags })
    }

    pub fn run(&mut self) -> Result<()> {
        if self.flags.help {
            print_help();
            return Ok(());
        }
        if self.flags.version {
            println!("polypass {}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }

        prompts::set_quiet(self.flags.quiet);
        self.apply_flags();

        let request = self.build_request();
        // the collector owns length validation; the composer only
        // re-checks defensively
        if request.length == 0 {
            return Err(ComposeError::InvalidLength(0).into());
        }

        let outcome = pass::output::run(&request, &self.settings)?;
        prompts::generation_report(&request.label, &outcome);
        Ok(())
    }

    /// Fold explicit flags over the persisted defaults.
    fn apply_flags(&mut self) {
        if let Some(len) = self.flags.length {
            self.settings.pass_length = len;
        }
        if let Some(ref pools) = self.flags.pools {
            self.settings.enabled_pools = pools.clone();
        }
        if let Some(ref path) = self.flags.output {
            self.settings.vault_path = path.clone();
        }
        if self.flags.board {
            self.settings.to_clipboard = true;
        }
        if self.flags.github {
            self.settings.github.enabled = true;
        }
    }

    fn build_request(&self) -> GenerateRequest {
        let mut request = GenerateRequest::from_settings(&self.settings);
        request.label = self
            .flags
            .name
            .clone()
            .unwrap_or_else(|| "unnamed".to_string());
        request
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(list: &[&str]) -> Context {
        let args: Vec<String> = std::iter::once("polypass")
            .chain(list.iter().copied())
            .map(String::from)
            .collect();
        let flags = crate::cli::parse(&args).unwrap();
        Context {
            settings: Settings::default(),
            flags,
        }
    }

    #[test]
    fn flags_override_persisted_defaults() {
        let mut ctx = context(&["-l", "40", "-p", "chinese", "-o", "vault.md", "-g"]);
        ctx.apply_flags();
        assert_eq!(ctx.settings.pass_length, 40);
        assert_eq!(ctx.settings.enabled_pools, vec!["chinese".to_string()]);
        assert_eq!(ctx.settings.vault_path, "vault.md");
        assert!(ctx.settings.github.enabled);
    }

    #[test]
    fn request_carries_the_label_and_defaults() {
        let mut ctx = context(&["-n", "mail"]);
        ctx.apply_flags();
        let request = ctx.build_request();
        assert_eq!(request.label, "mail");
        assert_eq!(request.length, 16);
        assert!(!request.backup);
    }

    #[test]
    fn missing_label_falls_back_to_unnamed() {
        let ctx = context(&["-l", "8"]);
        assert_eq!(ctx.build_request().label, "unnamed");
    }
}
