//! Command-line mode.

mod context;
mod flags;
mod parse;
pub mod prompts;

pub use context::Context;
pub use flags::CliFlags;
pub use parse::{ParseError, parse};

pub fn run(args: Vec<String>) {
    let mut ctx = match Context::new(args) {
        Ok(ctx) => ctx,
        Err(msg) => {
            prompts::error(&msg);
            eprintln!("Try 'polypass --help'.");
            std::process::exit(2);
        }
    };

    if let Err(e) = ctx.run() {
        prompts::error(&e.to_string());
        std::process::exit(1);
    }
}

pub fn print_help() {
    println!("polypass {}", env!("CARGO_PKG_VERSION"));
    println!("Multi-script password generator with a Markdown vault and GitHub backup.");
    println!();
    println!("Usage: polypass [OPTIONS]");
    println!("       polypass            (no arguments: interactive form)");
    println!();
    println!("Options:");
    println!("  -n, --name <LABEL>    Label for the vault entry");
    println!("  -l, --length <N>      Password length");
    println!("  -p, --pools <LIST>    Comma-separated pools:");
    println!("                        upper, lower, symbols, chinese, tibetan");
    println!("  -o, --output <PATH>   Vault file (default: password.md)");
    println!("  -b, --board           Copy the vault entry to the clipboard");
    println!("  -g, --github          Push the vault to the configured GitHub repo");
    println!("  -q, --quiet           Suppress non-essential output");
    println!("  -h, --help            Show this help");
    println!("  -v, --version         Show version");
    println!();
    println!("Defaults live in ~/.config/polypass/config.toml.");
}
