use std::env;

use polypass::{cli, exits, tui};

fn main() {
    exits::reset_terminal();
    exits::install_handlers();
    // passwords pass through this process; keep it out of core dumps
    unsafe { libc::prctl(libc::PR_SET_DUMPABLE, 0) };
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    match args.len() {
        1 => tui::run(),
        _ => cli::run(args),
    }
}
