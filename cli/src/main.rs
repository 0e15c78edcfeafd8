//! Promptsmith CLI binary.
//!
//! Subcommands: `generate`, `optimize`, `analyze`, `recipe` (match/list/show), `models`
//! (list/rules/compare).

use std::process::ExitCode;

use clap::Parser;
use cli::{Cli, APP_NAME};

fn main() -> ExitCode {
    config::load_and_apply(APP_NAME, None::<&std::path::Path>).ok();
    let args = Cli::parse();

    let settings = config::load_settings(APP_NAME);
    let _log_guard = match &settings {
        Ok(s) => config::init_tracing(&s.log).unwrap_or_else(|e| {
            eprintln!("promptsmith: {e}");
            None
        }),
        Err(_) => None,
    };

    cli::run(&args, settings)
}
