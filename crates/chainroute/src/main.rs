//! Chainroute - protocol command registry CLI.
//!
//! All output is JSONL: each line on stdout is a complete JSON object.
//! Diagnostics go to stderr via `tracing`.

use std::process::ExitCode;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

fn main() -> ExitCode {
    init_tracing();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let code = err
                .downcast_ref::<chainroute_core::Error>()
                .map_or(2, chainroute_core::Error::exit_code);
            eprintln!("error: {err:#}");
            ExitCode::from(u8::try_from(code).unwrap_or(2))
        }
    }
}

/// Initialize stderr logging, honoring `RUST_LOG` when set.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<()> {
    let matches = cli::build().get_matches();

    match matches.subcommand() {
        Some(("commands", sub)) => commands::lookup::run(sub),
        Some(("resolve", sub)) => commands::resolve::run(sub),
        Some(("protocols", _)) => commands::protocols::run(),
        _ => {
            // arg_required_else_help keeps this branch unreachable in practice
            cli::build().print_help()?;
            Ok(())
        }
    }
}
