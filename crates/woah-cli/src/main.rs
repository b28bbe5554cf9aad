//! woah CLI binary.
//!
//! This is the entry point for the `woah` command-line tool. It initializes
//! logging via `tracing`, parses arguments with `clap`, and dispatches to
//! the appropriate command handler. Logs go to stderr so stdout carries
//! only command output.

mod cli;
mod commands;

use woah_util::errors::WoahResult;

fn main() -> WoahResult<()> {
    let args = cli::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    commands::dispatch(args)
}
