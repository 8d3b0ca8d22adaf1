//! merge-log: record a merged pull request in a Notion database

mod cli;

use anstream::eprintln;
use clap::Parser;
use cli::Args;
use cli::style::Stylize;
use std::process::ExitCode;

/// Env var holding a `tracing` filter directive
const LOG_ENV: &str = "MERGE_LOG_LOG";

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = init_tracing(args.quiet, args.verbose) {
        eprintln!("{} {e:#}", "warning:".failure());
    }

    match cli::run_notify(&args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e:#}", "error:".failure());
            ExitCode::FAILURE
        }
    }
}
