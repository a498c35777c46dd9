//! dirsync: reconcile directory groups and users.
//!
//! Usage:
//!   dirsync plan  --current directory.json --desired desired.json
//!   dirsync apply --current directory.json --desired desired.json [--yes]
//!
//! `apply` exits with a non-zero status when any action failed.

use std::io;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use dirsync_cli::{ApplyOutcome, Cli, Command, run_apply, run_plan};
use tracing::{Level, warn};
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let log_level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(io::stderr)
        .compact()
        .init();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Plan(args) => {
            run_plan(&args, &mut out)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Apply(args) => {
            let stdin = io::stdin();
            let outcome = run_apply(&args, &mut stdin.lock(), &mut out)?;
            match outcome {
                ApplyOutcome::Committed { report, .. } if !report.is_empty() => {
                    warn!(failed = report.amount(), "reconciliation incomplete");
                    Ok(ExitCode::FAILURE)
                }
                _ => Ok(ExitCode::SUCCESS),
            }
        }
    }
}
