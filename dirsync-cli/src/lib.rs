//! Command-line driver for dirsync.
//!
//! Loads the current and desired directory snapshots from JSON files,
//! prints the plan, and commits it to a file-backed [`MemoryDirectory`].

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use dirsync_model::DirectorySnapshot;
use dirsync_reconcile::{
    MemoryDirectory, ProgressEvent, ProgressReporter, ReconcileConfig, Reconciliation,
    ReconciliationReport,
};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "dirsync")]
#[command(about = "Reconcile directory groups and users against a desired state")]
pub struct Cli {
    /// Enable verbose debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the actions needed to reach the desired state
    Plan(SnapshotArgs),
    /// Compute the actions and commit them to the current snapshot file
    Apply(ApplyArgs),
}

/// Entity kinds that can be reconciled on their own.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Only {
    Users,
    Groups,
}

#[derive(Args, Debug, Clone)]
pub struct SnapshotArgs {
    /// Snapshot of the directory as it is now
    #[arg(short, long)]
    pub current: PathBuf,

    /// Snapshot of the directory as it should be
    #[arg(short, long)]
    pub desired: PathBuf,

    /// Reconcile only one entity kind
    #[arg(long, value_enum)]
    pub only: Option<Only>,

    /// Let the first occurrence of a duplicated key win instead of failing
    #[arg(long)]
    pub allow_duplicates: bool,
}

impl SnapshotArgs {
    pub fn config(&self) -> ReconcileConfig {
        ReconcileConfig {
            include_groups: self.only != Some(Only::Users),
            include_users: self.only != Some(Only::Groups),
            reject_duplicate_keys: !self.allow_duplicates,
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct ApplyArgs {
    #[command(flatten)]
    pub snapshots: SnapshotArgs,

    /// Where to write the resulting directory (defaults to --current)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print the plan without committing it
    #[arg(long)]
    pub dry_run: bool,

    /// Commit without asking for confirmation
    #[arg(short, long)]
    pub yes: bool,
}

/// What `apply` ended up doing.
#[derive(Debug)]
pub enum ApplyOutcome {
    /// The directory already matched the desired state.
    UpToDate,
    /// `--dry-run`: the plan of `planned` actions was only printed.
    DryRun { planned: usize },
    /// The operator answered no at the confirmation prompt.
    Declined,
    /// The plan was committed; `report` lists the failed actions.
    Committed {
        planned: usize,
        report: ReconciliationReport,
    },
}

/// Loads both snapshots and computes the plan between them.
pub fn load_plan(args: &SnapshotArgs) -> Result<(DirectorySnapshot, Reconciliation)> {
    let current = DirectorySnapshot::load(&args.current)
        .with_context(|| format!("Failed to load current snapshot {}", args.current.display()))?;
    let desired = DirectorySnapshot::load(&args.desired)
        .with_context(|| format!("Failed to load desired snapshot {}", args.desired.display()))?;
    info!(
        current = current.len(),
        desired = desired.len(),
        "snapshots loaded"
    );

    let plan = Reconciliation::plan(&current, &desired, &args.config())
        .context("Failed to compute reconciliation plan")?;
    Ok((current, plan))
}

/// `dirsync plan`: prints the plan and returns its size.
pub fn run_plan(args: &SnapshotArgs, out: &mut impl Write) -> Result<usize> {
    let (_, plan) = load_plan(args)?;
    write_plan(&plan, out)?;
    Ok(plan.amount())
}

/// `dirsync apply`: prints the plan, asks for confirmation on `input` unless
/// `--yes`, commits, and writes the resulting snapshot.
///
/// An explicit `--output` is written even when nothing needs to change.
pub fn run_apply(
    args: &ApplyArgs,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<ApplyOutcome> {
    let (current, plan) = load_plan(&args.snapshots)?;
    write_plan(&plan, out)?;

    let planned = plan.amount();
    if planned == 0 {
        if let Some(output) = &args.output {
            save_snapshot(&current, output)?;
        }
        return Ok(ApplyOutcome::UpToDate);
    }
    if args.dry_run {
        return Ok(ApplyOutcome::DryRun { planned });
    }
    if !args.yes && !confirm(planned, input, out)? {
        return Ok(ApplyOutcome::Declined);
    }

    let mut directory = MemoryDirectory::from_snapshot(current);
    let report = plan.commit_with_progress(&mut directory, &mut ConsoleProgress::new(&mut *out));

    // Failures are printed before the save.
    if report.is_empty() {
        writeln!(out, "All {planned} actions performed")?;
    } else {
        writeln!(out, "{} of {planned} actions failed:", report.amount())?;
        write!(out, "{report}")?;
    }

    let output = args.output.as_ref().unwrap_or(&args.snapshots.current);
    save_snapshot(&directory.into_snapshot(), output)?;
    Ok(ApplyOutcome::Committed { planned, report })
}

fn save_snapshot(snapshot: &DirectorySnapshot, path: &Path) -> Result<()> {
    snapshot
        .save(path)
        .with_context(|| format!("Failed to write snapshot {}", path.display()))?;
    info!(path = %path.display(), "snapshot written");
    Ok(())
}

fn write_plan(plan: &Reconciliation, out: &mut impl Write) -> Result<()> {
    if plan.is_empty() {
        writeln!(out, "Directory is up to date")?;
    } else {
        write!(out, "{plan}")?;
        writeln!(
            out,
            "{} actions ({} users, {} groups)",
            plan.amount(),
            plan.users.amount(),
            plan.groups.amount()
        )?;
    }
    Ok(())
}

fn confirm(planned: usize, input: &mut impl BufRead, out: &mut impl Write) -> Result<bool> {
    write!(out, "Perform {planned} actions? [y/N] ")?;
    out.flush()?;
    let mut answer = String::new();
    input
        .read_line(&mut answer)
        .context("Failed to read confirmation")?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}

/// Prints commit progress as plain lines.
pub struct ConsoleProgress<W: Write> {
    out: W,
}

impl<W: Write> ConsoleProgress<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> ProgressReporter for ConsoleProgress<W> {
    fn report(&mut self, event: &ProgressEvent) {
        // Progress output is best effort; a closed pipe must not abort a commit.
        let _ = match *event {
            ProgressEvent::PhaseStarted { kind, phase, total } => {
                writeln!(self.out, "({kind}s) performing {total} {phase}s")
            }
            ProgressEvent::ActionCompleted {
                attempted,
                total,
                failed,
                ..
            } => writeln!(self.out, "  {attempted}/{total} done, {failed} failed"),
        };
    }
}
