//! Progress notifications emitted while a commit runs.

use tracing::info;

use crate::commit::Phase;

/// A commit progress notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressEvent {
    /// A non-empty phase is about to run `total` actions.
    PhaseStarted {
        kind: &'static str,
        phase: Phase,
        total: usize,
    },
    /// One more action of the phase finished, successfully or not.
    ActionCompleted {
        kind: &'static str,
        phase: Phase,
        attempted: usize,
        total: usize,
        failed: usize,
    },
}

/// Receives [`ProgressEvent`]s from the executor.
///
/// Any `FnMut(&ProgressEvent)` closure is a reporter.
pub trait ProgressReporter {
    fn report(&mut self, event: &ProgressEvent);
}

impl<F: FnMut(&ProgressEvent)> ProgressReporter for F {
    fn report(&mut self, event: &ProgressEvent) {
        self(event);
    }
}

/// Discards every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressReporter for NoProgress {
    fn report(&mut self, _event: &ProgressEvent) {}
}

/// Forwards notifications as structured `tracing` events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingProgress;

impl ProgressReporter for TracingProgress {
    fn report(&mut self, event: &ProgressEvent) {
        match *event {
            ProgressEvent::PhaseStarted { kind, phase, total } => {
                info!(kind, %phase, total, "performing {phase}s");
            }
            ProgressEvent::ActionCompleted {
                kind,
                phase,
                attempted,
                total,
                failed,
            } => {
                info!(kind, %phase, attempted, total, failed, "progress");
            }
        }
    }
}
