//! Applies an action set to a directory.
//!
//! Phases run in a fixed order: deletions free identity keys (reusable
//! addresses) before updates, and additions run last so a new entity never
//! collides with one that is about to be removed. Within a phase actions run
//! one at a time in stored order. A failed action is recorded and skipped.

use std::fmt;

use tracing::{debug, info, warn};

use crate::actions::{Actions, Update};
use crate::error::ServiceResult;
use crate::progress::{ProgressEvent, ProgressReporter, TracingProgress};
use crate::report::{ActionError, ActionErrors};
use crate::service::{Reconcilable, UpdateService};

/// One of the three commit phases, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Phase {
    Deletion,
    Update,
    Addition,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Phase::Deletion => "deletion",
            Phase::Update => "update",
            Phase::Addition => "addition",
        })
    }
}

impl<E: Reconcilable> Actions<E> {
    /// Commits the actions to `service`, reporting progress through
    /// [`TracingProgress`].
    ///
    /// Returns the actions that failed; an empty result means every action
    /// was applied.
    pub fn commit<S>(self, service: &mut S) -> ActionErrors<E>
    where
        S: UpdateService + ?Sized,
    {
        self.commit_with_progress(service, &mut TracingProgress)
    }

    /// Commits the actions to `service`, sending a notification to
    /// `progress` when each phase starts and after each action.
    pub fn commit_with_progress<S, P>(self, service: &mut S, progress: &mut P) -> ActionErrors<E>
    where
        S: UpdateService + ?Sized,
        P: ProgressReporter + ?Sized,
    {
        let (additions, updates, deletions) = self.into_parts();
        let total = additions.len() + updates.len() + deletions.len();
        if total > 0 {
            info!(kind = E::KIND, total, "committing actions");
        }

        let deletions = run_phase(
            E::KIND,
            Phase::Deletion,
            deletions,
            |entity| E::delete_via(service, entity),
            E::identity_key,
            progress,
        );
        let updates = run_phase(
            E::KIND,
            Phase::Update,
            updates,
            |update| E::update_via(service, update),
            Update::key,
            progress,
        );
        let additions = run_phase(
            E::KIND,
            Phase::Addition,
            additions,
            |entity| E::add_via(service, entity),
            E::identity_key,
            progress,
        );

        let errors = ActionErrors {
            additions,
            updates,
            deletions,
        };
        if !errors.is_empty() {
            warn!(
                kind = E::KIND,
                failed = errors.amount(),
                total,
                "some actions could not be performed"
            );
        }
        errors
    }
}

fn run_phase<A, F, K, P>(
    kind: &'static str,
    phase: Phase,
    actions: Vec<A>,
    mut apply: F,
    key: K,
    progress: &mut P,
) -> Vec<ActionError<A>>
where
    F: FnMut(&A) -> ServiceResult,
    K: Fn(&A) -> &str,
    P: ProgressReporter + ?Sized,
{
    let mut failures = Vec::new();
    if actions.is_empty() {
        return failures;
    }

    let total = actions.len();
    progress.report(&ProgressEvent::PhaseStarted { kind, phase, total });

    for (index, action) in actions.into_iter().enumerate() {
        match apply(&action) {
            Ok(()) => debug!(kind, %phase, key = key(&action), "action applied"),
            Err(error) => {
                warn!(kind, %phase, key = key(&action), %error, "action failed");
                failures.push(ActionError { action, error });
            }
        }
        progress.report(&ProgressEvent::ActionCompleted {
            kind,
            phase,
            attempted: index + 1,
            total,
            failed: failures.len(),
        });
    }

    failures
}
