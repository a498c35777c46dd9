//! A full pass over users and groups.

use std::fmt;

use dirsync_model::{DirectorySnapshot, Group, ModelResult, User};
use tracing::info;

use crate::actions::Actions;
use crate::progress::{ProgressReporter, TracingProgress};
use crate::report::ActionErrors;
use crate::service::UpdateService;

/// Configuration for a reconciliation pass.
#[derive(Debug, Clone)]
pub struct ReconcileConfig {
    /// Diff and commit groups.
    pub include_groups: bool,
    /// Diff and commit users.
    pub include_users: bool,
    /// Refuse snapshots with a duplicated identity key instead of letting
    /// the first occurrence win.
    pub reject_duplicate_keys: bool,
}

impl Default for ReconcileConfig {
    fn default() -> Self {
        Self {
            include_groups: true,
            include_users: true,
            reject_duplicate_keys: true,
        }
    }
}

/// The actions needed to bring a whole directory to its desired state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reconciliation {
    pub users: Actions<User>,
    pub groups: Actions<Group>,
}

impl Reconciliation {
    /// Computes the user and group actions turning `current` into `desired`.
    ///
    /// Kinds disabled in `config` get an empty action set.
    pub fn plan(
        current: &DirectorySnapshot,
        desired: &DirectorySnapshot,
        config: &ReconcileConfig,
    ) -> ModelResult<Self> {
        if config.reject_duplicate_keys {
            current.validate()?;
            desired.validate()?;
        }

        let users = if config.include_users {
            Actions::required(&current.users, &desired.users)
        } else {
            Actions::default()
        };
        let groups = if config.include_groups {
            Actions::required(&current.groups, &desired.groups)
        } else {
            Actions::default()
        };

        info!(
            users = users.amount(),
            groups = groups.amount(),
            "reconciliation planned"
        );
        Ok(Self { users, groups })
    }

    pub fn amount(&self) -> usize {
        self.users.amount() + self.groups.amount()
    }

    pub fn is_empty(&self) -> bool {
        self.amount() == 0
    }

    /// Commits users, then groups, logging progress through `tracing`.
    pub fn commit<S>(self, service: &mut S) -> ReconciliationReport
    where
        S: UpdateService + ?Sized,
    {
        self.commit_with_progress(service, &mut TracingProgress)
    }

    /// Commits users, then groups, so member accounts exist before the
    /// groups listing them are created.
    pub fn commit_with_progress<S, P>(self, service: &mut S, progress: &mut P) -> ReconciliationReport
    where
        S: UpdateService + ?Sized,
        P: ProgressReporter + ?Sized,
    {
        let users = self.users.commit_with_progress(service, progress);
        let groups = self.groups.commit_with_progress(service, progress);
        ReconciliationReport { users, groups }
    }
}

impl fmt::Display for Reconciliation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.users, self.groups)
    }
}

/// Failures of a committed [`Reconciliation`].
#[derive(Debug, Default)]
pub struct ReconciliationReport {
    pub users: ActionErrors<User>,
    pub groups: ActionErrors<Group>,
}

impl ReconciliationReport {
    pub fn amount(&self) -> usize {
        self.users.amount() + self.groups.amount()
    }

    pub fn is_empty(&self) -> bool {
        self.amount() == 0
    }
}

impl fmt::Display for ReconciliationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.users, self.groups)
    }
}
