//! Failures collected by a commit.

use std::fmt;

use dirsync_model::SyncEntity;

use crate::actions::Update;
use crate::error::ServiceError;

/// An attempted action together with the error it produced.
#[derive(Debug)]
pub struct ActionError<A> {
    pub action: A,
    pub error: ServiceError,
}

/// The actions of one commit that could not be performed.
///
/// Mirrors the three buckets of [`Actions`](crate::Actions); each failed
/// action appears once, in the order it was attempted.
#[derive(Debug)]
pub struct ActionErrors<E> {
    pub(crate) additions: Vec<ActionError<E>>,
    pub(crate) updates: Vec<ActionError<Update<E>>>,
    pub(crate) deletions: Vec<ActionError<E>>,
}

impl<E> Default for ActionErrors<E> {
    fn default() -> Self {
        Self {
            additions: Vec::new(),
            updates: Vec::new(),
            deletions: Vec::new(),
        }
    }
}

impl<E> ActionErrors<E> {
    pub fn additions(&self) -> &[ActionError<E>] {
        &self.additions
    }

    pub fn updates(&self) -> &[ActionError<Update<E>>] {
        &self.updates
    }

    pub fn deletions(&self) -> &[ActionError<E>] {
        &self.deletions
    }

    /// Total number of failed actions.
    pub fn amount(&self) -> usize {
        self.additions.len() + self.updates.len() + self.deletions.len()
    }

    /// True when every action succeeded.
    pub fn is_empty(&self) -> bool {
        self.amount() == 0
    }
}

impl<E: SyncEntity> fmt::Display for ActionErrors<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for deletion in &self.deletions {
            writeln!(
                f,
                "Deletion of {} \"{}\" failed with error {}",
                E::KIND,
                deletion.action.identity_key(),
                deletion.error
            )?;
        }
        for update in &self.updates {
            writeln!(
                f,
                "Update of {} \"{}\" failed with error {}",
                E::KIND,
                update.action.key(),
                update.error
            )?;
        }
        for addition in &self.additions {
            writeln!(
                f,
                "Addition of {} \"{}\" failed with error {}",
                E::KIND,
                addition.action.identity_key(),
                addition.error
            )?;
        }
        Ok(())
    }
}
