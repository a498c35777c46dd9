//! Reconciliation engine for dirsync.
//!
//! Converges a directory's current state towards a desired state with the
//! smallest set of add/update/delete operations.
//!
//! # Architecture
//!
//! Every entity kind goes through the same two steps:
//!
//! 1. **Diff**: [`Actions::required`] compares the current (old) and desired
//!    (new) collections by identity key and semantic equality. Pure, never
//!    fails.
//! 2. **Commit**: [`Actions::commit`] applies the actions to an
//!    [`UpdateService`], deletions first, then updates, then additions. A
//!    failing action is recorded in the returned [`ActionErrors`] and the
//!    batch carries on.
//!
//! [`Reconciliation`] runs both steps for users and groups together, and
//! [`MemoryDirectory`] is a ready-made in-memory [`UpdateService`].
//!
//! # Example
//!
//! ```
//! use dirsync_model::Group;
//! use dirsync_reconcile::{Actions, MemoryDirectory};
//!
//! let current = vec![Group::new("board@x.org", "Board")];
//! let desired = vec![
//!     Group::new("board@x.org", "Styrelsen"),
//!     Group::new("it@x.org", "IT"),
//! ];
//!
//! let actions = Actions::required(&current, &desired);
//! assert_eq!(actions.updates().len(), 1);
//! assert_eq!(actions.additions().len(), 1);
//!
//! let mut directory = MemoryDirectory::new(current, vec![]);
//! let errors = actions.commit(&mut directory);
//! assert_eq!(errors.amount(), 0);
//! ```

mod actions;
mod commit;
mod error;
mod memory;
mod progress;
mod reconciliation;
mod report;
mod service;

pub use actions::{Actions, Update};
pub use commit::Phase;
pub use error::{ServiceError, ServiceResult};
pub use memory::MemoryDirectory;
pub use progress::{NoProgress, ProgressEvent, ProgressReporter, TracingProgress};
pub use reconciliation::{ReconcileConfig, Reconciliation, ReconciliationReport};
pub use report::{ActionError, ActionErrors};
pub use service::{Reconcilable, UpdateService};
