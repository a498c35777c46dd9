//! Entity model for dirsync.
//!
//! Defines the types every reconciliation pass works on:
//! - [`SyncEntity`] — identity key, semantic equality and the list of
//!   synchronized attributes for one entity kind
//! - [`Group`] and [`User`] — the two kinds held by a directory
//! - [`DirectorySnapshot`] — the full state of a directory, as loaded from or
//!   written to a JSON file
//!
//! Identity keys (group email, user cid) are always compared
//! case-insensitively. Equality is *semantic*: attributes the directory
//! manages itself (server ids) or never reads back (password hashes) are
//! excluded, so they never trigger an update.

mod entity;
mod error;
mod group;
mod snapshot;
mod user;

pub use entity::{SyncEntity, find_duplicate_keys, keys_match, normalize_key};
pub use error::{ModelError, ModelResult};
pub use group::Group;
pub use snapshot::DirectorySnapshot;
pub use user::User;
