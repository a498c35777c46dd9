use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::entity::{SyncEntity, find_duplicate_keys};
use crate::error::{ModelError, ModelResult};
use crate::{Group, User};

/// Full state of a directory: every group and every user it holds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectorySnapshot {
    #[serde(default)]
    pub groups: Vec<Group>,
    #[serde(default)]
    pub users: Vec<User>,
}

impl DirectorySnapshot {
    /// Creates a snapshot from its two collections.
    pub fn new(groups: Vec<Group>, users: Vec<User>) -> Self {
        Self { groups, users }
    }

    /// Parses a snapshot from JSON text.
    pub fn from_json(json: &str) -> ModelResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the snapshot as pretty-printed JSON.
    pub fn to_json(&self) -> ModelResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reads a snapshot from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> ModelResult<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Writes the snapshot to a JSON file, replacing its contents.
    pub fn save(&self, path: impl AsRef<Path>) -> ModelResult<()> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Rejects snapshots where an identity key occurs twice within the
    /// groups or within the users.
    pub fn validate(&self) -> ModelResult<()> {
        ensure_unique(&self.groups)?;
        ensure_unique(&self.users)
    }

    /// Total number of entities held.
    pub fn len(&self) -> usize {
        self.groups.len() + self.users.len()
    }

    /// Whether the snapshot holds no entities at all.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty() && self.users.is_empty()
    }
}

fn ensure_unique<E: SyncEntity>(entities: &[E]) -> ModelResult<()> {
    match find_duplicate_keys(entities).into_iter().next() {
        Some(key) => Err(ModelError::DuplicateIdentity { kind: E::KIND, key }),
        None => Ok(()),
    }
}
