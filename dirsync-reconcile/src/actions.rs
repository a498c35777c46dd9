//! Action sets and the diff that produces them.

use std::collections::{HashMap, HashSet};
use std::fmt;

use dirsync_model::{SyncEntity, normalize_key};
use tracing::debug;

/// How an entity looks in the directory now and how it should look after
/// the update. Lets a service send only the attributes that changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Update<E> {
    pub before: E,
    pub after: E,
}

impl<E: SyncEntity> Update<E> {
    /// Identity key of the updated entity, in its desired spelling.
    pub fn key(&self) -> &str {
        self.after.identity_key()
    }

    /// Synchronized attributes that differ between `before` and `after`.
    pub fn changed_fields(&self) -> Vec<&'static str> {
        self.before.changed_fields(&self.after)
    }
}

/// The additions, updates and deletions needed to turn one collection of
/// entities into another.
///
/// Built once per reconciliation pass and consumed by
/// [`commit`](Actions::commit).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actions<E> {
    additions: Vec<E>,
    updates: Vec<Update<E>>,
    deletions: Vec<E>,
}

impl<E> Default for Actions<E> {
    fn default() -> Self {
        Self {
            additions: Vec::new(),
            updates: Vec::new(),
            deletions: Vec::new(),
        }
    }
}

impl<E: SyncEntity> Actions<E> {
    /// Creates an action set from explicit buckets.
    pub fn new(additions: Vec<E>, updates: Vec<Update<E>>, deletions: Vec<E>) -> Self {
        Self {
            additions,
            updates,
            deletions,
        }
    }

    /// Determines the actions required to make `old` look like `new`.
    ///
    /// Entities are matched by case-insensitive identity key. Additions and
    /// updates follow the order of `new`, deletions the order of `old`. When a
    /// key occurs more than once in `old`, the first occurrence is the match.
    pub fn required(old: &[E], new: &[E]) -> Self {
        let mut old_by_key: HashMap<String, &E> = HashMap::with_capacity(old.len());
        for entity in old {
            old_by_key
                .entry(normalize_key(entity.identity_key()))
                .or_insert(entity);
        }
        let new_keys: HashSet<String> = new
            .iter()
            .map(|e| normalize_key(e.identity_key()))
            .collect();

        let mut actions = Self::default();

        for desired in new {
            match old_by_key.get(&normalize_key(desired.identity_key())) {
                None => {
                    debug!(kind = E::KIND, key = desired.identity_key(), "addition required");
                    actions.additions.push(desired.clone());
                }
                Some(current) if !current.semantic_eq(desired) => {
                    debug!(
                        kind = E::KIND,
                        key = desired.identity_key(),
                        fields = ?current.changed_fields(desired),
                        "update required"
                    );
                    actions.updates.push(Update {
                        before: (*current).clone(),
                        after: desired.clone(),
                    });
                }
                Some(_) => {}
            }
        }

        for current in old {
            if !new_keys.contains(&normalize_key(current.identity_key())) {
                debug!(kind = E::KIND, key = current.identity_key(), "deletion required");
                actions.deletions.push(current.clone());
            }
        }

        actions
    }

    /// Entities to create.
    pub fn additions(&self) -> &[E] {
        &self.additions
    }

    /// Before/after pairs to apply.
    pub fn updates(&self) -> &[Update<E>] {
        &self.updates
    }

    /// Entities to remove.
    pub fn deletions(&self) -> &[E] {
        &self.deletions
    }

    /// Total number of actions.
    pub fn amount(&self) -> usize {
        self.additions.len() + self.updates.len() + self.deletions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.amount() == 0
    }

    pub(crate) fn into_parts(self) -> (Vec<E>, Vec<Update<E>>, Vec<E>) {
        (self.additions, self.updates, self.deletions)
    }
}

/// One line per action, in commit order: `-` deletion, `~` update (with the
/// changed attributes), `+` addition.
impl<E: SyncEntity> fmt::Display for Actions<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entity in &self.deletions {
            writeln!(f, "- {} \"{}\"", E::KIND, entity.identity_key())?;
        }
        for update in &self.updates {
            writeln!(
                f,
                "~ {} \"{}\" ({})",
                E::KIND,
                update.key(),
                update.changed_fields().join(", ")
            )?;
        }
        for entity in &self.additions {
            writeln!(f, "+ {} \"{}\"", E::KIND, entity.identity_key())?;
        }
        Ok(())
    }
}
