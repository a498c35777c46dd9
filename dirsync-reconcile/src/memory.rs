//! An in-memory directory.

use dirsync_model::{DirectorySnapshot, Group, SyncEntity, User, keys_match};
use tracing::debug;

use crate::actions::Update;
use crate::error::{ServiceError, ServiceResult};
use crate::service::UpdateService;

/// A directory held in memory, loaded from and dumped to a
/// [`DirectorySnapshot`].
///
/// Updates write exactly the attributes [`SyncEntity::assign_synchronized`]
/// covers, so a committed plan re-diffs as empty against its desired state.
#[derive(Debug, Clone, Default)]
pub struct MemoryDirectory {
    groups: Vec<Group>,
    users: Vec<User>,
}

impl MemoryDirectory {
    pub fn new(groups: Vec<Group>, users: Vec<User>) -> Self {
        Self { groups, users }
    }

    pub fn from_snapshot(snapshot: DirectorySnapshot) -> Self {
        Self::new(snapshot.groups, snapshot.users)
    }

    /// Copies the current state out as a snapshot.
    pub fn snapshot(&self) -> DirectorySnapshot {
        DirectorySnapshot::new(self.groups.clone(), self.users.clone())
    }

    pub fn into_snapshot(self) -> DirectorySnapshot {
        DirectorySnapshot::new(self.groups, self.users)
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Looks up a group by email, ignoring case.
    pub fn group(&self, email: &str) -> Option<&Group> {
        self.groups.iter().find(|g| keys_match(&g.email, email))
    }

    /// Looks up a user by cid, ignoring case.
    pub fn user(&self, cid: &str) -> Option<&User> {
        self.users.iter().find(|u| keys_match(&u.cid, cid))
    }
}

impl UpdateService for MemoryDirectory {
    fn add_group(&mut self, group: &Group) -> ServiceResult {
        add(&mut self.groups, group)
    }

    fn update_group(&mut self, update: &Update<Group>) -> ServiceResult {
        apply_update(&mut self.groups, update)
    }

    fn delete_group(&mut self, group: &Group) -> ServiceResult {
        delete(&mut self.groups, group)
    }

    fn add_user(&mut self, user: &User) -> ServiceResult {
        add(&mut self.users, user)
    }

    fn update_user(&mut self, update: &Update<User>) -> ServiceResult {
        apply_update(&mut self.users, update)
    }

    fn delete_user(&mut self, user: &User) -> ServiceResult {
        delete(&mut self.users, user)
    }
}

fn position<E: SyncEntity>(entities: &[E], key: &str) -> Option<usize> {
    entities
        .iter()
        .position(|e| keys_match(e.identity_key(), key))
}

fn add<E: SyncEntity>(entities: &mut Vec<E>, entity: &E) -> ServiceResult {
    let key = entity.identity_key();
    if position(entities, key).is_some() {
        return Err(ServiceError::AlreadyExists {
            kind: E::KIND,
            key: key.to_string(),
        });
    }
    entities.push(entity.clone());
    debug!(kind = E::KIND, key, "added");
    Ok(())
}

fn apply_update<E: SyncEntity>(entities: &mut [E], update: &Update<E>) -> ServiceResult {
    let key = update.before.identity_key();
    let index = position(entities, key).ok_or_else(|| ServiceError::NotFound {
        kind: E::KIND,
        key: key.to_string(),
    })?;
    entities[index].assign_synchronized(&update.after);
    debug!(kind = E::KIND, key, fields = ?update.changed_fields(), "updated");
    Ok(())
}

fn delete<E: SyncEntity>(entities: &mut Vec<E>, entity: &E) -> ServiceResult {
    let key = entity.identity_key();
    let index = position(entities, key).ok_or_else(|| ServiceError::NotFound {
        kind: E::KIND,
        key: key.to_string(),
    })?;
    entities.remove(index);
    debug!(kind = E::KIND, key, "deleted");
    Ok(())
}
