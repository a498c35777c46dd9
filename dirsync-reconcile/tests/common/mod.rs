//! Shared test helpers for reconciliation tests.

#![allow(dead_code)]

use std::collections::HashSet;

use dirsync_model::{Group, User};
use dirsync_reconcile::{ServiceError, ServiceResult, Update, UpdateService};

/// A call received by [`RecordingService`], with the entity key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    AddGroup(String),
    UpdateGroup(String),
    DeleteGroup(String),
    AddUser(String),
    UpdateUser(String),
    DeleteUser(String),
}

/// Records every call in order and fails those whose key is listed.
#[derive(Debug, Default)]
pub struct RecordingService {
    pub calls: Vec<Call>,
    failing: HashSet<String>,
}

impl RecordingService {
    pub fn new() -> Self {
        Self::default()
    }

    /// A service rejecting any action on one of `keys`.
    pub fn failing_on(keys: &[&str]) -> Self {
        Self {
            calls: Vec::new(),
            failing: keys.iter().map(|k| k.to_lowercase()).collect(),
        }
    }

    fn outcome(&self, key: &str) -> ServiceResult {
        if self.failing.contains(&key.to_lowercase()) {
            Err(ServiceError::Rejected(format!("refused {key}")))
        } else {
            Ok(())
        }
    }
}

impl UpdateService for RecordingService {
    fn add_group(&mut self, group: &Group) -> ServiceResult {
        self.calls.push(Call::AddGroup(group.email.clone()));
        self.outcome(&group.email)
    }

    fn update_group(&mut self, update: &Update<Group>) -> ServiceResult {
        self.calls.push(Call::UpdateGroup(update.after.email.clone()));
        self.outcome(&update.after.email)
    }

    fn delete_group(&mut self, group: &Group) -> ServiceResult {
        self.calls.push(Call::DeleteGroup(group.email.clone()));
        self.outcome(&group.email)
    }

    fn add_user(&mut self, user: &User) -> ServiceResult {
        self.calls.push(Call::AddUser(user.cid.clone()));
        self.outcome(&user.cid)
    }

    fn update_user(&mut self, update: &Update<User>) -> ServiceResult {
        self.calls.push(Call::UpdateUser(update.after.cid.clone()));
        self.outcome(&update.after.cid)
    }

    fn delete_user(&mut self, user: &User) -> ServiceResult {
        self.calls.push(Call::DeleteUser(user.cid.clone()));
        self.outcome(&user.cid)
    }
}

pub fn group(email: &str, name: &str) -> Group {
    Group::new(email, name)
}

pub fn user(cid: &str, nick: &str) -> User {
    User::new(cid, "First", "Last", nick)
}

pub fn emails(groups: &[Group]) -> Vec<&str> {
    groups.iter().map(|g| g.email.as_str()).collect()
}
