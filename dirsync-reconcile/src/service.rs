//! The directory capability the executor writes through.

use dirsync_model::{Group, SyncEntity, User};

use crate::actions::Update;
use crate::error::ServiceResult;

/// A directory that can create, update and remove groups and users.
///
/// Each call is synchronous and affects exactly one entity. Returning `Err`
/// marks that single action as failed; it never stops a commit.
pub trait UpdateService {
    fn add_group(&mut self, group: &Group) -> ServiceResult;
    fn update_group(&mut self, update: &Update<Group>) -> ServiceResult;
    fn delete_group(&mut self, group: &Group) -> ServiceResult;

    fn add_user(&mut self, user: &User) -> ServiceResult;
    fn update_user(&mut self, update: &Update<User>) -> ServiceResult;
    fn delete_user(&mut self, user: &User) -> ServiceResult;
}

/// Routes an entity kind to its triad of [`UpdateService`] operations, so the
/// executor can be written once for every kind.
pub trait Reconcilable: SyncEntity {
    fn add_via<S: UpdateService + ?Sized>(service: &mut S, entity: &Self) -> ServiceResult;
    fn update_via<S: UpdateService + ?Sized>(service: &mut S, update: &Update<Self>)
    -> ServiceResult;
    fn delete_via<S: UpdateService + ?Sized>(service: &mut S, entity: &Self) -> ServiceResult;
}

impl Reconcilable for Group {
    fn add_via<S: UpdateService + ?Sized>(service: &mut S, entity: &Self) -> ServiceResult {
        service.add_group(entity)
    }

    fn update_via<S: UpdateService + ?Sized>(
        service: &mut S,
        update: &Update<Self>,
    ) -> ServiceResult {
        service.update_group(update)
    }

    fn delete_via<S: UpdateService + ?Sized>(service: &mut S, entity: &Self) -> ServiceResult {
        service.delete_group(entity)
    }
}

impl Reconcilable for User {
    fn add_via<S: UpdateService + ?Sized>(service: &mut S, entity: &Self) -> ServiceResult {
        service.add_user(entity)
    }

    fn update_via<S: UpdateService + ?Sized>(
        service: &mut S,
        update: &Update<Self>,
    ) -> ServiceResult {
        service.update_user(update)
    }

    fn delete_via<S: UpdateService + ?Sized>(service: &mut S, entity: &Self) -> ServiceResult {
        service.delete_user(entity)
    }
}
