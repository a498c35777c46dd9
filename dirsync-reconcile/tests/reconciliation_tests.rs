mod common;

use common::{Call, RecordingService, group, user};
use dirsync_model::{DirectorySnapshot, ModelError};
use dirsync_reconcile::{
    MemoryDirectory, NoProgress, ReconcileConfig, Reconciliation, UpdateService,
};
use pretty_assertions::assert_eq;

fn current() -> DirectorySnapshot {
    DirectorySnapshot::new(
        vec![group("board@x", "Board"), group("old@x", "Old")],
        vec![user("alice", "Ali"), user("bob", "Bob")],
    )
}

fn desired() -> DirectorySnapshot {
    DirectorySnapshot::new(
        vec![
            group("board@x", "Board").with_members(["alice", "carol"]),
            group("new@x", "New"),
        ],
        vec![user("alice", "Ali"), user("carol", "Caro")],
    )
}

#[test]
fn default_config_includes_everything() {
    let config = ReconcileConfig::default();
    assert!(config.include_groups);
    assert!(config.include_users);
    assert!(config.reject_duplicate_keys);
}

#[test]
fn plan_covers_both_kinds() {
    let plan = Reconciliation::plan(&current(), &desired(), &ReconcileConfig::default()).unwrap();

    assert_eq!(plan.users.amount(), 2);
    assert_eq!(plan.groups.amount(), 3);
    assert_eq!(plan.amount(), 5);
    assert!(!plan.is_empty());
}

#[test]
fn disabled_kinds_get_no_actions() {
    let config = ReconcileConfig {
        include_users: false,
        ..Default::default()
    };
    let plan = Reconciliation::plan(&current(), &desired(), &config).unwrap();

    assert!(plan.users.is_empty());
    assert_eq!(plan.groups.amount(), 3);
}

#[test]
fn duplicate_keys_are_rejected_by_default() {
    let mut desired = desired();
    desired.users.push(user("ALICE", "again"));

    let result = Reconciliation::plan(&current(), &desired, &ReconcileConfig::default());
    assert!(matches!(
        result,
        Err(ModelError::DuplicateIdentity { kind: "user", .. })
    ));
}

#[test]
fn duplicate_keys_can_be_allowed() {
    let mut desired = desired();
    desired.users.push(user("ALICE", "again"));
    let config = ReconcileConfig {
        reject_duplicate_keys: false,
        ..Default::default()
    };

    let plan = Reconciliation::plan(&current(), &desired, &config).unwrap();
    // The second "alice" differs from the first match in old, so it updates.
    assert_eq!(plan.users.updates().len(), 1);
}

#[test]
fn commit_runs_users_before_groups() {
    let plan = Reconciliation::plan(&current(), &desired(), &ReconcileConfig::default()).unwrap();
    let mut service = RecordingService::new();
    let report = plan.commit_with_progress(&mut service, &mut NoProgress);

    assert!(report.is_empty());
    assert_eq!(
        service.calls,
        vec![
            Call::DeleteUser("bob".into()),
            Call::AddUser("carol".into()),
            Call::DeleteGroup("old@x".into()),
            Call::UpdateGroup("board@x".into()),
            Call::AddGroup("new@x".into()),
        ]
    );
}

#[test]
fn report_aggregates_both_kinds() {
    let plan = Reconciliation::plan(&current(), &desired(), &ReconcileConfig::default()).unwrap();
    let mut service = RecordingService::failing_on(&["carol", "new@x"]);
    let report = plan.commit(&mut service);

    assert_eq!(report.amount(), 2);
    assert_eq!(
        report.to_string(),
        "Addition of user \"carol\" failed with error rejected by directory: refused carol\n\
         Addition of group \"new@x\" failed with error rejected by directory: refused new@x\n"
    );
}

#[test]
fn rerun_after_partial_failure_only_retries_outstanding_actions() {
    let mut directory = MemoryDirectory::from_snapshot(current());
    // A "new@x" created behind the plan's back makes the addition fail.
    directory.add_group(&group("new@x", "Squatter")).unwrap();

    let plan = Reconciliation::plan(&current(), &desired(), &ReconcileConfig::default()).unwrap();
    let report = plan.commit(&mut directory);
    assert_eq!(report.amount(), 1);
    assert_eq!(report.groups.additions()[0].action.email, "new@x");

    let replan =
        Reconciliation::plan(&directory.snapshot(), &desired(), &ReconcileConfig::default())
            .unwrap();
    assert_eq!(replan.amount(), 1);
    assert_eq!(replan.groups.updates()[0].key(), "new@x");
}

#[test]
fn plan_display_renders_users_then_groups() {
    let plan = Reconciliation::plan(&current(), &desired(), &ReconcileConfig::default()).unwrap();
    assert_eq!(
        plan.to_string(),
        "- user \"bob\"\n\
         + user \"carol\"\n\
         - group \"old@x\"\n\
         ~ group \"board@x\" (members)\n\
         + group \"new@x\"\n"
    );
}
