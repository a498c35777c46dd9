use dirsync_model::{Group, SyncEntity};
use pretty_assertions::assert_eq;

fn board() -> Group {
    Group::new("board@x.org", "Board")
        .with_members(["alice@x.org", "bob@x.org"])
        .with_aliases(["styrit@x.org"])
}

// ── Semantic equality ────────────────────────────────────────────

#[test]
fn identical_groups_are_equal() {
    assert!(board().semantic_eq(&board()));
}

#[test]
fn email_case_does_not_matter() {
    let mut other = board();
    other.email = "BOARD@X.ORG".to_string();
    assert!(board().semantic_eq(&other));
}

#[test]
fn member_order_and_case_do_not_matter() {
    let other = board().with_members(["BOB@x.org", "alice@x.org"]);
    assert!(board().semantic_eq(&other));
}

#[test]
fn repeated_members_do_not_matter() {
    let other = board().with_members(["alice@x.org", "bob@x.org", "alice@x.org"]);
    assert!(board().semantic_eq(&other));
}

#[test]
fn server_id_is_ignored() {
    let mut other = board();
    other.id = Some("03x4f5".to_string());
    assert!(board().semantic_eq(&other));
}

#[test]
fn name_change_is_detected() {
    let mut other = board();
    other.name = "Styrelsen".to_string();
    assert!(!board().semantic_eq(&other));
    assert_eq!(board().changed_fields(&other), vec!["name"]);
}

#[test]
fn membership_change_is_detected() {
    let other = board().with_members(["alice@x.org"]);
    assert_eq!(board().changed_fields(&other), vec!["members"]);
}

#[test]
fn alias_and_flag_changes_are_detected() {
    let other = board().with_aliases(Vec::<String>::new()).expendable(true);
    assert_eq!(board().changed_fields(&other), vec!["aliases", "expendable"]);
}

// ── Synchronized attributes ──────────────────────────────────────

#[test]
fn assign_synchronized_copies_compared_fields_and_keeps_id() {
    let mut stored = board();
    stored.id = Some("srv-1".to_string());

    let desired = Group::new("Board@x.org", "Styrelsen")
        .with_members(["carol@x.org"])
        .expendable(true);

    stored.assign_synchronized(&desired);

    assert!(stored.semantic_eq(&desired));
    assert_eq!(stored.email, "Board@x.org");
    assert_eq!(stored.id.as_deref(), Some("srv-1"));
}

#[test]
fn expendable_is_synchronized_like_other_attributes() {
    let desired = board().expendable(true);
    let mut stored = board();
    assert_eq!(stored.changed_fields(&desired), vec!["expendable"]);

    stored.assign_synchronized(&desired);
    assert!(stored.expendable);
    assert!(stored.semantic_eq(&desired));
}
