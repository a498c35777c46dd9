use std::collections::HashSet;
use std::fmt;

/// A unit that can be reconciled against a directory.
///
/// Implementors define which attributes take part in synchronization. The
/// same attribute list must drive [`changed_fields`](Self::changed_fields)
/// and [`assign_synchronized`](Self::assign_synchronized): an attribute that
/// is compared but never written (or written but never compared) keeps a
/// directory from converging.
pub trait SyncEntity: Clone + fmt::Debug {
    /// Lowercase singular label used in logs and reports ("group", "user").
    const KIND: &'static str;

    /// The natural key identifying this entity in a directory.
    fn identity_key(&self) -> &str;

    /// Names of the synchronized attributes whose values differ from `other`.
    fn changed_fields(&self, other: &Self) -> Vec<&'static str>;

    /// Copies every synchronized attribute (including the key spelling) from
    /// `source`, leaving excluded attributes untouched.
    fn assign_synchronized(&mut self, source: &Self);

    /// Semantic equality: true when no synchronized attribute differs.
    fn semantic_eq(&self, other: &Self) -> bool {
        self.changed_fields(other).is_empty()
    }

    /// Whether both entities refer to the same directory object.
    fn same_identity(&self, other: &Self) -> bool {
        keys_match(self.identity_key(), other.identity_key())
    }
}

/// Normalizes an identity key for case-insensitive lookups.
pub fn normalize_key(key: &str) -> String {
    key.to_lowercase()
}

/// Case-insensitive identity key comparison.
pub fn keys_match(a: &str, b: &str) -> bool {
    a == b || a.to_lowercase() == b.to_lowercase()
}

/// Returns every identity key that occurs more than once, in the spelling of
/// its second occurrence, ordered by that occurrence.
pub fn find_duplicate_keys<E: SyncEntity>(entities: &[E]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    let mut duplicates = Vec::new();

    for entity in entities {
        let key = normalize_key(entity.identity_key());
        if !seen.insert(key.clone()) && reported.insert(key) {
            duplicates.push(entity.identity_key().to_string());
        }
    }

    duplicates
}

/// Compares two address lists as case-insensitive sets.
pub(crate) fn same_address_set(a: &[String], b: &[String]) -> bool {
    let left: HashSet<String> = a.iter().map(|s| normalize_key(s)).collect();
    let right: HashSet<String> = b.iter().map(|s| normalize_key(s)).collect();
    left == right
}
