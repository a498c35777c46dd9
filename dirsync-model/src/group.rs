use serde::{Deserialize, Serialize};

use crate::entity::{SyncEntity, keys_match, same_address_set};

/// A mailing/organizational group held by a directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    /// Identity key.
    pub email: String,
    pub name: String,
    /// Member addresses. Order and letter case are irrelevant.
    #[serde(default)]
    pub members: Vec<String>,
    /// Alternative addresses routed to the group.
    #[serde(default)]
    pub aliases: Vec<String>,
    /// Directory-side flag, synchronized like the other attributes.
    #[serde(default)]
    pub expendable: bool,
    /// Server-assigned id. Never compared, never written.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl Group {
    /// Creates a group with no members, aliases or server id.
    pub fn new(email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: name.into(),
            members: Vec::new(),
            aliases: Vec::new(),
            expendable: false,
            id: None,
        }
    }

    /// Builder-style setter for the member list.
    #[must_use]
    pub fn with_members<I, S>(mut self, members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.members = members.into_iter().map(Into::into).collect();
        self
    }

    /// Builder-style setter for the alias list.
    #[must_use]
    pub fn with_aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aliases = aliases.into_iter().map(Into::into).collect();
        self
    }

    /// Builder-style setter for the expendable flag.
    #[must_use]
    pub fn expendable(mut self, expendable: bool) -> Self {
        self.expendable = expendable;
        self
    }
}

impl SyncEntity for Group {
    const KIND: &'static str = "group";

    fn identity_key(&self) -> &str {
        &self.email
    }

    fn changed_fields(&self, other: &Self) -> Vec<&'static str> {
        let mut changed = Vec::new();
        if !keys_match(&self.email, &other.email) {
            changed.push("email");
        }
        if self.name != other.name {
            changed.push("name");
        }
        if !same_address_set(&self.members, &other.members) {
            changed.push("members");
        }
        if !same_address_set(&self.aliases, &other.aliases) {
            changed.push("aliases");
        }
        if self.expendable != other.expendable {
            changed.push("expendable");
        }
        changed
    }

    fn assign_synchronized(&mut self, source: &Self) {
        self.email.clone_from(&source.email);
        self.name.clone_from(&source.name);
        self.members.clone_from(&source.members);
        self.aliases.clone_from(&source.aliases);
        self.expendable = source.expendable;
    }
}
