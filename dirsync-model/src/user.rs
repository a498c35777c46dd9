use serde::{Deserialize, Serialize};

use crate::entity::{SyncEntity, keys_match};

/// A directory account, keyed by campus id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub cid: String,
    pub first_name: String,
    pub second_name: String,
    pub nick: String,
    #[serde(default)]
    pub gdpr_education: bool,
    /// Write-only credential. Excluded from equality and never overwritten
    /// by an update.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password_hash: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash_function: Option<String>,
}

impl User {
    /// Creates a user without credentials.
    pub fn new(
        cid: impl Into<String>,
        first_name: impl Into<String>,
        second_name: impl Into<String>,
        nick: impl Into<String>,
    ) -> Self {
        Self {
            cid: cid.into(),
            first_name: first_name.into(),
            second_name: second_name.into(),
            nick: nick.into(),
            gdpr_education: false,
            password_hash: None,
            hash_function: None,
        }
    }

    /// Builder-style setter for the GDPR education flag.
    #[must_use]
    pub fn gdpr_educated(mut self, educated: bool) -> Self {
        self.gdpr_education = educated;
        self
    }

    /// Builder-style setter for the credential pair.
    #[must_use]
    pub fn with_password_hash(
        mut self,
        hash: impl Into<String>,
        function: impl Into<String>,
    ) -> Self {
        self.password_hash = Some(hash.into());
        self.hash_function = Some(function.into());
        self
    }
}

impl SyncEntity for User {
    const KIND: &'static str = "user";

    fn identity_key(&self) -> &str {
        &self.cid
    }

    // password_hash and hash_function are deliberately absent here and in
    // assign_synchronized.
    fn changed_fields(&self, other: &Self) -> Vec<&'static str> {
        let mut changed = Vec::new();
        if !keys_match(&self.cid, &other.cid) {
            changed.push("cid");
        }
        if self.first_name != other.first_name {
            changed.push("first_name");
        }
        if self.second_name != other.second_name {
            changed.push("second_name");
        }
        if self.nick != other.nick {
            changed.push("nick");
        }
        if self.gdpr_education != other.gdpr_education {
            changed.push("gdpr_education");
        }
        changed
    }

    fn assign_synchronized(&mut self, source: &Self) {
        self.cid.clone_from(&source.cid);
        self.first_name.clone_from(&source.first_name);
        self.second_name.clone_from(&source.second_name);
        self.nick.clone_from(&source.nick);
        self.gdpr_education = source.gdpr_education;
    }
}
