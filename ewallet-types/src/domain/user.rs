//! User domain model.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::role::{Role, RoleType};

entity_id!(
    /// Unique identifier for a User, assigned by storage on persist.
    UserId
);

/// A registered user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// `None` until the user has been persisted
    pub id: Option<UserId>,
    pub first_name: String,
    pub last_name: String,
    /// Trimmed and lower-cased
    pub username: String,
    /// Trimmed and lower-cased
    pub email: String,
    /// Password hash, never the plaintext
    #[serde(skip_serializing)]
    pub password: String,
    pub phone_number: Option<String>,
    pub roles: BTreeSet<Role>,
}

impl User {
    /// Returns the granted role types.
    pub fn role_types(&self) -> BTreeSet<RoleType> {
        self.roles.iter().map(|role| role.role_type).collect()
    }

    /// Returns the user with its storage-assigned identifier set.
    pub fn with_id(self, id: UserId) -> Self {
        Self {
            id: Some(id),
            ..self
        }
    }
}
