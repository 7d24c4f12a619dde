//! Role domain model.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

entity_id!(
    /// Catalog identifier of a persisted role.
    RoleId
);

/// Closed set of role identifiers a user can be granted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoleType {
    User,
    Admin,
}

impl RoleType {
    /// Every member of the enumeration, in declaration order.
    pub const ALL: [RoleType; 2] = [RoleType::User, RoleType::Admin];

    /// Canonical name, as stored in the role catalog and accepted on signup.
    pub fn as_str(&self) -> &'static str {
        match self {
            RoleType::User => "USER",
            RoleType::Admin => "ADMIN",
        }
    }
}

impl std::fmt::Display for RoleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for RoleType {
    type Err = DomainError;

    /// Exact, case-sensitive match against the canonical names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RoleType::ALL
            .into_iter()
            .find(|role_type| role_type.as_str() == s)
            .ok_or_else(|| DomainError::InvalidRoleType(s.to_string()))
    }
}

/// A role entity from the role catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Role {
    pub id: RoleId,
    pub role_type: RoleType,
}

impl Role {
    pub fn new(id: RoleId, role_type: RoleType) -> Self {
        Self { id, role_type }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_role_types() {
        assert_eq!("USER".parse::<RoleType>().unwrap(), RoleType::User);
        assert_eq!("ADMIN".parse::<RoleType>().unwrap(), RoleType::Admin);
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        let result = "user".parse::<RoleType>();
        assert!(matches!(result, Err(DomainError::InvalidRoleType(name)) if name == "user"));
    }

    #[test]
    fn test_parse_rejects_unknown_name() {
        let result = "ROLE_USER".parse::<RoleType>();
        assert!(matches!(result, Err(DomainError::InvalidRoleType(name)) if name == "ROLE_USER"));
    }

    #[test]
    fn test_serde_uses_canonical_names() {
        let json = serde_json::to_string(&RoleType::Admin).unwrap();
        assert_eq!(json, "\"ADMIN\"");
        let parsed: RoleType = serde_json::from_str("\"USER\"").unwrap();
        assert_eq!(parsed, RoleType::User);
    }
}
