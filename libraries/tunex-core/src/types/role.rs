//! Role types
//!
//! A user account may hold several roles; a login activates exactly one.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Named permission tier a user account may hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Admin,
    Creator,
    User,
}

impl Role {
    /// All roles, in seed order
    pub const ALL: [Role; 3] = [Role::Admin, Role::Creator, Role::User];

    /// The stored role name
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::Creator => "CREATOR",
            Role::User => "USER",
        }
    }

    /// Parse a stored role name; `None` for unknown names
    pub fn from_str(name: &str) -> Option<Self> {
        match name {
            "ADMIN" => Some(Role::Admin),
            "CREATOR" => Some(Role::Creator),
            "USER" => Some(Role::User),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_name_round_trip() {
        for role in Role::ALL {
            assert_eq!(Role::from_str(role.as_str()), Some(role));
        }
    }

    #[test]
    fn unknown_role_name_is_rejected() {
        assert_eq!(Role::from_str("SUPERUSER"), None);
        assert_eq!(Role::from_str("user"), None);
    }
}
