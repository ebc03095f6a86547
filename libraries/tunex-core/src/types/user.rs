//! User types

use super::ids::UserId;
use super::role::Role;
use serde::{Deserialize, Serialize};

/// A registered account
///
/// The password hash lives in storage only and is never part of this type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub created_at: String,

    /// Assigned roles (optional, populated when requested)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<Role>>,
}

/// Data for creating a new user
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub roles: Vec<Role>,
}
