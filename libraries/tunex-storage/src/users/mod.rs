//! User accounts and role assignments

use sqlx::{Row, SqlitePool};
use tunex_core::{error::Result, types::*, TunexError};

/// Create a user with its role assignments
///
/// Runs in one transaction: the email uniqueness check, the user row, and
/// the `user_roles` rows commit together.
pub async fn create(pool: &SqlitePool, user: CreateUser) -> Result<User> {
    if user.roles.is_empty() {
        return Err(TunexError::invalid_input("At least one role is required"));
    }

    let mut tx = pool.begin().await?;

    let existing = sqlx::query("SELECT id FROM users WHERE email = ?")
        .bind(&user.email)
        .fetch_optional(&mut *tx)
        .await?;

    if existing.is_some() {
        return Err(TunexError::duplicate("Email already exists"));
    }

    let result = sqlx::query(
        "INSERT INTO users (username, email, password_hash) VALUES (?, ?, ?)",
    )
    .bind(&user.username)
    .bind(&user.email)
    .bind(&user.password_hash)
    .execute(&mut *tx)
    .await?;

    let user_id = result.last_insert_rowid();

    for role in &user.roles {
        let role_row = sqlx::query("SELECT id FROM roles WHERE name = ?")
            .bind(role.as_str())
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| TunexError::invalid_input(format!("Invalid role: {}", role)))?;
        let role_id: RoleId = role_row.get("id");

        sqlx::query("INSERT OR IGNORE INTO user_roles (user_id, role_id) VALUES (?, ?)")
            .bind(user_id)
            .bind(role_id)
            .execute(&mut *tx)
            .await?;
    }

    tx.commit().await?;

    get_by_id(pool, user_id)
        .await?
        .ok_or_else(|| TunexError::Storage("Failed to retrieve created user".to_string()))
}

/// Get a user by ID, with roles populated
pub async fn get_by_id(pool: &SqlitePool, id: UserId) -> Result<Option<User>> {
    let row = sqlx::query("SELECT id, username, email, created_at FROM users WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    let Some(row) = row else {
        return Ok(None);
    };

    let roles = crate::roles::get_for_user(pool, id).await?;

    Ok(Some(User {
        id: row.get("id"),
        username: row.get("username"),
        email: row.get("email"),
        created_at: row.get("created_at"),
        roles: Some(roles),
    }))
}

/// Look a user up by email, with roles populated
pub async fn find_by_email(pool: &SqlitePool, email: &str) -> Result<Option<User>> {
    let row = sqlx::query("SELECT id, username, email, created_at FROM users WHERE email = ?")
        .bind(email)
        .fetch_optional(pool)
        .await?;

    let Some(row) = row else {
        return Ok(None);
    };

    let id: UserId = row.get("id");
    let roles = crate::roles::get_for_user(pool, id).await?;

    Ok(Some(User {
        id,
        username: row.get("username"),
        email: row.get("email"),
        created_at: row.get("created_at"),
        roles: Some(roles),
    }))
}

/// Get a user's password hash for authentication
pub async fn get_password_hash(pool: &SqlitePool, email: &str) -> Result<Option<String>> {
    let row = sqlx::query("SELECT password_hash FROM users WHERE email = ?")
        .bind(email)
        .fetch_optional(pool)
        .await?;

    Ok(row.map(|r| r.get("password_hash")))
}

/// Get all users, without role expansion
pub async fn get_all(pool: &SqlitePool) -> Result<Vec<User>> {
    let rows = sqlx::query("SELECT id, username, email, created_at FROM users ORDER BY username")
        .fetch_all(pool)
        .await?;

    Ok(rows
        .into_iter()
        .map(|row| User {
            id: row.get("id"),
            username: row.get("username"),
            email: row.get("email"),
            created_at: row.get("created_at"),
            roles: None,
        })
        .collect())
}
