//! Role lookups

use sqlx::{Row, SqlitePool};
use tunex_core::{error::Result, types::*};

/// Get the roles assigned to a user
pub async fn get_for_user(pool: &SqlitePool, user_id: UserId) -> Result<Vec<Role>> {
    let rows = sqlx::query(
        "SELECT r.name
         FROM roles r
         INNER JOIN user_roles ur ON r.id = ur.role_id
         WHERE ur.user_id = ?
         ORDER BY r.name",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .filter_map(|row| Role::from_str(row.get::<String, _>("name").as_str()))
        .collect())
}

/// Check whether a user holds a role
pub async fn user_has_role(pool: &SqlitePool, user_id: UserId, role: Role) -> Result<bool> {
    let row = sqlx::query(
        "SELECT COUNT(*) as count
         FROM user_roles ur
         INNER JOIN roles r ON r.id = ur.role_id
         WHERE ur.user_id = ? AND r.name = ?",
    )
    .bind(user_id)
    .bind(role.as_str())
    .fetch_one(pool)
    .await?;

    Ok(row.get::<i64, _>("count") > 0)
}
