//! Fixed lookup data
//!
//! Roles and genres are small fixed sets the application expects to exist.
//! Seeding is idempotent; reruns at every startup are fine.

use sqlx::SqlitePool;
use tunex_core::{error::Result, types::Role};

const DEFAULT_GENRES: [&str; 4] = ["Pop", "Rock", "Hip-Hop", "Classical"];

/// Insert the fixed role and genre sets if absent
pub async fn ensure_defaults(pool: &SqlitePool) -> Result<()> {
    for role in Role::ALL {
        sqlx::query("INSERT OR IGNORE INTO roles (name) VALUES (?)")
            .bind(role.as_str())
            .execute(pool)
            .await?;
    }

    for genre in DEFAULT_GENRES {
        sqlx::query("INSERT OR IGNORE INTO genres (name) VALUES (?)")
            .bind(genre)
            .execute(pool)
            .await?;
    }

    Ok(())
}
