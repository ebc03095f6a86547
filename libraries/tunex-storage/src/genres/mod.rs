use sqlx::{Row, SqlitePool};
use tunex_core::{error::Result, types::*};

pub async fn get_all(pool: &SqlitePool) -> Result<Vec<Genre>> {
    let rows = sqlx::query("SELECT id, name, created_at FROM genres ORDER BY name")
        .fetch_all(pool)
        .await?;

    Ok(rows
        .into_iter()
        .map(|row| Genre {
            id: row.get("id"),
            name: row.get("name"),
            created_at: row.get("created_at"),
        })
        .collect())
}

pub async fn get_by_id(pool: &SqlitePool, id: GenreId) -> Result<Option<Genre>> {
    let row = sqlx::query("SELECT id, name, created_at FROM genres WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(row.map(|row| Genre {
        id: row.get("id"),
        name: row.get("name"),
        created_at: row.get("created_at"),
    }))
}

pub async fn find_by_name(pool: &SqlitePool, name: &str) -> Result<Option<Genre>> {
    let row = sqlx::query("SELECT id, name, created_at FROM genres WHERE name = ?")
        .bind(name)
        .fetch_optional(pool)
        .await?;

    Ok(row.map(|row| Genre {
        id: row.get("id"),
        name: row.get("name"),
        created_at: row.get("created_at"),
    }))
}
