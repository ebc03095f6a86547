//! Songs vertical slice
//!
//! Creator ownership is enforced here for mutations; the play counter is
//! role-gated by the caller (roles are a session concern, not storage).

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use tunex_core::{error::Result, types::*, TunexError};

fn song_from_row(row: &SqliteRow) -> Song {
    Song {
        id: row.get("id"),
        title: row.get("title"),
        file_path: row.get("file_path"),
        duration_seconds: row.get("duration_seconds"),
        play_count: row.get("play_count"),
        creator_id: row.get("creator_id"),
        genre_id: row.get("genre_id"),
        created_at: row.get("created_at"),
        genre_name: row.get("genre_name"),
    }
}

/// Get all songs with denormalized genre names
pub async fn get_all(pool: &SqlitePool) -> Result<Vec<Song>> {
    let rows = sqlx::query(
        r#"
        SELECT s.id, s.title, s.file_path, s.duration_seconds, s.play_count,
               s.creator_id, s.genre_id, s.created_at,
               g.name as genre_name
        FROM songs s
        LEFT JOIN genres g ON s.genre_id = g.id
        ORDER BY s.title
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows.iter().map(song_from_row).collect())
}

/// Get a song by ID
pub async fn get_by_id(pool: &SqlitePool, id: SongId) -> Result<Option<Song>> {
    let row = sqlx::query(
        r#"
        SELECT s.id, s.title, s.file_path, s.duration_seconds, s.play_count,
               s.creator_id, s.genre_id, s.created_at,
               g.name as genre_name
        FROM songs s
        LEFT JOIN genres g ON s.genre_id = g.id
        WHERE s.id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row.as_ref().map(song_from_row))
}

/// Get all songs owned by a creator
pub async fn get_by_creator(pool: &SqlitePool, creator_id: UserId) -> Result<Vec<Song>> {
    let rows = sqlx::query(
        r#"
        SELECT s.id, s.title, s.file_path, s.duration_seconds, s.play_count,
               s.creator_id, s.genre_id, s.created_at,
               g.name as genre_name
        FROM songs s
        LEFT JOIN genres g ON s.genre_id = g.id
        WHERE s.creator_id = ?
        ORDER BY s.title
        "#,
    )
    .bind(creator_id)
    .fetch_all(pool)
    .await?;

    Ok(rows.iter().map(song_from_row).collect())
}

/// Persist a newly uploaded song
pub async fn create(pool: &SqlitePool, song: CreateSong) -> Result<Song> {
    let result = sqlx::query(
        r#"
        INSERT INTO songs (title, file_path, duration_seconds, creator_id, genre_id)
        VALUES (?, ?, ?, ?, ?)
        "#,
    )
    .bind(&song.title)
    .bind(&song.file_path)
    .bind(song.duration_seconds)
    .bind(song.creator_id)
    .bind(song.genre_id)
    .execute(pool)
    .await?;

    let id = result.last_insert_rowid();

    get_by_id(pool, id)
        .await?
        .ok_or_else(|| TunexError::Storage("Failed to retrieve created song".to_string()))
}

/// Retitle a song; only its owning creator may do this
pub async fn rename(pool: &SqlitePool, id: SongId, title: &str, creator_id: UserId) -> Result<()> {
    let song = get_by_id(pool, id)
        .await?
        .ok_or(TunexError::SongNotFound(id))?;

    if song.creator_id != creator_id {
        return Err(TunexError::PermissionDenied);
    }

    sqlx::query("UPDATE songs SET title = ? WHERE id = ?")
        .bind(title)
        .bind(id)
        .execute(pool)
        .await?;

    Ok(())
}

/// Delete a song; only its owning creator may do this
///
/// Cascades deletion of all membership rows referencing the song, across
/// all playlists, in the same transaction.
pub async fn delete(pool: &SqlitePool, id: SongId, creator_id: UserId) -> Result<()> {
    let song = get_by_id(pool, id)
        .await?
        .ok_or(TunexError::SongNotFound(id))?;

    if song.creator_id != creator_id {
        return Err(TunexError::PermissionDenied);
    }

    let mut tx = pool.begin().await?;

    sqlx::query("DELETE FROM playlist_songs WHERE song_id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    sqlx::query("DELETE FROM songs WHERE id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    Ok(())
}

/// Increment the play counter by exactly one
///
/// Every call increments; debouncing is not provided.
pub async fn increment_play_count(pool: &SqlitePool, id: SongId) -> Result<()> {
    let result = sqlx::query("UPDATE songs SET play_count = play_count + 1 WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(TunexError::SongNotFound(id));
    }

    Ok(())
}
