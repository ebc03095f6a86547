//! Playlists vertical slice
//!
//! Membership invariants live here: a song appears at most once per
//! playlist (existence check inside the insert transaction) and positions
//! are assigned as max(position) + 1. Positions are advisory ordering
//! hints only; removal does not compact them and reorder does not validate
//! uniqueness or contiguity of the submitted values.

use sqlx::{Row, SqlitePool};
use tunex_core::{error::Result, types::*, TunexError};

/// Get a playlist by ID, without entries
pub async fn get_by_id(pool: &SqlitePool, id: PlaylistId) -> Result<Option<Playlist>> {
    let row = sqlx::query("SELECT id, name, user_id, created_at FROM playlists WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(row.map(|row| Playlist {
        id: row.get("id"),
        name: row.get("name"),
        owner_id: row.get("user_id"),
        created_at: row.get("created_at"),
        songs: None,
    }))
}

/// Get a user's playlists
pub async fn get_for_user(pool: &SqlitePool, user_id: UserId) -> Result<Vec<Playlist>> {
    let rows = sqlx::query(
        "SELECT id, name, user_id, created_at FROM playlists WHERE user_id = ? ORDER BY name",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|row| Playlist {
            id: row.get("id"),
            name: row.get("name"),
            owner_id: row.get("user_id"),
            created_at: row.get("created_at"),
            songs: None,
        })
        .collect())
}

/// Get a playlist with its entries in position order
///
/// Only the owner may view a playlist.
pub async fn get_with_songs(
    pool: &SqlitePool,
    id: PlaylistId,
    user_id: UserId,
) -> Result<Option<Playlist>> {
    let Some(mut playlist) = get_by_id(pool, id).await? else {
        return Ok(None);
    };

    if playlist.owner_id != user_id {
        return Err(TunexError::PermissionDenied);
    }

    let rows = sqlx::query(
        r#"
        SELECT ps.song_id, ps.position, ps.added_at,
               s.title, s.duration_seconds,
               g.name as genre_name
        FROM playlist_songs ps
        INNER JOIN songs s ON ps.song_id = s.id
        LEFT JOIN genres g ON s.genre_id = g.id
        WHERE ps.playlist_id = ?
        ORDER BY ps.position
        "#,
    )
    .bind(id)
    .fetch_all(pool)
    .await?;

    let songs = rows
        .into_iter()
        .map(|row| PlaylistEntry {
            song_id: row.get("song_id"),
            position: row.get("position"),
            added_at: row.get("added_at"),
            title: Some(row.get("title")),
            genre_name: row.get("genre_name"),
            duration_seconds: row.get("duration_seconds"),
        })
        .collect();

    playlist.songs = Some(songs);

    Ok(Some(playlist))
}

/// Create a new, empty playlist
pub async fn create(pool: &SqlitePool, playlist: CreatePlaylist) -> Result<Playlist> {
    let result = sqlx::query("INSERT INTO playlists (name, user_id) VALUES (?, ?)")
        .bind(&playlist.name)
        .bind(playlist.owner_id)
        .execute(pool)
        .await?;

    let id = result.last_insert_rowid();

    get_by_id(pool, id)
        .await?
        .ok_or_else(|| TunexError::Storage("Failed to retrieve created playlist".to_string()))
}

/// Rename a playlist; owner only
pub async fn rename(pool: &SqlitePool, id: PlaylistId, name: &str, user_id: UserId) -> Result<()> {
    require_owner(pool, id, user_id).await?;

    sqlx::query("UPDATE playlists SET name = ? WHERE id = ?")
        .bind(name)
        .bind(id)
        .execute(pool)
        .await?;

    Ok(())
}

/// Delete a playlist and its membership rows; owner only
pub async fn delete(pool: &SqlitePool, id: PlaylistId, user_id: UserId) -> Result<()> {
    require_owner(pool, id, user_id).await?;

    let mut tx = pool.begin().await?;

    sqlx::query("DELETE FROM playlist_songs WHERE playlist_id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    sqlx::query("DELETE FROM playlists WHERE id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    Ok(())
}

/// Append a song to a playlist; owner only
///
/// Returns `Ok(false)` without touching anything if the membership already
/// exists. Otherwise the song lands at max(position) + 1 (1 for an empty
/// playlist). The existence check, position query, and insert run in one
/// transaction.
pub async fn add_song(
    pool: &SqlitePool,
    playlist_id: PlaylistId,
    song_id: SongId,
    user_id: UserId,
) -> Result<bool> {
    require_owner(pool, playlist_id, user_id).await?;

    let song = sqlx::query("SELECT id FROM songs WHERE id = ?")
        .bind(song_id)
        .fetch_optional(pool)
        .await?;
    if song.is_none() {
        return Err(TunexError::SongNotFound(song_id));
    }

    let mut tx = pool.begin().await?;

    let existing = sqlx::query(
        "SELECT position FROM playlist_songs WHERE playlist_id = ? AND song_id = ?",
    )
    .bind(playlist_id)
    .bind(song_id)
    .fetch_optional(&mut *tx)
    .await?;

    if existing.is_some() {
        return Ok(false);
    }

    let next_position_row = sqlx::query(
        "SELECT COALESCE(MAX(position), 0) + 1 as next_pos FROM playlist_songs WHERE playlist_id = ?",
    )
    .bind(playlist_id)
    .fetch_one(&mut *tx)
    .await?;

    let next_position: i64 = next_position_row.get("next_pos");

    sqlx::query(
        "INSERT INTO playlist_songs (playlist_id, song_id, position, added_at) VALUES (?, ?, ?, ?)",
    )
    .bind(playlist_id)
    .bind(song_id)
    .bind(next_position)
    .bind(chrono::Utc::now().to_rfc3339())
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;

    Ok(true)
}

/// Remove a song from a playlist; owner only
///
/// Deletes the membership row if present. Remaining positions are left
/// untouched.
pub async fn remove_song(
    pool: &SqlitePool,
    playlist_id: PlaylistId,
    song_id: SongId,
    user_id: UserId,
) -> Result<()> {
    require_owner(pool, playlist_id, user_id).await?;

    sqlx::query("DELETE FROM playlist_songs WHERE playlist_id = ? AND song_id = ?")
        .bind(playlist_id)
        .bind(song_id)
        .execute(pool)
        .await?;

    Ok(())
}

/// Overwrite positions for the submitted entries; owner only
///
/// Entries absent from the list are untouched. Submitted positions are
/// written verbatim; nothing checks them for uniqueness or contiguity.
pub async fn reorder(
    pool: &SqlitePool,
    playlist_id: PlaylistId,
    order: &[ReorderEntry],
    user_id: UserId,
) -> Result<()> {
    require_owner(pool, playlist_id, user_id).await?;

    let mut tx = pool.begin().await?;

    for entry in order {
        sqlx::query(
            "UPDATE playlist_songs SET position = ? WHERE playlist_id = ? AND song_id = ?",
        )
        .bind(entry.position)
        .bind(playlist_id)
        .bind(entry.song_id)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;

    Ok(())
}

// Helper functions

async fn require_owner(pool: &SqlitePool, id: PlaylistId, user_id: UserId) -> Result<()> {
    let playlist = get_by_id(pool, id)
        .await?
        .ok_or(TunexError::PlaylistNotFound(id))?;

    if playlist.owner_id != user_id {
        return Err(TunexError::PermissionDenied);
    }

    Ok(())
}
