//! Playlist types

use super::ids::{PlaylistId, SongId, UserId};
use serde::{Deserialize, Serialize};

/// A listener-owned playlist
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playlist {
    pub id: PlaylistId,
    pub name: String,
    pub owner_id: UserId,
    pub created_at: String,

    /// Membership entries in position order (optional, populated when requested)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub songs: Option<Vec<PlaylistEntry>>,
}

/// Data for creating a new playlist
#[derive(Debug, Clone)]
pub struct CreatePlaylist {
    pub name: String,
    pub owner_id: UserId,
}

/// Membership record linking a playlist to a song with an ordering hint
///
/// Positions are assigned as max(position) + 1 at insertion and are never
/// compacted on removal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistEntry {
    pub song_id: SongId,
    pub position: i64,
    pub added_at: String,

    /// Denormalized fields for display
    pub title: Option<String>,
    pub genre_name: Option<String>,
    pub duration_seconds: Option<i64>,
}

/// One element of a reorder request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReorderEntry {
    pub song_id: SongId,
    pub position: i64,
}
