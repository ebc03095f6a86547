//! Song types

use super::ids::{GenreId, SongId, UserId};
use serde::{Deserialize, Serialize};

/// An uploaded track, owned by exactly one creator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Song {
    pub id: SongId,
    pub title: String,
    pub file_path: String,
    pub duration_seconds: i64,

    /// Monotonic counter, incremented once per USER-role play request
    pub play_count: i64,

    pub creator_id: UserId,
    pub genre_id: GenreId,
    pub created_at: String,

    /// Denormalized genre name for display
    pub genre_name: Option<String>,
}

/// Data for persisting a newly uploaded song
#[derive(Debug, Clone)]
pub struct CreateSong {
    pub title: String,
    pub file_path: String,
    pub duration_seconds: i64,
    pub creator_id: UserId,
    pub genre_id: GenreId,
}
