//! ID aliases for TuneX entities
//!
//! All entities are keyed by SQLite rowids.

pub type UserId = i64;
pub type RoleId = i64;
pub type GenreId = i64;
pub type SongId = i64;
pub type PlaylistId = i64;
