//! TuneX Core
//!
//! Domain types and error handling shared by the TuneX storage layer and
//! the HTTP server.
//!
//! The core crate defines:
//! - **Domain Types**: `User`, `Role`, `Genre`, `Song`, `Playlist`, etc.
//! - **Error Handling**: Unified `TunexError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use tunex_core::types::{CreatePlaylist, Role};
//!
//! let role = Role::from_str("CREATOR").unwrap();
//! assert_eq!(role.as_str(), "CREATOR");
//!
//! let playlist = CreatePlaylist {
//!     name: "Gym".to_string(),
//!     owner_id: 1,
//! };
//! assert_eq!(playlist.name, "Gym");
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod types;

// Re-export commonly used types
pub use error::{Result, TunexError};
pub use types::{
    CreatePlaylist, CreateSong, CreateUser, Genre, GenreId, Playlist, PlaylistEntry, PlaylistId,
    ReorderEntry, Role, RoleId, Song, SongId, User, UserId,
};
