mod genre;
mod ids;
mod playlist;
mod role;
mod song;
mod user;

pub use genre::Genre;
pub use ids::{GenreId, PlaylistId, RoleId, SongId, UserId};
pub use playlist::{CreatePlaylist, Playlist, PlaylistEntry, ReorderEntry};
pub use role::Role;
pub use song::{CreateSong, Song};
pub use user::{CreateUser, User};
