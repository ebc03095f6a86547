/// Dashboard API routes
use crate::{error::Result, middleware::AuthSession, state::AppState};
use axum::{extract::State, Json};
use serde::Serialize;
use tunex_core::{Genre, Playlist, Role, Song};

#[derive(Debug, Serialize)]
pub struct CreatorDashboard {
    pub username: String,
    pub songs: Vec<Song>,
    pub genres: Vec<Genre>,
    pub total_songs: usize,
    pub total_plays: i64,
    pub top_song: Option<Song>,
}

#[derive(Debug, Serialize)]
pub struct UserDashboard {
    pub username: String,
    pub songs: Vec<Song>,
    pub playlists: Vec<Playlist>,
}

/// GET /dashboard/creator
///
/// The creator's songs plus play analytics, and the genre set for the
/// upload form.
pub async fn creator_dashboard(
    State(app_state): State<AppState>,
    session: AuthSession,
) -> Result<Json<CreatorDashboard>> {
    session.require_role(Role::Creator)?;

    let songs = tunex_storage::songs::get_by_creator(&app_state.pool, session.user_id).await?;
    let genres = tunex_storage::genres::get_all(&app_state.pool).await?;

    let total_songs = songs.len();
    let total_plays = songs.iter().map(|s| s.play_count).sum();
    let top_song = songs.iter().max_by_key(|s| s.play_count).cloned();

    Ok(Json(CreatorDashboard {
        username: session.username,
        songs,
        genres,
        total_songs,
        total_plays,
        top_song,
    }))
}

/// GET /dashboard/user
///
/// The full song library plus the listener's own playlists.
pub async fn user_dashboard(
    State(app_state): State<AppState>,
    session: AuthSession,
) -> Result<Json<UserDashboard>> {
    session.require_role(Role::User)?;

    let songs = tunex_storage::songs::get_all(&app_state.pool).await?;
    let playlists =
        tunex_storage::playlists::get_for_user(&app_state.pool, session.user_id).await?;

    Ok(Json(UserDashboard {
        username: session.username,
        songs,
        playlists,
    }))
}
