/// Listener playlist API routes
use crate::{
    error::{Result, ServerError},
    middleware::AuthSession,
    state::AppState,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Redirect,
    Form, Json,
};
use serde::Deserialize;
use tunex_core::{CreatePlaylist, Playlist, PlaylistId, ReorderEntry, Role, SongId};

#[derive(Debug, Deserialize)]
pub struct CreatePlaylistForm {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct RenamePlaylistForm {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct AddSongForm {
    pub playlist_id: Option<PlaylistId>,
    pub song_id: Option<SongId>,
}

#[derive(Debug, Deserialize)]
pub struct RemoveSongForm {
    pub playlist_id: PlaylistId,
    pub song_id: SongId,
}

#[derive(Debug, Deserialize)]
pub struct ReorderRequest {
    pub order: Vec<ReorderEntry>,
}

/// POST /playlist/create
pub async fn create(
    State(app_state): State<AppState>,
    session: AuthSession,
    Form(form): Form<CreatePlaylistForm>,
) -> Result<Redirect> {
    session.require_role(Role::User)?;

    if form.name.trim().is_empty() {
        return Err(ServerError::BadRequest("Missing fields".to_string()));
    }

    tunex_storage::playlists::create(
        &app_state.pool,
        CreatePlaylist {
            name: form.name.trim().to_string(),
            owner_id: session.user_id,
        },
    )
    .await?;

    Ok(Redirect::to("/dashboard/user"))
}

/// POST /playlist/add
///
/// Appends the song at max(position) + 1. An already-present pair is a
/// silent no-op: same redirect, nothing written.
pub async fn add_song(
    State(app_state): State<AppState>,
    session: AuthSession,
    Form(form): Form<AddSongForm>,
) -> Result<Redirect> {
    session.require_role(Role::User)?;

    let (Some(playlist_id), Some(song_id)) = (form.playlist_id, form.song_id) else {
        return Ok(Redirect::to("/dashboard/user"));
    };

    tunex_storage::playlists::add_song(&app_state.pool, playlist_id, song_id, session.user_id)
        .await?;

    Ok(Redirect::to("/dashboard/user"))
}

/// GET /playlist/:playlist_id
///
/// The playlist with its songs in position order; owner only.
pub async fn view(
    Path(playlist_id): Path<PlaylistId>,
    State(app_state): State<AppState>,
    session: AuthSession,
) -> Result<Json<Playlist>> {
    let playlist =
        tunex_storage::playlists::get_with_songs(&app_state.pool, playlist_id, session.user_id)
            .await?
            .ok_or_else(|| ServerError::NotFound("Playlist not found".to_string()))?;

    Ok(Json(playlist))
}

/// POST /playlist/rename/:playlist_id
pub async fn rename(
    Path(playlist_id): Path<PlaylistId>,
    State(app_state): State<AppState>,
    session: AuthSession,
    Form(form): Form<RenamePlaylistForm>,
) -> Result<Redirect> {
    session.require_role(Role::User)?;

    tunex_storage::playlists::rename(
        &app_state.pool,
        playlist_id,
        form.name.trim(),
        session.user_id,
    )
    .await?;

    Ok(Redirect::to("/dashboard/user"))
}

/// POST /playlist/delete/:playlist_id
pub async fn delete(
    Path(playlist_id): Path<PlaylistId>,
    State(app_state): State<AppState>,
    session: AuthSession,
) -> Result<Redirect> {
    session.require_role(Role::User)?;

    tunex_storage::playlists::delete(&app_state.pool, playlist_id, session.user_id).await?;

    Ok(Redirect::to("/dashboard/user"))
}

/// POST /playlist/remove
///
/// Deletes the membership row if present. Remaining positions keep their
/// values; nothing is renumbered.
pub async fn remove_song(
    State(app_state): State<AppState>,
    session: AuthSession,
    Form(form): Form<RemoveSongForm>,
) -> Result<Redirect> {
    session.require_role(Role::User)?;

    tunex_storage::playlists::remove_song(
        &app_state.pool,
        form.playlist_id,
        form.song_id,
        session.user_id,
    )
    .await?;

    Ok(Redirect::to("/dashboard/user"))
}

/// POST /playlist/reorder/:playlist_id
///
/// Overwrites positions for the submitted entries only; returns 204.
pub async fn reorder(
    Path(playlist_id): Path<PlaylistId>,
    State(app_state): State<AppState>,
    session: AuthSession,
    Json(req): Json<ReorderRequest>,
) -> Result<StatusCode> {
    session.require_role(Role::User)?;

    tunex_storage::playlists::reorder(&app_state.pool, playlist_id, &req.order, session.user_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
