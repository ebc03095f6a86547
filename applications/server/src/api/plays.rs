/// Play count API route
use crate::{
    error::{Result, ServerError},
    state::AppState,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use tunex_core::{Role, SongId};

/// POST /api/song/:song_id/play
///
/// Increments the play counter by exactly one when the caller holds an
/// active USER-role session; anonymous and non-USER callers get the same
/// 204 with the counter untouched. Unknown songs are 404 either way.
pub async fn increment_play(
    Path(song_id): Path<SongId>,
    State(app_state): State<AppState>,
    headers: axum::http::HeaderMap,
) -> Result<StatusCode> {
    tunex_storage::songs::get_by_id(&app_state.pool, song_id)
        .await?
        .ok_or_else(|| ServerError::NotFound("Song not found".to_string()))?;

    let session = headers
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .and_then(|token| app_state.auth_service.verify_access_token(token).ok());

    if let Some(session) = session {
        if session.role == Role::User {
            tunex_storage::songs::increment_play_count(&app_state.pool, song_id).await?;
        }
    }

    Ok(StatusCode::NO_CONTENT)
}
