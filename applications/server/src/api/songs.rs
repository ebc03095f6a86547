/// Creator workflow API routes
use crate::{
    error::{Result, ServerError},
    middleware::AuthSession,
    state::AppState,
};
use axum::{
    extract::{Path, State},
    response::Redirect,
    Form,
};
use serde::Deserialize;
use tunex_core::{CreateSong, Role, SongId};

#[derive(Debug, Deserialize)]
pub struct EditSongForm {
    pub title: String,
}

/// POST /creator/upload
///
/// Multipart form with fields `song` (the audio file), `title`, and
/// `genre_id`. Only mp3 and wav are accepted; the duration comes from the
/// container metadata, not the client.
pub async fn upload(
    State(app_state): State<AppState>,
    session: AuthSession,
    headers: axum::http::HeaderMap,
    body: axum::body::Bytes,
) -> Result<Redirect> {
    session.require_role(Role::Creator)?;

    let content_type = headers
        .get(axum::http::header::CONTENT_TYPE)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| ServerError::BadRequest("Missing Content-Type".to_string()))?;

    if !content_type.starts_with("multipart/form-data") {
        return Err(ServerError::BadRequest(
            "Expected multipart/form-data".to_string(),
        ));
    }

    let boundary = content_type
        .split("boundary=")
        .nth(1)
        .ok_or_else(|| ServerError::BadRequest("Missing boundary".to_string()))?;

    // Convert Bytes to a stream for multer
    let stream = futures_util::stream::once(async move { Ok::<_, std::io::Error>(body) });
    let mut multipart = multer::Multipart::new(stream, boundary);

    let mut file_data: Option<Vec<u8>> = None;
    let mut file_name: Option<String> = None;
    let mut title: Option<String> = None;
    let mut genre_id: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ServerError::BadRequest(format!("Failed to parse multipart: {}", e)))?
    {
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            "song" => {
                file_name = field.file_name().map(|s| s.to_string());
                file_data = Some(
                    field
                        .bytes()
                        .await
                        .map_err(|e| {
                            ServerError::BadRequest(format!("Failed to read file: {}", e))
                        })?
                        .to_vec(),
                );
            }
            "title" => {
                title = Some(field.text().await.map_err(|e| {
                    ServerError::BadRequest(format!("Failed to read title: {}", e))
                })?);
            }
            "genre_id" => {
                genre_id = Some(field.text().await.map_err(|e| {
                    ServerError::BadRequest(format!("Failed to read genre: {}", e))
                })?);
            }
            _ => {}
        }
    }

    let file_data =
        file_data.ok_or_else(|| ServerError::BadRequest("Missing fields".to_string()))?;
    let file_name =
        file_name.ok_or_else(|| ServerError::BadRequest("Missing fields".to_string()))?;
    let title = title
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| ServerError::BadRequest("Missing fields".to_string()))?;
    let genre_id: i64 = genre_id
        .ok_or_else(|| ServerError::BadRequest("Missing fields".to_string()))?
        .trim()
        .parse()
        .map_err(|_| ServerError::BadRequest("Invalid genre".to_string()))?;

    if tunex_metadata::supported_extension(&file_name).is_none() {
        return Err(ServerError::UnsupportedMedia("Invalid file".to_string()));
    }

    tunex_storage::genres::get_by_id(&app_state.pool, genre_id)
        .await?
        .ok_or_else(|| ServerError::NotFound("Genre not found".to_string()))?;

    let path = app_state
        .file_storage
        .store_upload(&file_name, &file_data)
        .await?;

    let duration_seconds = tunex_metadata::read_duration_seconds(&path)? as i64;

    let song = tunex_storage::songs::create(
        &app_state.pool,
        CreateSong {
            title: title.trim().to_string(),
            file_path: path.to_string_lossy().to_string(),
            duration_seconds,
            creator_id: session.user_id,
            genre_id,
        },
    )
    .await?;

    tracing::info!(song_id = song.id, title = %song.title, "Song uploaded");

    Ok(Redirect::to("/dashboard/creator"))
}

/// POST /creator/edit/:song_id
///
/// Retitle a song; only its owning creator may do this.
pub async fn edit(
    Path(song_id): Path<SongId>,
    State(app_state): State<AppState>,
    session: AuthSession,
    Form(form): Form<EditSongForm>,
) -> Result<Redirect> {
    session.require_role(Role::Creator)?;

    if form.title.trim().is_empty() {
        return Err(ServerError::BadRequest("Missing fields".to_string()));
    }

    tunex_storage::songs::rename(
        &app_state.pool,
        song_id,
        form.title.trim(),
        session.user_id,
    )
    .await?;

    Ok(Redirect::to("/dashboard/creator"))
}

/// POST /creator/delete/:song_id
///
/// Delete a song, its playlist memberships everywhere, and its stored
/// audio file; only the owning creator may do this.
pub async fn delete(
    Path(song_id): Path<SongId>,
    State(app_state): State<AppState>,
    session: AuthSession,
) -> Result<Redirect> {
    session.require_role(Role::Creator)?;

    let song = tunex_storage::songs::get_by_id(&app_state.pool, song_id)
        .await?
        .ok_or_else(|| ServerError::NotFound("Song not found".to_string()))?;

    tunex_storage::songs::delete(&app_state.pool, song_id, session.user_id).await?;

    // The row is gone; losing the file removal is tolerable
    if let Err(e) = app_state
        .file_storage
        .remove(std::path::Path::new(&song.file_path))
        .await
    {
        tracing::warn!("Failed to remove audio file {}: {}", song.file_path, e);
    }

    Ok(Redirect::to("/dashboard/creator"))
}
