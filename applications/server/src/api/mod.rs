/// API route modules
pub mod auth;
pub mod dashboard;
pub mod playlists;
pub mod plays;
pub mod songs;

use crate::{middleware, services::AuthService, state::AppState};
use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

async fn index() -> &'static str {
    "TuneX - share and listen"
}

/// Build the application router
pub fn router(app_state: AppState, auth_service: Arc<AuthService>) -> Router {
    // Public routes (no auth required)
    let public_routes = Router::new()
        .route("/", get(index))
        .route("/login", post(auth::login))
        .route("/register", post(auth::register))
        .route("/refresh", post(auth::refresh))
        .route("/logout", get(auth::logout))
        // Play counting is open; only USER-role sessions are counted
        .route("/api/song/:song_id/play", post(plays::increment_play));

    // Protected routes (auth required)
    let protected_routes = Router::new()
        // Creator workflow
        .route("/dashboard/creator", get(dashboard::creator_dashboard))
        .route("/creator/upload", post(songs::upload))
        .route("/creator/edit/:song_id", post(songs::edit))
        .route("/creator/delete/:song_id", post(songs::delete))
        // Listener workflow
        .route("/dashboard/user", get(dashboard::user_dashboard))
        .route("/playlist/create", post(playlists::create))
        .route("/playlist/add", post(playlists::add_song))
        .route("/playlist/:playlist_id", get(playlists::view))
        .route("/playlist/rename/:playlist_id", post(playlists::rename))
        .route("/playlist/delete/:playlist_id", post(playlists::delete))
        .route("/playlist/remove", post(playlists::remove_song))
        .route("/playlist/reorder/:playlist_id", post(playlists::reorder))
        .layer(axum_middleware::from_fn_with_state(
            Arc::clone(&auth_service),
            middleware::auth_middleware,
        ));

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
