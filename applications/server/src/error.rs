/// Server error types
use axum::{
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use thiserror::Error;
use tunex_core::TunexError;

pub type Result<T> = std::result::Result<T, ServerError>;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// Wrong or missing role for a route; surfaces as a redirect to /login
    #[error("Role required")]
    RoleRequired,

    /// Ownership or role-selection violation
    #[error("{0}")]
    Forbidden(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unsupported media: {0}")]
    UnsupportedMedia(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Core error: {0}")]
    Core(#[from] TunexError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JWT error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    #[error("Bcrypt error: {0}")]
    Bcrypt(#[from] bcrypt::BcryptError),
}

impl From<tunex_metadata::MetadataError> for ServerError {
    fn from(err: tunex_metadata::MetadataError) -> Self {
        match err {
            tunex_metadata::MetadataError::UnsupportedFormat(_) => {
                ServerError::UnsupportedMedia("Invalid file".to_string())
            }
            other => ServerError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            // Wrong or absent role: redirect to the login page
            ServerError::RoleRequired => {
                return Redirect::to("/login").into_response();
            }
            ServerError::Auth(msg) => (StatusCode::UNAUTHORIZED, msg),
            ServerError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
            ServerError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ServerError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ServerError::UnsupportedMedia(msg) => (StatusCode::UNSUPPORTED_MEDIA_TYPE, msg),
            ServerError::Core(err) => return core_error_response(err),
            ServerError::Config(ref msg) => {
                tracing::error!("Config error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Configuration error".to_string(),
                )
            }
            ServerError::Internal(ref msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            ServerError::Io(ref e) => {
                tracing::error!("IO error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "IO error".to_string())
            }
            ServerError::Jwt(ref e) => {
                tracing::error!("JWT error: {:?}", e);
                (StatusCode::UNAUTHORIZED, "Invalid token".to_string())
            }
            ServerError::Bcrypt(ref e) => {
                tracing::error!("Bcrypt error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Password error".to_string(),
                )
            }
        };

        (status, error_message).into_response()
    }
}

fn core_error_response(err: TunexError) -> Response {
    match err {
        TunexError::PermissionDenied => {
            (StatusCode::FORBIDDEN, "Unauthorized".to_string()).into_response()
        }
        TunexError::Duplicate(msg) => (StatusCode::CONFLICT, msg).into_response(),
        TunexError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
        TunexError::NotFound { .. }
        | TunexError::SongNotFound(_)
        | TunexError::PlaylistNotFound(_)
        | TunexError::UserNotFound(_)
        | TunexError::GenreNotFound(_) => {
            (StatusCode::NOT_FOUND, err.to_string()).into_response()
        }
        other => {
            tracing::error!("Database error: {:?}", other);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Database error".to_string(),
            )
                .into_response()
        }
    }
}
