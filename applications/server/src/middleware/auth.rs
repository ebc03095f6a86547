/// Authentication middleware
///
/// Replaces ambient session state with an explicit per-request context:
/// the middleware verifies the bearer token and inserts an `AuthSession`
/// extension, which handlers receive as an extractor.
use crate::{error::ServerError, services::AuthService};
use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use std::sync::Arc;
use tunex_core::{Role, UserId};

/// Per-request authentication context: user id, username, and the single
/// active role picked at login
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub user_id: UserId,
    pub username: String,
    pub role: Role,
}

impl AuthSession {
    /// Check the active role for a route; wrong role redirects to /login
    pub fn require_role(&self, role: Role) -> Result<(), ServerError> {
        if self.role == role {
            Ok(())
        } else {
            Err(ServerError::RoleRequired)
        }
    }
}

/// Middleware that extracts and validates the JWT from the Authorization
/// header; absent or invalid credentials redirect to /login
pub async fn auth_middleware(
    State(auth_service): State<Arc<AuthService>>,
    mut request: Request,
    next: Next,
) -> Result<Response, ServerError> {
    let auth_header = request
        .headers()
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or(ServerError::RoleRequired)?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or(ServerError::RoleRequired)?;

    let session = auth_service.verify_access_token(token).map_err(|e| {
        tracing::warn!("Token verification failed: {}", e);
        ServerError::RoleRequired
    })?;

    request.extensions_mut().insert(session);

    Ok(next.run(request).await)
}

/// Implement FromRequestParts so AuthSession can be used as an extractor
#[axum::async_trait]
impl<S> FromRequestParts<S> for AuthSession
where
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthSession>()
            .cloned()
            .ok_or(ServerError::RoleRequired)
    }
}
