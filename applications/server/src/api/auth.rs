/// Authentication API routes
use crate::{
    error::{Result, ServerError},
    middleware::AuthSession,
    state::AppState,
};
use axum::{
    extract::State,
    response::Redirect,
    Form, Json,
};
use serde::{Deserialize, Serialize};
use tunex_core::{CreateUser, Role};

#[derive(Debug, Deserialize)]
pub struct RegisterForm {
    pub email: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub role: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
}

#[derive(Debug, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

#[derive(Debug, Serialize)]
pub struct RefreshResponse {
    pub access_token: String,
    pub token_type: String,
}

/// POST /register
///
/// Creates the user and its role assignment, then sends the client to the
/// login page with the role pre-selected.
pub async fn register(
    State(app_state): State<AppState>,
    Form(form): Form<RegisterForm>,
) -> Result<Redirect> {
    let (Some(email), Some(username), Some(password), Some(role_name)) =
        (form.email, form.username, form.password, form.role)
    else {
        return Err(ServerError::BadRequest("Missing fields".to_string()));
    };

    if email.trim().is_empty() || username.trim().is_empty() || password.is_empty() {
        return Err(ServerError::BadRequest("Missing fields".to_string()));
    }

    let role = Role::from_str(&role_name)
        .ok_or_else(|| ServerError::BadRequest("Invalid role".to_string()))?;

    let password_hash = app_state.auth_service.hash_password(&password)?;

    tunex_storage::users::create(
        &app_state.pool,
        CreateUser {
            username: username.trim().to_string(),
            email: email.trim().to_string(),
            password_hash,
            roles: vec![role],
        },
    )
    .await?;

    Ok(Redirect::to(&format!("/login?role={}", role)))
}

/// POST /login
///
/// Verifies the password hash and that the chosen role is among the user's
/// assigned roles; success returns the token pair carrying the session.
pub async fn login(
    State(app_state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> Result<Json<LoginResponse>> {
    let user = tunex_storage::users::find_by_email(&app_state.pool, &form.email)
        .await?
        .ok_or_else(|| ServerError::Auth("Invalid email or password".to_string()))?;

    let password_hash = tunex_storage::users::get_password_hash(&app_state.pool, &form.email)
        .await?
        .ok_or_else(|| ServerError::Auth("Invalid email or password".to_string()))?;

    if !app_state
        .auth_service
        .verify_password(&form.password, &password_hash)?
    {
        return Err(ServerError::Auth("Invalid email or password".to_string()));
    }

    // The chosen role must be among the user's assigned roles, regardless
    // of password correctness
    let role = Role::from_str(&form.role)
        .filter(|r| user.roles.as_deref().unwrap_or_default().contains(r))
        .ok_or_else(|| ServerError::Forbidden("Unauthorized role selected".to_string()))?;

    let session = AuthSession {
        user_id: user.id,
        username: user.username,
        role,
    };

    let access_token = app_state.auth_service.create_access_token(&session)?;
    let refresh_token = app_state.auth_service.create_refresh_token(&session)?;

    Ok(Json(LoginResponse {
        access_token,
        refresh_token,
        token_type: "Bearer".to_string(),
    }))
}

/// POST /refresh
pub async fn refresh(
    State(app_state): State<AppState>,
    Json(req): Json<RefreshRequest>,
) -> Result<Json<RefreshResponse>> {
    let session = app_state
        .auth_service
        .verify_refresh_token(&req.refresh_token)?;

    let access_token = app_state.auth_service.create_access_token(&session)?;

    Ok(Json(RefreshResponse {
        access_token,
        token_type: "Bearer".to_string(),
    }))
}

/// GET /logout
///
/// Sessions live in the tokens, so there is no server-side state to clear;
/// clients drop their tokens.
pub async fn logout() -> Redirect {
    Redirect::to("/")
}
