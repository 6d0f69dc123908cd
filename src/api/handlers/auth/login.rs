use std::sync::Arc;

use anyhow::Context;
use axum::{
    extract::Extension,
    http::{header::SET_COOKIE, HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use tracing::{debug, instrument};

use super::error::AuthError;
use super::password::verify_password;
use super::session::session_cookie;
use super::state::AuthState;
use super::types::{LoginRequest, SessionUser};
use super::utils::generate_session_token;

#[utoipa::path(
    post,
    path= "/login",
    request_body = LoginRequest,
    responses (
        (status = 200, description = "Login successful, session cookie set"),
        (status = 400, description = "Missing fields"),
        (status = 401, description = "Invalid email or password"),
    ),
    tag= "auth"
)]
#[instrument(skip(state))]
pub async fn login(
    state: Extension<Arc<AuthState>>,
    payload: Option<Json<LoginRequest>>,
) -> Result<impl IntoResponse, AuthError> {
    let Some(Json(login)) = payload else {
        return Err(AuthError::Validation("All fields are required"));
    };

    if login.email.is_empty() || login.password.is_empty() {
        return Err(AuthError::Validation("All fields are required"));
    }

    // An unknown email takes the same exit as a bad password below.
    let Some(record) = state.users().find_by_email(&login.email).await? else {
        return Err(AuthError::InvalidCredentials);
    };

    let password = login.password;
    let stored_hash = record.password_hash.clone();
    let matched = tokio::task::spawn_blocking(move || verify_password(&password, &stored_hash))
        .await
        .context("password verification task failed")?;

    if !matched {
        return Err(AuthError::InvalidCredentials);
    }

    let token = generate_session_token()?;
    let user = SessionUser {
        id: record.id.to_string(),
        username: record.username,
        email: record.email,
    };

    state.sessions().set(&token, user).await;

    let cookie =
        session_cookie(state.config(), &token).context("failed to build session cookie")?;

    let mut headers = HeaderMap::new();
    headers.insert(SET_COOKIE, cookie);

    debug!("login successful");

    Ok((StatusCode::OK, headers, "Login successful"))
}
