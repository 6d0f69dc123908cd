//! Session check, logout, and cookie plumbing.

use std::sync::Arc;

use axum::{
    extract::Extension,
    http::{
        header::{InvalidHeaderValue, COOKIE, SET_COOKIE},
        HeaderMap, HeaderValue, StatusCode,
    },
    response::IntoResponse,
    Json,
};
use tracing::instrument;

use super::error::AuthError;
use super::state::{AuthConfig, AuthState};
use super::types::SessionUser;

const SESSION_COOKIE_NAME: &str = "portiere_session";

#[utoipa::path(
    get,
    path= "/auth",
    responses (
        (status = 200, description = "Session is active", body = SessionUser),
        (status = 401, description = "No active session"),
    ),
    tag= "auth"
)]
#[instrument(skip(state, headers))]
pub async fn auth_check(
    headers: HeaderMap,
    state: Extension<Arc<AuthState>>,
) -> Result<impl IntoResponse, AuthError> {
    // A missing cookie and an expired session look the same to the client.
    let Some(token) = extract_session_token(&headers) else {
        return Err(AuthError::Unauthorized);
    };

    match state.sessions().get(&token).await {
        Some(user) => Ok((StatusCode::OK, Json(user))),
        None => Err(AuthError::Unauthorized),
    }
}

#[utoipa::path(
    get,
    path= "/logout",
    responses (
        (status = 200, description = "Session cleared"),
    ),
    tag= "auth"
)]
#[instrument(skip(state, headers))]
pub async fn logout(headers: HeaderMap, state: Extension<Arc<AuthState>>) -> impl IntoResponse {
    if let Some(token) = extract_session_token(&headers) {
        state.sessions().destroy(&token).await;
    }

    // Always clear the cookie, even when no session existed.
    let mut response_headers = HeaderMap::new();
    if let Ok(cookie) = clear_session_cookie(state.config()) {
        response_headers.insert(SET_COOKIE, cookie);
    }

    (StatusCode::OK, response_headers, "Logged out")
}

/// Build the `HttpOnly` cookie carrying the session token.
pub(super) fn session_cookie(
    config: &AuthConfig,
    token: &str,
) -> Result<HeaderValue, InvalidHeaderValue> {
    let ttl_seconds = config.session_ttl_seconds();
    let secure = config.session_cookie_secure();
    let mut cookie = format!(
        "{SESSION_COOKIE_NAME}={token}; Path=/; HttpOnly; SameSite=Lax; Max-Age={ttl_seconds}"
    );
    if secure {
        cookie.push_str("; Secure");
    }
    HeaderValue::from_str(&cookie)
}

fn clear_session_cookie(config: &AuthConfig) -> Result<HeaderValue, InvalidHeaderValue> {
    let secure = config.session_cookie_secure();
    let mut cookie = format!("{SESSION_COOKIE_NAME}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0");
    if secure {
        cookie.push_str("; Secure");
    }
    HeaderValue::from_str(&cookie)
}

pub(super) fn extract_session_token(headers: &HeaderMap) -> Option<String> {
    let header = headers.get(COOKIE)?;
    let value = header.to_str().ok()?;
    for pair in value.split(';') {
        // Pairs without a value (a nameless cookie) are skipped, not fatal.
        let Some((key, val)) = pair.trim().split_once('=') else {
            continue;
        };
        if key.trim() == SESSION_COOKIE_NAME {
            return Some(val.trim().to_string());
        }
    }
    None
}
