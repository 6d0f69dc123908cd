use std::sync::Arc;

use anyhow::{anyhow, Context};
use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json};
use tracing::{debug, instrument};

use super::error::AuthError;
use super::password::hash_password;
use super::state::AuthState;
use super::storage::InsertOutcome;
use super::types::RegisterRequest;
use super::utils::{valid_email, valid_password, valid_username};

#[utoipa::path(
    post,
    path= "/register",
    request_body = RegisterRequest,
    responses (
        (status = 200, description = "Registration successful"),
        (status = 400, description = "Validation failed"),
        (status = 409, description = "A user with the specified email already exists"),
        (status = 500, description = "Store or hashing failure"),
    ),
    tag= "auth"
)]
#[instrument(skip(state))]
pub async fn register(
    state: Extension<Arc<AuthState>>,
    payload: Option<Json<RegisterRequest>>,
) -> Result<impl IntoResponse, AuthError> {
    let Some(Json(user)) = payload else {
        return Err(AuthError::Validation("Missing payload"));
    };

    let username = user.username.trim().to_string();
    let email = user.email.trim().to_string();

    // Validation runs before any store access.
    if !valid_username(&username) {
        return Err(AuthError::Validation(
            "Username must be at least 3 characters",
        ));
    }

    if !valid_email(&email) {
        return Err(AuthError::Validation("Enter a valid email address"));
    }

    if !valid_password(&user.password) {
        return Err(AuthError::Validation(
            "Password must be at least 6 characters",
        ));
    }

    // Hashing is CPU-bound; keep it off the async workers.
    let password = user.password;
    let password_hash = tokio::task::spawn_blocking(move || hash_password(&password))
        .await
        .context("password hashing task failed")?
        .map_err(|err| anyhow!("failed to hash password: {err}"))?;

    match state
        .users()
        .insert_user(&username, &email, &password_hash)
        .await?
    {
        InsertOutcome::Created(id) => {
            debug!("user created: {id}");

            Ok((StatusCode::OK, "Registration successful"))
        }
        InsertOutcome::DuplicateEmail => Err(AuthError::DuplicateEmail),
    }
}
