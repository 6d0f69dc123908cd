//! Request-level error taxonomy and its HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

/// Everything a credential request can fail with.
///
/// Store and internal variants carry detail for the logs only; the client
/// always gets a generic body for those.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("{0}")]
    Validation(&'static str),

    #[error("Email already registered")]
    DuplicateEmail,

    // Unknown email and wrong password share this variant so the response
    // never reveals which one failed.
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Unauthorized")]
    Unauthorized,

    #[error("database error: {0}")]
    Store(#[from] sqlx::Error),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl AuthError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::DuplicateEmail => StatusCode::CONFLICT,
            Self::InvalidCredentials | Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Store(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let body = match &self {
            Self::Store(err) => {
                error!("Database error: {err}");

                "Database error".to_string()
            }
            Self::Internal(err) => {
                error!("Internal error: {err:?}");

                "Server error".to_string()
            }
            _ => self.to_string(),
        };

        (self.status(), body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_string(err: AuthError) -> String {
        let response = err.into_response();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[test]
    fn status_mapping() {
        assert_eq!(
            AuthError::Validation("bad").status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AuthError::DuplicateEmail.status(), StatusCode::CONFLICT);
        assert_eq!(
            AuthError::InvalidCredentials.status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(AuthError::Unauthorized.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            AuthError::Store(sqlx::Error::PoolClosed).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AuthError::Internal(anyhow::anyhow!("boom")).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn backend_detail_never_reaches_the_body() {
        let body = body_string(AuthError::Store(sqlx::Error::PoolClosed)).await;
        assert_eq!(body, "Database error");

        let body = body_string(AuthError::Internal(anyhow::anyhow!("secret detail"))).await;
        assert_eq!(body, "Server error");
    }

    #[tokio::test]
    async fn invalid_credentials_body_is_generic() {
        let body = body_string(AuthError::InvalidCredentials).await;
        assert_eq!(body, "Invalid email or password");
    }
}
