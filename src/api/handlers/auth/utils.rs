//! Small helpers for input validation and session-token generation.

use anyhow::{Context, Result};
use base64ct::{Base64UrlUnpadded, Encoding};
use rand::{rngs::OsRng, RngCore};

/// Username rule: at least three characters after trimming.
pub(super) fn valid_username(username: &str) -> bool {
    username.chars().count() >= 3
}

/// Email rule is deliberately loose here: an `@` somewhere after trimming.
pub(super) fn valid_email(email: &str) -> bool {
    email.contains('@')
}

pub(super) fn valid_password(password: &str) -> bool {
    password.chars().count() >= 6
}

/// Create a new opaque session token.
/// The raw value only travels in the cookie; the server keeps it as a map key.
pub(super) fn generate_session_token() -> Result<String> {
    let mut bytes = [0u8; 32];
    OsRng
        .try_fill_bytes(&mut bytes)
        .context("failed to generate session token")?;
    Ok(Base64UrlUnpadded::encode_string(&bytes))
}

pub(super) fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => db_err.code().is_some_and(|code| code.as_ref() == "23505"),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64ct::{Base64UrlUnpadded, Encoding};
    use sqlx::error::{DatabaseError, ErrorKind};
    use std::borrow::Cow;
    use std::error::Error as StdError;
    use std::fmt;

    #[test]
    fn valid_username_needs_three_chars() {
        assert!(valid_username("abc"));
        assert!(valid_username("alice"));
        assert!(!valid_username("ab"));
        assert!(!valid_username(""));
    }

    #[test]
    fn valid_email_only_requires_an_at() {
        assert!(valid_email("a@b"));
        assert!(valid_email("alice@x.com"));
        assert!(!valid_email("not-an-email"));
        assert!(!valid_email(""));
    }

    #[test]
    fn valid_password_needs_six_chars() {
        assert!(valid_password("secret1"));
        assert!(valid_password("123456"));
        assert!(!valid_password("12345"));
    }

    #[test]
    fn generate_session_token_round_trip() {
        let decoded_len = generate_session_token()
            .ok()
            .and_then(|token| Base64UrlUnpadded::decode_vec(&token).ok())
            .map(|bytes| bytes.len());
        assert_eq!(decoded_len, Some(32));
    }

    #[test]
    fn generated_tokens_differ() {
        let first = generate_session_token().unwrap();
        let second = generate_session_token().unwrap();
        assert_ne!(first, second);
    }

    #[derive(Debug)]
    struct TestDbError {
        code: Option<&'static str>,
    }

    impl fmt::Display for TestDbError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "test database error")
        }
    }

    impl StdError for TestDbError {}

    impl DatabaseError for TestDbError {
        fn message(&self) -> &'static str {
            "test database error"
        }

        fn code(&self) -> Option<Cow<'_, str>> {
            self.code.map(Cow::Borrowed)
        }

        fn as_error(&self) -> &(dyn StdError + Send + Sync + 'static) {
            self
        }

        fn as_error_mut(&mut self) -> &mut (dyn StdError + Send + Sync + 'static) {
            self
        }

        fn into_error(self: Box<Self>) -> Box<dyn StdError + Send + Sync + 'static> {
            self
        }

        fn kind(&self) -> ErrorKind {
            ErrorKind::UniqueViolation
        }
    }

    #[test]
    fn is_unique_violation_matches_sqlstate() {
        let err = sqlx::Error::Database(Box::new(TestDbError {
            code: Some("23505"),
        }));
        assert!(is_unique_violation(&err));

        let err = sqlx::Error::Database(Box::new(TestDbError {
            code: Some("99999"),
        }));
        assert!(!is_unique_violation(&err));

        let err = sqlx::Error::RowNotFound;
        assert!(!is_unique_violation(&err));
    }
}
