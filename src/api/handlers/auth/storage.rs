//! User persistence behind an injectable trait.

use async_trait::async_trait;
use sqlx::{PgPool, Row};
use tracing::Instrument;
use uuid::Uuid;

use super::utils::is_unique_violation;

/// Outcome when attempting to persist a new user.
#[derive(Debug)]
pub enum InsertOutcome {
    Created(Uuid),
    /// The store's unique index on email rejected the row.
    DuplicateEmail,
}

/// A stored user row, read once per login attempt.
#[derive(Debug, Clone)]
pub struct UserRecord {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub password_hash: String,
}

/// The user store seam: production uses Postgres, tests substitute an
/// in-memory fake.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn insert_user(
        &self,
        username: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<InsertOutcome, sqlx::Error>;

    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, sqlx::Error>;
}

pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn insert_user(
        &self,
        username: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<InsertOutcome, sqlx::Error> {
        let query =
            "INSERT INTO users (username, email, password_hash) VALUES ($1, $2, $3) RETURNING id";
        let span = tracing::info_span!(
            "db.query",
            db.system = "postgresql",
            db.operation = "INSERT",
            db.statement = query
        );
        let row = sqlx::query(query)
            .bind(username)
            .bind(email)
            .bind(password_hash)
            .fetch_one(&self.pool)
            .instrument(span)
            .await;

        match row {
            Ok(row) => Ok(InsertOutcome::Created(row.get("id"))),
            // The unique index is the only guard against registration races;
            // both racers hit this same path and exactly one wins.
            Err(err) if is_unique_violation(&err) => Ok(InsertOutcome::DuplicateEmail),
            Err(err) => Err(err),
        }
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, sqlx::Error> {
        let query = "SELECT id, username, email, password_hash FROM users WHERE email = $1";
        let span = tracing::info_span!(
            "db.query",
            db.system = "postgresql",
            db.operation = "SELECT",
            db.statement = query
        );
        let row = sqlx::query(query)
            .bind(email)
            .fetch_optional(&self.pool)
            .instrument(span)
            .await?;

        Ok(row.map(|row| UserRecord {
            id: row.get("id"),
            username: row.get("username"),
            email: row.get("email"),
            password_hash: row.get("password_hash"),
        }))
    }
}
