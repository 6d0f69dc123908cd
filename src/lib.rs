//! # Portiere
//!
//! `portiere` is a session-backed authentication service. It registers users,
//! verifies credentials against a Postgres `users` table, and keeps an
//! authenticated session server-side, referenced by an opaque cookie.
//!
//! ## Surface
//!
//! - `POST /register`: validate input, hash the password, insert the user.
//! - `POST /login`: verify credentials, issue a session cookie.
//! - `GET /auth`: return the session identity, if any.
//! - `GET /logout`: destroy the session (idempotent).
//!
//! ## Error policy
//!
//! Unknown email and wrong password are deliberately collapsed into a single
//! `401` with one body, so responses never reveal which field was wrong.
//! Backend failures map to a generic `500`; details only reach the logs.

pub mod api;
pub mod cli;

pub const GIT_COMMIT_HASH: &str = env!("PORTIERE_GIT_SHA");

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);
