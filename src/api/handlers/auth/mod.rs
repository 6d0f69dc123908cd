//! Credential flow: registration, login, session check, logout.
//!
//! Handlers never touch the database or the session backing directly; both sit
//! behind the [`UserStore`] and [`SessionStore`] traits carried in
//! [`AuthState`], so tests run against in-memory substitutes.
//!
//! Unknown email and wrong password produce one indistinguishable `401`;
//! responses must not reveal which credential field was wrong.

pub(crate) mod error;
pub(crate) mod login;
mod password;
pub(crate) mod register;
pub(crate) mod session;
mod session_store;
mod state;
mod storage;
pub(crate) mod types;
mod utils;

pub use session_store::{MemorySessionStore, SessionStore};
pub use state::{AuthConfig, AuthState};
pub use storage::{InsertOutcome, PgUserStore, UserRecord, UserStore};

pub use login::login;
pub use register::register;
pub use session::{auth_check, logout};
