//! Route handlers: the credential flow under `auth`, plus `/health`.

pub(crate) mod auth;
pub mod health;

pub use self::auth::AuthConfig;
pub use self::health::health;
