use crate::api;
use crate::api::handlers::AuthConfig;
use crate::cli::actions::Action;
use anyhow::Result;

/// Handle the server action
pub async fn handle(action: Action) -> Result<()> {
    match action {
        Action::Server {
            port,
            dsn,
            origin,
            session_ttl,
        } => {
            let config = AuthConfig::new(origin).with_session_ttl_seconds(session_ttl);

            api::new(port, dsn, config).await?;
        }
    }

    Ok(())
}
