use crate::api::handlers::{
    auth::{
        self,
        login::__path_login,
        register::__path_register,
        session::{__path_auth_check, __path_logout},
        types, AuthConfig, AuthState, MemorySessionStore, PgUserStore, SessionStore, UserStore,
    },
    health::{self, __path_health},
};
use anyhow::{anyhow, Context, Result};
use axum::{
    body::Body,
    extract::MatchedPath,
    http::{header::CONTENT_TYPE, HeaderName, HeaderValue, Method, Request},
    routing::{get, post},
    Extension, Router,
};
use sqlx::postgres::PgPoolOptions;
use std::{sync::Arc, time::Duration};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    request_id::PropagateRequestIdLayer,
    set_header::SetRequestHeaderLayer,
    trace::TraceLayer,
};
use tracing::{info, info_span, Span};
use ulid::Ulid;
use url::Url;
use utoipa::OpenApi;

pub mod handlers;

#[derive(OpenApi)]
#[openapi(
    paths(health, register, login, auth_check, logout),
    components(schemas(
        health::Health,
        types::RegisterRequest,
        types::LoginRequest,
        types::SessionUser
    )),
    tags(
        (name = "portiere", description = "Session-backed authentication API")
    )
)]
struct ApiDoc;

#[must_use]
pub fn openapi() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}

/// Start the server
/// # Errors
/// Return error if failed to start the server
pub async fn new(port: u16, dsn: String, config: AuthConfig) -> Result<()> {
    // Connect to database
    let pool = PgPoolOptions::new()
        .min_connections(1)
        .max_connections(5)
        .max_lifetime(Duration::from_secs(60 * 2))
        .test_before_acquire(true)
        .connect(&dsn)
        .await
        .context("Failed to connect to database")?;

    let users: Arc<dyn UserStore> = Arc::new(PgUserStore::new(pool.clone()));
    let sessions: Arc<dyn SessionStore> = Arc::new(MemorySessionStore::new(Duration::from_secs(
        config.session_ttl_seconds(),
    )));
    let auth_state = Arc::new(AuthState::new(config, users, sessions));

    // Session cookies must survive the cross-origin round trip.
    let origin = frontend_origin(auth_state.config().origin())?;
    let cors = CorsLayer::new()
        .allow_headers([CONTENT_TYPE])
        .allow_methods([Method::GET, Method::POST])
        .allow_origin(AllowOrigin::exact(origin))
        .allow_credentials(true);

    let app = Router::new()
        .route("/", get(|| async { "🎶" }))
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/auth", get(auth::auth_check))
        .route("/logout", get(auth::logout))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestHeaderLayer::if_not_present(
                    HeaderName::from_static("x-request-id"),
                    |_req: &_| HeaderValue::from_str(Ulid::new().to_string().as_str()).ok(),
                ))
                .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
                    "x-request-id",
                )))
                .layer(TraceLayer::new_for_http().make_span_with(make_span))
                .layer(cors)
                .layer(Extension(auth_state.clone())),
        )
        .route(
            "/health",
            get(handlers::health).options(handlers::health),
        )
        .layer(Extension(pool));

    let listener = TcpListener::bind(format!("::0:{port}")).await?;

    info!("Listening on [::]:{}", port);

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(async move {
            let _ = tokio::signal::ctrl_c().await;
            info!("Gracefully shutdown");
        })
        .await?;

    Ok(())
}

fn make_span(request: &Request<Body>) -> Span {
    let request_id = request
        .headers()
        .get("x-request-id")
        .and_then(|val| val.to_str().ok())
        .unwrap_or("none");
    let matched_path = request
        .extensions()
        .get::<MatchedPath>()
        .map_or_else(|| request.uri().path(), MatchedPath::as_str);

    info_span!(
        "http.request",
        http.method = %request.method(),
        http.route = matched_path,
        request_id
    )
}

fn frontend_origin(frontend_base_url: &str) -> Result<HeaderValue> {
    let parsed = Url::parse(frontend_base_url)
        .with_context(|| format!("Invalid frontend base URL: {frontend_base_url}"))?;
    let host = parsed.host_str().ok_or_else(|| {
        anyhow!("Frontend base URL must include a valid host: {frontend_base_url}")
    })?;
    let port = parsed
        .port()
        .map_or_else(String::new, |port| format!(":{port}"));
    let origin = format!("{}://{}{}", parsed.scheme(), host, port);
    HeaderValue::from_str(&origin).context("Failed to build frontend origin header")
}

#[cfg(test)]
mod tests {
    use super::frontend_origin;

    #[test]
    fn frontend_origin_keeps_scheme_host_and_port() {
        let origin = frontend_origin("http://127.0.0.1:5500").unwrap();
        assert_eq!(origin, "http://127.0.0.1:5500");
    }

    #[test]
    fn frontend_origin_strips_path() {
        let origin = frontend_origin("https://app.example.com/login").unwrap();
        assert_eq!(origin, "https://app.example.com");
    }

    #[test]
    fn frontend_origin_rejects_garbage() {
        assert!(frontend_origin("not a url").is_err());
    }
}
