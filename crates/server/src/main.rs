//! Community site web server.
//!
//! Serves the built frontend, the auth form API, the provider login and
//! callback routes, and a small client log endpoint.

mod auth;
mod config;
mod logging;
mod provider;
mod routes;
mod state;

use anyhow::Context;
use axum::{
    Router,
    routing::{get, post},
};
use clap::Parser;
use std::path::Path;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::info;

use config::ServerConfig;
use routes::{auth_callback, auth_login, client_log, forgot_password, health, sign_in, sign_up};
use state::AppState;

/// Build the full router. Unknown paths fall through to the frontend so
/// client-side routes resolve to `index.html`.
fn build_router(state: AppState, static_dir: &Path) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/auth/sign-in", post(sign_in))
        .route("/auth/sign-up", post(sign_up))
        .route("/auth/forgot-password", post(forgot_password))
        .route("/log", post(client_log))
        .route("/health", get(health));

    let auth_routes = Router::new()
        .route("/login", get(auth_login))
        .route("/callback", get(auth_callback));

    let frontend = ServeDir::new(static_dir)
        .append_index_html_on_directories(true)
        .fallback(ServeFile::new(static_dir.join("index.html")));

    Router::new()
        .nest("/api", api_routes)
        .nest("/auth", auth_routes)
        .fallback_service(frontend)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let config = ServerConfig::parse();
    logging::init_logging(config.log_json);

    let state = AppState::from_config(&config).context("invalid auth provider configuration")?;
    if config.auth_url.is_none() {
        info!("AUTH_URL not set; provider login and callback will report unavailable");
    }

    let app = build_router(state, &config.static_dir);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(%addr, static_dir = %config.static_dir.display(), "server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
