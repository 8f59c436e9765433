//! Portfolio API
//!
//! Bilingual (English/Norwegian) content backend for a personal portfolio site, with
//! SQLite persistence.

mod api;
mod config;
mod db;
mod errors;
mod i18n;
mod models;

use std::sync::Arc;

use axum::{
    body::Body,
    http::Request,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::{Config, LogFormat};
use db::Repository;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<Repository>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env();

    init_tracing(&config);

    tracing::info!("Starting Portfolio API");
    tracing::info!("Database path: {:?}", config.db_path);
    tracing::info!("Bind address: {}", config.bind_addr);
    tracing::warn!("Content creation, contact and subscriber routes are not authenticated");

    // Initialize database
    let pool = db::init_database(&config.db_path, config.db_max_connections).await?;
    let repo = Arc::new(Repository::new(pool));

    if config.seed_on_start {
        db::seed::seed_database(&repo).await?;
    }

    let state = AppState { repo: repo.clone() };

    // Build router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    repo.close().await;
    tracing::info!("Database connections closed");

    Ok(())
}

fn init_tracing(config: &Config) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let registry = tracing_subscriber::registry().with(env_filter);
    match config.log_format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API routes
    let api_routes = Router::new()
        .route("/health", get(health_check))
        // Portfolio
        .route("/portfolio", get(api::get_portfolio).post(api::save_portfolio))
        // Timeline
        .route(
            "/timeline",
            get(api::list_timeline).post(api::create_timeline_entry),
        )
        // Projects
        .route("/projects", get(api::list_projects).post(api::create_project))
        // Blog
        .route("/blog", get(api::list_posts).post(api::create_post))
        .route("/blog/{slug}", get(api::get_post))
        // Contact
        .route("/contact", post(api::submit_contact))
        .route("/contacts", get(api::list_contacts))
        // Newsletter
        .route(
            "/newsletter",
            get(api::list_subscribers).post(api::subscribe),
        )
        .route("/newsletter/unsubscribe", post(api::unsubscribe));

    // Liveness probe outside the API prefix
    let health_routes = Router::new().route("/health", get(health_check));

    let middleware = ServiceBuilder::new()
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                let request_id = request
                    .headers()
                    .get("x-request-id")
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                    request_id = %request_id,
                )
            }),
        )
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(cors);

    Router::new()
        .nest("/api", api_routes)
        .merge(health_routes)
        .layer(middleware)
        .with_state(state)
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    message: &'static str,
}

/// Health check endpoint.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        message: "Portfolio API is running",
    })
}
