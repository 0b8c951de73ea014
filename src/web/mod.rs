//! Web server for the resume page.
//!
//! The page is rendered once at startup; every request is served from
//! memory. Endpoints:
//!
//! - `GET /` - the rendered resume page
//! - `GET /health` - health check
//! - `GET /api/resume` - the loaded catalogs as JSON (image payloads omitted)
//! - `GET /static/{file}` - embedded static assets (stylesheet)

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{extract::State, response::Html, routing::get, Json, Router};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::Config;
use crate::models::Resume;
use crate::render::{render_page, Stylesheet};

pub mod static_files;

// ============================================================================
// Application State
// ============================================================================

/// Shared application state.
///
/// Everything is computed before the listener binds and is immutable after;
/// handlers only read through the `Arc`s.
#[derive(Clone)]
pub struct AppState {
    /// The fully rendered page, served verbatim on every request.
    page: Arc<String>,
    /// Loaded catalogs as JSON for the API endpoint.
    resume_json: Arc<serde_json::Value>,
}

impl AppState {
    /// Renders the page and prepares the API payload.
    pub fn new(resume: &Resume, config: &Config) -> anyhow::Result<Self> {
        let page = render_page(
            resume,
            &config.site.title,
            Stylesheet::Linked(static_files::STYLESHEET_ROUTE),
        );
        let resume_json =
            serde_json::to_value(resume).context("Failed to serialize resume for the API")?;

        Ok(Self {
            page: Arc::new(page),
            resume_json: Arc::new(resume_json),
        })
    }
}

// ============================================================================
// Response Types
// ============================================================================

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Current health status (always "ok" once the server is up).
    pub status: String,
    /// Application version.
    pub version: String,
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET / - the rendered resume page.
async fn index(State(state): State<AppState>) -> Html<String> {
    Html(state.page.as_ref().clone())
}

/// GET /health - health check endpoint.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// GET /api/resume - the loaded catalogs in catalog order.
async fn get_resume(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(state.resume_json.as_ref().clone())
}

// ============================================================================
// Router Setup
// ============================================================================

/// Creates the router with all endpoints.
///
/// CORS is wide open; this is a local development server serving public
/// resume content.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(index))
        .route("/health", get(health_check))
        .route("/api/resume", get(get_resume))
        .route("/static/{*file}", get(static_files::serve_static))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Runs the web server until it is shut down.
///
/// # Errors
///
/// Returns an error if the listener cannot bind or the server fails.
pub async fn run_server(state: AppState, addr: SocketAddr) -> anyhow::Result<()> {
    let app = create_router(state);

    info!("Serving resume on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    axum::serve(listener, app).await?;

    Ok(())
}
