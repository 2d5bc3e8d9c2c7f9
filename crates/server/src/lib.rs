//! REST API for the slideshot renderer.

use std::sync::Arc;

use axum::{
    extract::{DefaultBodyLimit, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use slideshot_core::{render_html, RenderError, RenderOptions};
use tower_http::cors::CorsLayer;
use tracing::{error, info};

// ---------------------------------------------------------------------------
// Configuration and state
// ---------------------------------------------------------------------------

/// Server configuration.
pub struct ServerConfig {
    pub port: u16,
    /// Cap on the request body, matching the 10 MB HTML contract.
    pub max_body_bytes: usize,
    /// Options applied to every render.
    pub render: RenderOptions,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            max_body_bytes: 10 * 1024 * 1024,
            render: RenderOptions::default(),
        }
    }
}

impl ServerConfig {
    /// Read configuration from the environment. `PORT` selects the listen
    /// port; unset or unparsable values fall back to the default.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(port) = std::env::var("PORT").ok().and_then(|v| v.parse().ok()) {
            config.port = port;
        }
        config
    }
}

/// Shared server state. Requests are stateless; this only carries config.
pub struct AppState {
    config: ServerConfig,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }
}

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct RenderParams {
    /// The HTML document to render. Optional at the serde level so a
    /// missing field answers 400 with a usage hint instead of a bare 422.
    #[serde(default)]
    pub html: Option<String>,
}

#[derive(Debug, Serialize)]
struct RenderResponse {
    success: bool,
    /// Base64-encoded PNG.
    image: String,
    width: u32,
    height: u32,
    format: &'static str,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

const USAGE_HINT: &str = r#"POST /render with {"html": "<html>...</html>"}"#;

// ---------------------------------------------------------------------------
// Error mapping
// ---------------------------------------------------------------------------

fn map_render_error(e: RenderError) -> (StatusCode, Json<ErrorResponse>) {
    match &e {
        RenderError::EmptyHtml => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: e.to_string(),
                message: Some(USAGE_HINT.into()),
            }),
        ),
        RenderError::Launch(_)
        | RenderError::Navigation(_)
        | RenderError::Timeout(_)
        | RenderError::Capture(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: "Rendering failed".into(),
                message: Some(e.to_string()),
            }),
        ),
    }
}

// ---------------------------------------------------------------------------
// Blocking helper
// ---------------------------------------------------------------------------

/// Run a closure on a blocking thread and return its response.
///
/// `headless_chrome` drives Chrome over a synchronous transport, so a
/// render blocks its thread for the whole browser lifecycle. It must not
/// occupy the async workers.
async fn run_blocking<F>(f: F) -> axum::response::Response
where
    F: FnOnce() -> axum::response::Response + Send + 'static,
{
    match tokio::task::spawn_blocking(f).await {
        Ok(response) => response,
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

/// Build the axum router.
pub fn build_router(state: Arc<AppState>) -> Router {
    let max_body = state.config.max_body_bytes;
    Router::new()
        .route("/", get(health))
        .route("/render", post(render))
        .layer(DefaultBodyLimit::max(max_body))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /  — static readiness payload, no side effects.
async fn health() -> impl IntoResponse {
    Json(json!({
        "status": "ready",
        "message": "Carousel renderer is running",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// POST /render  { html }
async fn render(
    State(state): State<Arc<AppState>>,
    Json(params): Json<RenderParams>,
) -> axum::response::Response {
    let html = match params.html {
        Some(h) if !h.trim().is_empty() => h,
        _ => {
            let body = ErrorResponse {
                error: "HTML content required".into(),
                message: Some(USAGE_HINT.into()),
            };
            return (StatusCode::BAD_REQUEST, Json(body)).into_response();
        }
    };

    let options = state.config.render.clone();
    run_blocking(move || {
        info!(bytes = html.len(), "rendering carousel slide");
        match render_html(&html, &options) {
            Ok(slide) => {
                info!(
                    width = slide.physical_width(),
                    height = slide.physical_height(),
                    "render complete"
                );
                let (width, height) = (slide.width, slide.height);
                let body = RenderResponse {
                    success: true,
                    image: slide.into_base64(),
                    width,
                    height,
                    format: "png",
                };
                (StatusCode::OK, Json(body)).into_response()
            }
            Err(e) => {
                error!("render failed: {}", e);
                let (status, body) = map_render_error(e);
                (status, body).into_response()
            }
        }
    })
    .await
}
