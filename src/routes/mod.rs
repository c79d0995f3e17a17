//! HTTP routes
//!
//! - `/` - Home page reflecting the last extractions
//! - `/upload` - Multipart upload; extracts text and updates the store
//! - `/uploads/{filename}` - Previously uploaded files
//! - `/ask` - Question answering over the active extraction
//! - `/api/health` - Health check

pub mod ask;
pub mod files;
pub mod health;
pub mod ui;

use axum::{extract::DefaultBodyLimit, Router};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::middleware::apply_cors;
use crate::models::AppState;

/// Create the main application router
pub fn create_router(state: AppState) -> Router {
    info!(
        upload_dir = %state.config.storage.upload_dir.display(),
        "Creating application router"
    );

    let body_limit = state.config.storage.max_upload_bytes;
    let origins = state.config.server.cors_allowed_origins.clone();

    let router = Router::new()
        .merge(ui::router())
        .merge(files::router(&state.config.storage.upload_dir))
        .merge(ask::router())
        .merge(health::router())
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    apply_cors(router, &origins)
}
