pub mod handlers;
pub mod pages;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

/// Uploads are buffered fully in memory; cap request bodies well above the
/// reports this tool is meant for.
const MAX_UPLOAD_BYTES: usize = 32 * 1024 * 1024;

pub fn router() -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/calculator", post(handlers::calculator))
        .route("/merge", post(handlers::merge))
        .route("/api/status", get(handlers::status))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
}
