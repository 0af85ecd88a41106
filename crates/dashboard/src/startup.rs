use std::sync::Arc;

use crate::{index_handler, TemperatureRow};
use axum::{routing::get, Router};
use hyper::Method;
use slog::Logger;
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
};

/// Everything the handlers need, built once at startup. The loaded dataset
/// rides along so the chart endpoints can use it once they exist.
#[derive(Clone)]
pub struct AppState {
    pub logger: Logger,
    pub remote_url: String,
    pub ui_dir: String,
    pub dataset: Arc<Vec<TemperatureRow>>,
}

pub fn app(app_state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET])
        .allow_origin(Any);

    // Unknown paths fall back to the index page under the configured ui folder
    let serve_dir = ServeDir::new(app_state.ui_dir.clone())
        .not_found_service(ServeFile::new(format!("{}/index.html", app_state.ui_dir)));

    Router::new()
        .route("/", get(index_handler))
        .with_state(Arc::new(app_state))
        .nest_service("/ui", serve_dir.clone())
        .fallback_service(serve_dir)
        .layer(cors)
}
