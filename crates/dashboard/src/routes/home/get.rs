use axum::{extract::State, http::StatusCode, response::Html};
use slog::debug;
use std::sync::Arc;
use tokio::fs;

use crate::AppState;

pub async fn index(app_state: &AppState) -> Result<String, std::io::Error> {
    let index_path = format!("{}/index.html", app_state.ui_dir);
    let file_content = fs::read_to_string(&index_path).await?;
    Ok(file_content.replace("{SERVER_ADDRESS}", &app_state.remote_url))
}

pub async fn index_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Html<String>, (StatusCode, String)> {
    debug!(state.logger, "serving index page");
    index(&state).await.map(Html).map_err(|err| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Unable to read index.html: {}", err),
        )
    })
}
