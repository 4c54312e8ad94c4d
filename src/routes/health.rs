use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use crate::{error::Result, source, AppState};

pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "status": "ok" })))
}

pub async fn readiness_check(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let rows = source::check_health(state.source.as_ref()).await?;
    tracing::debug!("Readiness fetch returned {} rows", rows);

    Ok((
        StatusCode::OK,
        Json(json!({
            "status": "ready",
            "source": "connected"
        })),
    ))
}
