use std::sync::Arc;

use axum::{http::Method, Router};
use tower_http::cors::{Any, CorsLayer};

use crate::{
    config::SheetsConfig,
    error::Result,
    routes,
    source::{self, RowSource},
};

#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn RowSource>,
}

impl AppState {
    /// Authorizes once and opens the worksheet; the handle is shared by every request.
    pub async fn connect(config: &SheetsConfig) -> Result<Self> {
        let source = source::connect(config).await?;
        Ok(Self { source })
    }
}

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([http::header::CONTENT_TYPE])
        .allow_origin(Any);

    routes::create_router()
        .layer(cors)
        .with_state(state)
}
