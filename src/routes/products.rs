use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    AppState,
    error::Result,
    models::ProductLookup,
    queries::product_queries,
};

/// An unknown id answers `200 {}` rather than 404.
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ProductLookup>> {
    let product = product_queries::find_by_id(state.source.as_ref(), &id).await?;

    if product.is_none() {
        tracing::debug!("No product with id {}", id);
    }

    Ok(Json(product.into()))
}
