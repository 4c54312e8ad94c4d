use axum::{
    Json,
    extract::{Path, Query, State},
};

use crate::{
    AppState,
    error::Result,
    models::{ProductFilter, ProductSummary, ShopQuery},
    queries::product_queries,
};

async fn list(state: &AppState, filter: ProductFilter) -> Result<Json<Vec<ProductSummary>>> {
    let products = product_queries::search_products(state.source.as_ref(), &filter).await?;

    Ok(Json(products.into_iter().map(ProductSummary::from).collect()))
}

pub async fn list_products(
    State(state): State<AppState>,
    Query(params): Query<ShopQuery>,
) -> Result<Json<Vec<ProductSummary>>> {
    list(&state, params.into()).await
}

pub async fn list_by_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<Json<Vec<ProductSummary>>> {
    list(&state, ProductFilter::all().category(category)).await
}

pub async fn list_by_category_gender(
    State(state): State<AppState>,
    Path((category, gender)): Path<(String, String)>,
) -> Result<Json<Vec<ProductSummary>>> {
    list(&state, ProductFilter::all().category(category).gender(gender)).await
}

pub async fn list_by_category_gender_sub_category(
    State(state): State<AppState>,
    Path((category, gender, sub_category)): Path<(String, String, String)>,
) -> Result<Json<Vec<ProductSummary>>> {
    let filter = ProductFilter::all()
        .category(category)
        .gender(gender)
        .sub_category(sub_category);

    list(&state, filter).await
}
