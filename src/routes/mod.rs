mod health;
mod products;
mod shop;

use axum::{routing::get, Router};

use crate::AppState;

pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route("/shop", get(shop::list_products))
        .route("/shop/{category}", get(shop::list_by_category))
        .route("/shop/{category}/{gender}", get(shop::list_by_category_gender))
        .route(
            "/shop/{category}/{gender}/{sub_category}",
            get(shop::list_by_category_gender_sub_category),
        )
        .route("/product/{id}", get(products::get_product))
}
