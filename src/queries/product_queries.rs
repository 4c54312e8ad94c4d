use crate::{
    error::Result,
    models::{Product, ProductFilter},
    source::RowSource,
};

/// Every row is mapped before filtering, so one malformed row fails the whole lookup.
async fn load_all(source: &dyn RowSource) -> Result<Vec<Product>> {
    source
        .fetch_rows()
        .await?
        .iter()
        .map(Product::from_row)
        .collect()
}

pub async fn search_products(source: &dyn RowSource, filter: &ProductFilter) -> Result<Vec<Product>> {
    let products: Vec<Product> = load_all(source)
        .await?
        .into_iter()
        .filter(|product| filter.matches(product))
        .collect();

    tracing::debug!("{} products matched {:?}", products.len(), filter);

    Ok(products)
}

/// Ids are compared as text: `07` does not find id 7.
pub async fn find_by_id(source: &dyn RowSource, id: &str) -> Result<Option<Product>> {
    let product = load_all(source)
        .await?
        .into_iter()
        .find(|product| product.id.as_text() == id);

    Ok(product)
}
