use std::sync::Arc;

use crate::{config::SheetsConfig, error::Result, services::SheetsClient};

use super::RowSource;

pub async fn connect(config: &SheetsConfig) -> Result<Arc<dyn RowSource>> {
    let client = SheetsClient::authorize(config).await?;
    client.open().await?;

    tracing::info!(
        "Product source ready: worksheet '{}' of spreadsheet {}",
        config.worksheet,
        config.spreadsheet_id
    );

    Ok(Arc::new(client))
}

pub async fn check_health(source: &dyn RowSource) -> Result<usize> {
    let rows = source.fetch_rows().await?;
    Ok(rows.len())
}
