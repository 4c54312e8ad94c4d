mod connection;

use async_trait::async_trait;

use crate::{error::Result, models::SheetRow};

pub use connection::{check_health, connect};

/// Row-oriented read access to the remote product table.
#[async_trait]
pub trait RowSource: Send + Sync {
    /// Returns every row currently in the table, in source order.
    async fn fetch_rows(&self) -> Result<Vec<SheetRow>>;
}
