pub mod coingecko;
mod config;

pub use config::ConnectorConfig;

use async_trait::async_trait;
use common::{models::CoinRecord, Result};

/// Trait defining the interface for market data providers
#[async_trait]
pub trait MarketDataSource: Send + Sync {
    /// Fetch the current top coins by market cap, in provider order.
    ///
    /// Makes exactly one outbound request and never retries.
    async fn fetch_top_markets(&self) -> Result<Vec<CoinRecord>>;
}
