use serde::{Deserialize, Serialize};

/// One row of the market snapshot.
///
/// Field names follow the CoinGecko `/coins/markets` payload on the wire.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CoinRecord {
    /// Unique identifier for the coin (e.g., "bitcoin", "ethereum")
    pub id: String,
    /// Human-readable name (e.g., "Bitcoin", "Ethereum")
    pub name: String,
    /// Ticker symbol as sent upstream, usually lowercase (e.g., "btc")
    pub symbol: String,
    /// Logo URL
    #[serde(rename = "image")]
    pub image_url: String,
    /// Price in USD
    pub current_price: f64,
    /// Market capitalisation in USD
    pub market_cap: f64,
    /// 24h traded volume in USD
    pub total_volume: f64,
    /// Signed 24h price change in percent
    #[serde(rename = "price_change_percentage_24h")]
    pub price_change_percent_24h: f64,
}
