use crate::{ConnectorConfig, MarketDataSource};
use async_trait::async_trait;
use common::{models::CoinRecord, Error, Result};
use tracing::{debug, error};

pub const COINGECKO_API_URL: &str = "https://api.coingecko.com/api/v3";

/// Top 10 coins by market cap, priced in USD, no sparkline data.
const MARKETS_QUERY: [(&str, &str); 5] = [
    ("vs_currency", "usd"),
    ("order", "market_cap_desc"),
    ("per_page", "10"),
    ("page", "1"),
    ("sparkline", "false"),
];

pub struct CoinGeckoConnector {
    client: reqwest::Client,
    base_url: String,
}

impl CoinGeckoConnector {
    pub fn new(config: &ConnectorConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("cointable/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn markets_url(&self) -> String {
        format!("{}/coins/markets", self.base_url)
    }
}

/// Decode a `/coins/markets` response body, keeping response order.
pub fn decode_markets(body: &str) -> Result<Vec<CoinRecord>> {
    serde_json::from_str(body)
        .map_err(|e| Error::DecodeError(format!("Failed to parse CoinGecko markets: {}", e)))
}

#[async_trait]
impl MarketDataSource for CoinGeckoConnector {
    async fn fetch_top_markets(&self) -> Result<Vec<CoinRecord>> {
        let url = self.markets_url();

        debug!("Fetching top markets from CoinGecko: {}", url);

        let response = self
            .client
            .get(&url)
            .query(&MARKETS_QUERY)
            .send()
            .await
            .map_err(|e| {
                error!("CoinGecko request failed: {}", e);
                Error::NetworkError(e)
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            error!("CoinGecko API error: {} - {}", status, error_text);
            return Err(Error::HttpStatusError {
                status: status.as_u16(),
                body: error_text,
            });
        }

        let body = response.text().await.map_err(|e| {
            error!("Failed to read CoinGecko response body: {}", e);
            Error::NetworkError(e)
        })?;

        let coins = decode_markets(&body).map_err(|e| {
            error!("{}", e);
            e
        })?;

        debug!("Received {} markets from CoinGecko", coins.len());

        Ok(coins)
    }
}
