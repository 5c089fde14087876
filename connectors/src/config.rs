use common::{Error, Result};
use std::time::Duration;

use crate::coingecko::COINGECKO_API_URL;

const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration for the market data connector
#[derive(Debug, Clone)]
pub struct ConnectorConfig {
    /// Base URL of the CoinGecko v3 API
    pub base_url: String,
    /// Upper bound on the whole request, connect to last body byte
    pub timeout: Duration,
}

impl Default for ConnectorConfig {
    fn default() -> Self {
        Self {
            base_url: COINGECKO_API_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ConnectorConfig {
    /// Create a connector configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup("COINTABLE_API_URL").unwrap_or_else(|| COINGECKO_API_URL.to_string());

        let timeout_secs = match lookup("COINTABLE_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| {
                    Error::ConfigError(format!(
                        "COINTABLE_TIMEOUT_SECS must be a positive integer, got '{}'",
                        raw
                    ))
                })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            base_url,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = ConnectorConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.base_url, COINGECKO_API_URL);
        assert_eq!(config.timeout, Duration::from_secs(10));
    }

    #[test]
    fn reads_overrides() {
        let config = ConnectorConfig::from_lookup(lookup(&[
            ("COINTABLE_API_URL", "http://localhost:9000"),
            ("COINTABLE_TIMEOUT_SECS", "3"),
        ]))
        .unwrap();
        assert_eq!(config.base_url, "http://localhost:9000");
        assert_eq!(config.timeout, Duration::from_secs(3));
    }

    #[test]
    fn rejects_zero_or_garbage_timeout() {
        for bad in ["0", "-1", "soon"] {
            let err = ConnectorConfig::from_lookup(lookup(&[("COINTABLE_TIMEOUT_SECS", bad)]))
                .unwrap_err();
            assert!(matches!(err, Error::ConfigError(_)), "{bad}: {err}");
        }
    }
}
