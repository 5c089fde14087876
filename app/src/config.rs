use common::{Error, Result};
use connectors::ConnectorConfig;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub connector: ConnectorConfig,
    /// Render the logo URL column
    pub show_images: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            connector: ConnectorConfig::default(),
            show_images: true,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let connector = ConnectorConfig::from_env()?;
        let show_images = match std::env::var("COINTABLE_SHOW_IMAGES") {
            Ok(raw) => parse_flag("COINTABLE_SHOW_IMAGES", &raw)?,
            Err(_) => true,
        };

        Ok(Self {
            connector,
            show_images,
        })
    }
}

fn parse_flag(key: &str, raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(Error::ConfigError(format!(
            "{} must be true or false, got '{}'",
            key, raw
        ))),
    }
}
