use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Market API returned status {status}: {body}")]
    HttpStatusError { status: u16, body: String },

    #[error("Decode error: {0}")]
    DecodeError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl Error {
    /// Whether the request timed out before a response arrived.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::NetworkError(e) if e.is_timeout())
    }
}
