use thiserror::Error;

pub type Result<T> = std::result::Result<T, HubError>;

#[derive(Error, Debug)]
pub enum HubError {
    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Unexpected status {status} from {path}")]
    HttpStatus { path: String, status: u16 },

    #[error("Server reported failure for {path}")]
    Unsuccessful { path: String },

    #[error("No config data in response from {path}")]
    MissingData { path: String },

    #[error("Invalid URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },
}

impl HubError {
    pub fn config_error(msg: impl Into<String>) -> Self {
        HubError::ConfigError(msg.into())
    }

    pub fn invalid_url(url: impl Into<String>, reason: impl ToString) -> Self {
        HubError::InvalidUrl {
            url: url.into(),
            reason: reason.to_string(),
        }
    }
}
