use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContactError {
    #[error("Missing required configuration: {0}")]
    NotConfigured(String),

    #[error("Failed to send HTTP request: {0}")]
    HttpError(String),

    #[error("Invalid configuration value: {0}")]
    InvalidConfig(String),
}

impl From<reqwest::Error> for ContactError {
    fn from(error: reqwest::Error) -> Self {
        ContactError::HttpError(error.to_string())
    }
}

impl From<url::ParseError> for ContactError {
    fn from(error: url::ParseError) -> Self {
        ContactError::InvalidConfig(error.to_string())
    }
}
