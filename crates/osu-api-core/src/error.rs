use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid client ID (must be numeric): {0}")]
    InvalidClientId(String),

    #[error("Invalid client secret (must be 40 alphanumeric characters)")]
    InvalidClientSecret,

    #[error("No credentials found: set {0}")]
    MissingCredentials(&'static str),

    #[error("Invalid API key (must be 40 lowercase hex characters)")]
    InvalidApiKeyFormat,

    #[error("The server rejected the API key")]
    InvalidApiKey,

    #[error("Token exchange failed: HTTP {status}")]
    TokenExchange { status: u16 },

    #[error("Token cache is not readable: {0}")]
    CacheNotReadable(String),

    #[error("Token cache is not writable: {0}")]
    CacheNotWritable(String),

    #[error("Not found")]
    NotFound,

    #[error("Unable to parse response: {0}")]
    UnexpectedResponse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Http(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        let message = if e.is_timeout() {
            format!("Request timed out: {}", e)
        } else if e.is_connect() {
            format!("Connection failed: {}", e)
        } else if e.is_request() {
            format!("Request error: {}", e)
        } else if let Some(status) = e.status() {
            format!("HTTP {} error: {}", status.as_u16(), e)
        } else {
            format!("HTTP error: {}", e)
        };
        Error::Http(message)
    }
}
