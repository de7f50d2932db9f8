use thiserror::Error;

/// Everything that can go wrong between sending a request and holding a
/// decoded response.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (connection refused, timeout...)
    #[error("Transport error when fetching {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The backend answered with an `{"error": "..."}` payload
    #[error("{0}")]
    Application(String),

    /// Non-success HTTP status without an error payload
    #[error("Unexpected status {status} for url {url}")]
    Status { status: u16, url: String },

    /// Body was not the JSON shape we expected
    #[error("Could not decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid url: {0}")]
    InvalidUrl(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Error when writing {file_name}: {message}")]
    Export { file_name: String, message: String },

    #[error("Error when writing csv file {file_name}: {source}")]
    Csv {
        file_name: String,
        #[source]
        source: csv::Error,
    },
}

impl ApiError {
    /// Only failures that happened before the backend answered are worth
    /// retrying.
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Transport { .. })
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
