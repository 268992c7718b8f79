use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImageError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Authentication error: {0}")]
    Authentication(String),

    /// The provider answered with a non-success status other than an auth failure.
    #[error("Request error ({status}): {message}")]
    Request {
        status: u16,
        message: String,
        /// Machine-readable code from the provider's error body, when present.
        code: Option<String>,
    },

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Response error: {0}")]
    Response(String),

    #[error("Provider returned no images")]
    EmptyResponse,

    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

impl From<serde_json::Error> for ImageError {
    fn from(err: serde_json::Error) -> Self {
        ImageError::Response(err.to_string())
    }
}

impl ImageError {
    pub fn is_auth(&self) -> bool {
        matches!(self, ImageError::Authentication(_))
    }
}

pub type Result<T> = std::result::Result<T, ImageError>;
