use thiserror::Error;

#[derive(Debug, Error)]
pub enum MidjourneyError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Network, TLS or timeout failure reported by the HTTP transport.
    #[error("Request error: {0}")]
    RequestError(#[from] reqwest::Error),

    /// The outbound body could not be built; nothing was sent.
    #[error("Encode error: {0}")]
    EncodeError(String),

    #[error("Decode error: {0}")]
    DecodeError(#[from] serde_json::Error),

    /// Only produced when the client runs with `strict_status` enabled.
    #[error("API error ({status}): {body}")]
    ApiError { status: u16, body: String },
}

impl MidjourneyError {
    pub fn is_transport(&self) -> bool {
        matches!(self, MidjourneyError::RequestError(_))
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, MidjourneyError::DecodeError(_))
    }
}

impl From<std::io::Error> for MidjourneyError {
    fn from(e: std::io::Error) -> Self {
        MidjourneyError::EncodeError(format!("failed to read image: {}", e))
    }
}

pub type Result<T> = std::result::Result<T, MidjourneyError>;
