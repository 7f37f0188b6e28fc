//! Error types for the healthcheck plugin

/// Errors that can occur while running a healthcheck command
#[derive(Debug, thiserror::Error)]
pub enum HealthcheckError {
    #[error("missing {0}")]
    MissingEnv(String),

    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("proxy returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Invalid header value: {0}")]
    InvalidHeader(String),

    #[error("JSON encode error: {0}")]
    Json(#[from] serde_json::Error),
}

impl HealthcheckError {
    /// Process exit code reported for this error
    pub fn exit_code(&self) -> u8 {
        match self {
            HealthcheckError::MissingEnv(_) => 2,
            _ => 1,
        }
    }
}

/// Result type alias for healthcheck operations
pub type Result<T> = std::result::Result<T, HealthcheckError>;
