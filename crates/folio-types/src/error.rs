use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FolioError {
    #[error("Provider error (HTTP {status}): {detail}")]
    Provider { status: u16, detail: String },

    /// The answer endpoint is missing its server-side credential.
    /// The detail is kept for logs and never displayed.
    #[error("configuration_error")]
    Config(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Timeout after {0}ms")]
    Timeout(u64),

    #[error("Cancelled")]
    Cancelled,

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("JS interop error: {0}")]
    JsInterop(String),
}

impl From<serde_json::Error> for FolioError {
    fn from(e: serde_json::Error) -> Self {
        FolioError::Serialization(e.to_string())
    }
}
