use thiserror::Error;

#[derive(Error, Debug)]
pub enum WalletError {
    /// Semantic failure declared by the backend in a `detail` payload.
    /// The message is shown to the user verbatim.
    #[error("{0}")]
    Backend(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Client-side form validation failure, caught before any network call.
    #[error("{0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl WalletError {
    /// Message to surface in the UI: backend details and validation messages
    /// verbatim, everything else collapses to the caller's generic text.
    pub fn display_or(&self, fallback: &str) -> String {
        match self {
            WalletError::Backend(detail) => detail.clone(),
            WalletError::Validation(msg) => msg.clone(),
            _ => fallback.to_string(),
        }
    }
}
