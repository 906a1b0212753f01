/// Client configuration from environment variables
///
/// Controls the backend API endpoint and where the session file lives.

use std::env;

#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Base URL of the wallet backend API
    pub api_base_url: String,
    /// Directory holding the persisted session
    pub data_dir: String,
}

impl ClientConfig {
    /// Load configuration from environment variables
    ///
    /// Environment variables:
    /// - `API_BASE_URL`: wallet backend endpoint (default: http://localhost:8000)
    /// - `WALLET_DATA_DIR`: directory for the session file (default: ./wallet-data)
    pub fn from_env() -> Self {
        let api_base_url =
            env::var("API_BASE_URL").unwrap_or_else(|_| "http://localhost:8000".to_string());
        log::info!("Backend API URL: {}", api_base_url);

        let data_dir =
            env::var("WALLET_DATA_DIR").unwrap_or_else(|_| "./wallet-data".to_string());

        Self {
            api_base_url,
            data_dir,
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8000".to_string(),
            data_dir: "./wallet-data".to_string(),
        }
    }
}
