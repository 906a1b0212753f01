use chrono::NaiveDateTime;

use super::ViewState;
use crate::gateway::{Gateway, WalletInfo};

/// Wallet summary view: address, balance, and creation date, fetched fresh
/// from the backend rather than computed from the cached session.
pub struct WalletSummary {
    address: String,
    pub state: ViewState<WalletInfo>,
}

impl WalletSummary {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            state: ViewState::Loading,
        }
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    /// Fetch wallet info. Calling this again after a failure is the manual
    /// retry action.
    pub async fn refresh(&mut self, gateway: &Gateway) {
        self.state = ViewState::Loading;
        match gateway.wallet_info(&self.address).await {
            Ok(info) => self.state = ViewState::Ready(info),
            Err(err) => {
                log::error!("wallet info fetch failed: {}", err);
                self.state = ViewState::Failed(err.display_or("Failed to load wallet info"));
            }
        }
    }

    /// Balance formatted the way the UI shows it.
    pub fn balance_line(info: &WalletInfo) -> String {
        format!("{:.4} ETH", info.balance)
    }

    /// Creation date for display. The backend sends an ISO-8601 timestamp
    /// without an offset; anything unparseable shows as "N/A".
    pub fn created_line(info: &WalletInfo) -> String {
        NaiveDateTime::parse_from_str(&info.created_at, "%Y-%m-%dT%H:%M:%S%.f")
            .map(|dt| dt.date().to_string())
            .unwrap_or_else(|_| "N/A".to_string())
    }
}
