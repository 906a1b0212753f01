use super::ViewState;
use crate::gateway::{Gateway, Transaction};

/// Derived per view, never stored: the same transaction reads as Sent on the
/// sender's screen and Received on the recipient's.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxDirection {
    Sent,
    Received,
}

impl TxDirection {
    pub fn label(&self) -> &'static str {
        match self {
            TxDirection::Sent => "Sent",
            TxDirection::Received => "Received",
        }
    }

    pub fn sign(&self) -> char {
        match self {
            TxDirection::Sent => '-',
            TxDirection::Received => '+',
        }
    }
}

/// Transaction list for one address, newest first as the backend returns it.
pub struct TransactionHistory {
    address: String,
    pub state: ViewState<Vec<Transaction>>,
}

impl TransactionHistory {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            state: ViewState::Loading,
        }
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    /// Fetch the history; doubles as the manual retry and refresh action.
    pub async fn refresh(&mut self, gateway: &Gateway) {
        self.state = ViewState::Loading;
        match gateway.transaction_history(&self.address).await {
            Ok(txs) => self.state = ViewState::Ready(txs),
            Err(err) => {
                log::error!("transaction history fetch failed: {}", err);
                self.state = ViewState::Failed(err.display_or("Failed to load transactions"));
            }
        }
    }

    pub fn direction(&self, tx: &Transaction) -> TxDirection {
        if tx.sender_address == self.address {
            TxDirection::Sent
        } else {
            TxDirection::Received
        }
    }
}
