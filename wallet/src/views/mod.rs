//! View-local state containers
//!
//! Each view fetches its own slice of backend state, cycles through the three
//! render states, and reconciles mutations locally instead of re-fetching.
//! Views do not notify each other: sending a transaction does not refresh the
//! balance display until that view runs its own refresh.

mod composer;
mod history;
mod notifications;
mod summary;

pub use composer::{CompletionHook, TransactionComposer};
pub use history::{TransactionHistory, TxDirection};
pub use notifications::NotificationPanel;
pub use summary::WalletSummary;

/// The three mutually exclusive render states of every view.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<T> {
    /// Skeleton placeholder while a fetch is in flight.
    Loading,
    /// Fetch failed; the message is shown with a manual retry action.
    Failed(String),
    Ready(T),
}

impl<T> ViewState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ViewState::Failed(msg) => Some(msg),
            _ => None,
        }
    }

    pub fn content(&self) -> Option<&T> {
        match self {
            ViewState::Ready(content) => Some(content),
            _ => None,
        }
    }
}

/// Abbreviate an address or hash for display: `0x1234...abcd`
pub fn format_address(addr: &str) -> String {
    if addr.len() <= 10 {
        return addr.to_string();
    }
    format!("{}...{}", &addr[..6], &addr[addr.len() - 4..])
}
