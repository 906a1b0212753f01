/// Mock Web3 Wallet Client
///
/// Client for the mock wallet backend: authenticates a wallet, persists the
/// session across restarts, and drives balance/transaction/notification views
/// through a typed HTTP gateway. All ledger logic lives in the backend; this
/// crate renders state and issues requests.

pub mod config;
pub mod controller;
pub mod error;
pub mod gateway;
pub mod session;
pub mod views;

pub use config::ClientConfig;
pub use controller::SessionController;
pub use error::WalletError;
pub use gateway::Gateway;
pub use session::{Session, SessionStore};
