//! Typed gateway to the wallet backend
//!
//! - One logical operation maps to exactly one HTTP call
//! - Response bodies decode into a `Result` at the boundary

mod client;
mod types;

pub use client::Gateway;
pub use types::{
    BalanceResponse, DeleteAck, ImportResponse, LoginResponse, Notification, NotificationKind,
    RegisterResponse, Transaction, VerifyResponse, WalletInfo,
};
