//! Wire types for the wallet backend API
//!
//! These match the backend's JSON bodies field for field so responses decode
//! without any mapping layer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// POST /auth/register response. The private key is returned here and never
/// again; subsequent logins only yield address and balance.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterResponse {
    pub address: String,
    pub balance: f64,
    pub private_key: String,
    #[serde(default)]
    pub message: String,
}

/// POST /auth/login response. The token is part of the wire contract but the
/// client does not retain it; no endpoint currently requires it.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
    pub address: String,
    pub balance: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ImportResponse {
    pub address: String,
    pub balance: f64,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VerifyResponse {
    pub exists: bool,
    pub address: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BalanceResponse {
    pub address: String,
    pub balance: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WalletInfo {
    pub address: String,
    pub balance: f64,
    pub created_at: String,
}

/// Immutable once created. Direction (sent/received) is not stored; views
/// derive it by comparing `sender_address` to the address they display.
#[derive(Debug, Clone, Deserialize)]
pub struct Transaction {
    pub id: i64,
    pub sender_address: String,
    pub recipient_address: String,
    pub amount: f64,
    pub status: String,
    pub transaction_hash: String,
    pub timestamp: String,
}

/// Backend notification categories. Anything unrecognized decodes as `Info`
/// so an unknown type renders with the default styling instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
    Warning,
    #[serde(other)]
    Info,
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
            NotificationKind::Warning => "warning",
            NotificationKind::Info => "info",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Notification {
    pub id: i64,
    pub wallet_address: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub read: bool,
    pub created_at: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DeleteAck {
    pub message: String,
}
