/// Wallet backend API wire types
///
/// These match the real service's JSON bodies so clients can consume the
/// mock transparently. Timestamps serialize as ISO-8601 without an offset,
/// the way the real service emits them.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::ledger::{NotificationRecord, TransactionRecord};

pub fn isoformat(dt: NaiveDateTime) -> String {
    dt.format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
}

// ============================================================================
// Auth
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub address: String,
    #[serde(default)]
    pub password: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ImportRequest {
    pub address: String,
    pub private_key: String,
}

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub address: String,
    pub balance: f64,
    pub private_key: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub address: String,
    pub balance: f64,
}

#[derive(Debug, Serialize)]
pub struct ImportResponse {
    pub address: String,
    pub balance: f64,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct VerifyResponse {
    pub exists: bool,
    pub address: String,
}

// ============================================================================
// Wallet
// ============================================================================

#[derive(Debug, Serialize)]
pub struct BalanceResponse {
    pub address: String,
    pub balance: f64,
}

#[derive(Debug, Serialize)]
pub struct WalletInfoResponse {
    pub address: String,
    pub balance: f64,
    pub created_at: String,
}

// ============================================================================
// Transactions
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct SendRequest {
    pub sender_address: String,
    pub recipient_address: String,
    pub amount: f64,
}

#[derive(Debug, Serialize)]
pub struct TransactionResponse {
    pub id: i64,
    pub sender_address: String,
    pub recipient_address: String,
    pub amount: f64,
    pub status: String,
    pub transaction_hash: String,
    pub timestamp: String,
}

impl From<TransactionRecord> for TransactionResponse {
    fn from(tx: TransactionRecord) -> Self {
        Self {
            id: tx.id,
            sender_address: tx.sender_address,
            recipient_address: tx.recipient_address,
            amount: tx.amount,
            status: tx.status,
            transaction_hash: tx.transaction_hash,
            timestamp: isoformat(tx.timestamp),
        }
    }
}

// ============================================================================
// Notifications
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct CreateNotificationRequest {
    pub wallet_address: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Serialize)]
pub struct NotificationResponse {
    pub id: i64,
    pub wallet_address: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub read: bool,
    pub created_at: String,
}

impl From<NotificationRecord> for NotificationResponse {
    fn from(notif: NotificationRecord) -> Self {
        Self {
            id: notif.id,
            wallet_address: notif.wallet_address,
            message: notif.message,
            kind: notif.kind,
            read: notif.read,
            created_at: isoformat(notif.created_at),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: String,
}
