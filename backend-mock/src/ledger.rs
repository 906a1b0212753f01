//! In-memory wallet ledger
//!
//! Holds the canonical copy of every entity the client renders. All mutation
//! goes through one mutex, so a transfer adjusts both balances atomically.

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::NaiveDateTime;
use rand::RngCore;
use thiserror::Error;

/// Every new or imported wallet starts with this balance, matching how the
/// real service seeds accounts.
pub const INITIAL_BALANCE: f64 = 3.34;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Wallet not found")]
    WalletNotFound,

    #[error("Sender wallet not found")]
    SenderNotFound,

    #[error("Recipient wallet not found")]
    RecipientNotFound,

    #[error("Insufficient balance")]
    InsufficientBalance,

    #[error("Transaction not found")]
    TransactionNotFound,

    #[error("Notification not found")]
    NotificationNotFound,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WalletRecord {
    pub address: String,
    pub private_key: String,
    pub balance: f64,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRecord {
    pub id: i64,
    pub sender_address: String,
    pub recipient_address: String,
    pub amount: f64,
    pub status: String,
    pub transaction_hash: String,
    pub timestamp: NaiveDateTime,
}

#[derive(Debug, Clone)]
pub struct NotificationRecord {
    pub id: i64,
    pub wallet_address: String,
    pub message: String,
    pub kind: String,
    pub read: bool,
    pub created_at: NaiveDateTime,
}

#[derive(Default)]
struct LedgerState {
    wallets: HashMap<String, WalletRecord>,
    transactions: Vec<TransactionRecord>,
    notifications: Vec<NotificationRecord>,
    next_tx_id: i64,
    next_notification_id: i64,
}

pub struct MockLedger {
    state: Mutex<LedgerState>,
}

impl MockLedger {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(LedgerState::default()),
        }
    }

    /// Create a wallet with a fresh address and private key. The key is only
    /// handed out here; login never returns it.
    pub fn register(&self) -> WalletRecord {
        let mut state = self.state.lock().unwrap();
        let wallet = WalletRecord {
            address: random_address(),
            private_key: random_private_key(),
            balance: INITIAL_BALANCE,
            created_at: now(),
        };
        state.wallets.insert(wallet.address.clone(), wallet.clone());
        wallet
    }

    pub fn login(&self, address: &str) -> Result<WalletRecord, LedgerError> {
        self.state
            .lock()
            .unwrap()
            .wallets
            .get(address)
            .cloned()
            .ok_or(LedgerError::WalletNotFound)
    }

    /// Import a wallet by address and key. A known address is returned
    /// unchanged; the boolean reports whether it already existed.
    pub fn import(&self, address: &str, private_key: &str) -> (WalletRecord, bool) {
        let mut state = self.state.lock().unwrap();
        if let Some(existing) = state.wallets.get(address) {
            return (existing.clone(), true);
        }
        let wallet = WalletRecord {
            address: address.to_string(),
            private_key: private_key.to_string(),
            balance: INITIAL_BALANCE,
            created_at: now(),
        };
        state.wallets.insert(wallet.address.clone(), wallet.clone());
        (wallet, false)
    }

    pub fn exists(&self, address: &str) -> bool {
        self.state.lock().unwrap().wallets.contains_key(address)
    }

    pub fn wallet(&self, address: &str) -> Result<WalletRecord, LedgerError> {
        self.state
            .lock()
            .unwrap()
            .wallets
            .get(address)
            .cloned()
            .ok_or(LedgerError::WalletNotFound)
    }

    /// Move funds between two wallets and record the completed transaction.
    pub fn send(
        &self,
        sender: &str,
        recipient: &str,
        amount: f64,
    ) -> Result<TransactionRecord, LedgerError> {
        let mut state = self.state.lock().unwrap();

        let sender_balance = state
            .wallets
            .get(sender)
            .ok_or(LedgerError::SenderNotFound)?
            .balance;
        if !state.wallets.contains_key(recipient) {
            return Err(LedgerError::RecipientNotFound);
        }
        if sender_balance < amount {
            return Err(LedgerError::InsufficientBalance);
        }

        state.next_tx_id += 1;
        let tx = TransactionRecord {
            id: state.next_tx_id,
            sender_address: sender.to_string(),
            recipient_address: recipient.to_string(),
            amount,
            // All transfers settle immediately in the mock.
            status: "completed".to_string(),
            transaction_hash: random_tx_hash(),
            timestamp: now(),
        };

        if let Some(w) = state.wallets.get_mut(sender) {
            w.balance -= amount;
        }
        if let Some(w) = state.wallets.get_mut(recipient) {
            w.balance += amount;
        }
        state.transactions.push(tx.clone());
        Ok(tx)
    }

    /// Transactions where the address is sender or recipient, newest first.
    pub fn history(&self, address: &str) -> Vec<TransactionRecord> {
        let state = self.state.lock().unwrap();
        let mut txs: Vec<TransactionRecord> = state
            .transactions
            .iter()
            .filter(|t| t.sender_address == address || t.recipient_address == address)
            .cloned()
            .collect();
        txs.reverse();
        txs
    }

    pub fn transaction(&self, tx_hash: &str) -> Result<TransactionRecord, LedgerError> {
        self.state
            .lock()
            .unwrap()
            .transactions
            .iter()
            .find(|t| t.transaction_hash == tx_hash)
            .cloned()
            .ok_or(LedgerError::TransactionNotFound)
    }

    pub fn notifications_for(&self, address: &str) -> Vec<NotificationRecord> {
        let state = self.state.lock().unwrap();
        let mut notifs: Vec<NotificationRecord> = state
            .notifications
            .iter()
            .filter(|n| n.wallet_address == address)
            .cloned()
            .collect();
        notifs.reverse();
        notifs
    }

    pub fn create_notification(
        &self,
        address: &str,
        message: &str,
        kind: &str,
    ) -> NotificationRecord {
        let mut state = self.state.lock().unwrap();
        state.next_notification_id += 1;
        let notif = NotificationRecord {
            id: state.next_notification_id,
            wallet_address: address.to_string(),
            message: message.to_string(),
            kind: kind.to_string(),
            read: false,
            created_at: now(),
        };
        state.notifications.push(notif.clone());
        notif
    }

    pub fn mark_read(&self, id: i64) -> Result<NotificationRecord, LedgerError> {
        let mut state = self.state.lock().unwrap();
        let notif = state
            .notifications
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or(LedgerError::NotificationNotFound)?;
        notif.read = true;
        Ok(notif.clone())
    }

    pub fn delete_notification(&self, id: i64) -> Result<(), LedgerError> {
        let mut state = self.state.lock().unwrap();
        let before = state.notifications.len();
        state.notifications.retain(|n| n.id != id);
        if state.notifications.len() == before {
            return Err(LedgerError::NotificationNotFound);
        }
        Ok(())
    }
}

impl Default for MockLedger {
    fn default() -> Self {
        Self::new()
    }
}

fn now() -> NaiveDateTime {
    chrono::Utc::now().naive_utc()
}

fn random_hex(n_bytes: usize) -> String {
    let mut bytes = vec![0u8; n_bytes];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// Mock Ethereum-style address: 0x + 40 hex characters
fn random_address() -> String {
    format!("0x{}", random_hex(20))
}

/// Mock private key: 64 hex characters
fn random_private_key() -> String {
    random_hex(32)
}

/// Mock transaction hash: 0x + 64 hex characters
fn random_tx_hash() -> String {
    format!("0x{}", random_hex(32))
}
