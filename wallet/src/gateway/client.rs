use reqwest::Response;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::json;

use super::types::*;
use crate::error::WalletError;

/// Every backend response arrives as JSON whatever the HTTP status says, and
/// semantic failures are flagged by a `{"detail": ...}` body rather than by
/// the status code. Decoding branches on the presence of that key, so the
/// dual success/error shape collapses into one `Result` here instead of a
/// "check for detail" scattered across every caller.
#[derive(Deserialize)]
#[serde(untagged)]
enum ApiPayload<T> {
    Detail { detail: String },
    Body(T),
}

/// Maps each domain operation to exactly one backend HTTP call. No retries,
/// no client-side timeouts, no validation of response contents.
#[derive(Clone)]
pub struct Gateway {
    http: reqwest::Client,
    base_url: String,
}

impl Gateway {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, WalletError> {
        // Deliberately ignores resp.status(): the backend returns detail
        // bodies with 400/404 and the contract keys off the body alone.
        match resp.json::<ApiPayload<T>>().await? {
            ApiPayload::Detail { detail } => Err(WalletError::Backend(detail)),
            ApiPayload::Body(body) => Ok(body),
        }
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, WalletError> {
        log::debug!("GET {}", path);
        let resp = self
            .http
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await?;
        Self::decode(resp).await
    }

    async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<T, WalletError> {
        log::debug!("POST {}", path);
        let resp = self
            .http
            .post(format!("{}{}", self.base_url, path))
            .json(body)
            .send()
            .await?;
        Self::decode(resp).await
    }

    async fn put<T: DeserializeOwned>(&self, path: &str) -> Result<T, WalletError> {
        log::debug!("PUT {}", path);
        let resp = self
            .http
            .put(format!("{}{}", self.base_url, path))
            .send()
            .await?;
        Self::decode(resp).await
    }

    async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, WalletError> {
        log::debug!("DELETE {}", path);
        let resp = self
            .http
            .delete(format!("{}{}", self.base_url, path))
            .send()
            .await?;
        Self::decode(resp).await
    }

    // ========================================================================
    // Auth
    // ========================================================================

    pub async fn register(&self, password: &str) -> Result<RegisterResponse, WalletError> {
        self.post("/auth/register", &json!({ "password": password }))
            .await
    }

    /// The backend authenticates by address alone; the password field is sent
    /// empty for wire compatibility.
    pub async fn login(&self, address: &str) -> Result<LoginResponse, WalletError> {
        self.post("/auth/login", &json!({ "address": address, "password": "" }))
            .await
    }

    pub async fn import_wallet(
        &self,
        address: &str,
        private_key: &str,
    ) -> Result<ImportResponse, WalletError> {
        self.post(
            "/auth/import",
            &json!({ "address": address, "private_key": private_key }),
        )
        .await
    }

    pub async fn verify(&self, address: &str) -> Result<VerifyResponse, WalletError> {
        self.get(&format!("/auth/verify/{}", address)).await
    }

    // ========================================================================
    // Wallet
    // ========================================================================

    pub async fn balance(&self, address: &str) -> Result<BalanceResponse, WalletError> {
        self.get(&format!("/wallet/balance/{}", address)).await
    }

    pub async fn wallet_info(&self, address: &str) -> Result<WalletInfo, WalletError> {
        self.get(&format!("/wallet/info/{}", address)).await
    }

    // ========================================================================
    // Transactions
    // ========================================================================

    pub async fn send_transaction(
        &self,
        sender: &str,
        recipient: &str,
        amount: f64,
    ) -> Result<Transaction, WalletError> {
        self.post(
            "/transactions/send",
            &json!({
                "sender_address": sender,
                "recipient_address": recipient,
                "amount": amount,
            }),
        )
        .await
    }

    /// Transactions where the address is sender or recipient, newest first.
    pub async fn transaction_history(
        &self,
        address: &str,
    ) -> Result<Vec<Transaction>, WalletError> {
        self.get(&format!("/transactions/history/{}", address)).await
    }

    pub async fn transaction(&self, tx_hash: &str) -> Result<Transaction, WalletError> {
        self.get(&format!("/transactions/{}", tx_hash)).await
    }

    // ========================================================================
    // Notifications
    // ========================================================================

    pub async fn notifications(
        &self,
        wallet_address: &str,
    ) -> Result<Vec<Notification>, WalletError> {
        self.get(&format!("/notifications/{}", wallet_address)).await
    }

    pub async fn mark_notification_read(&self, id: i64) -> Result<Notification, WalletError> {
        self.put(&format!("/notifications/{}/read", id)).await
    }

    pub async fn create_notification(
        &self,
        wallet_address: &str,
        message: &str,
        kind: NotificationKind,
    ) -> Result<Notification, WalletError> {
        self.post(
            "/notifications/",
            &json!({
                "wallet_address": wallet_address,
                "message": message,
                "type": kind,
            }),
        )
        .await
    }

    pub async fn delete_notification(&self, id: i64) -> Result<DeleteAck, WalletError> {
        self.delete(&format!("/notifications/{}", id)).await
    }
}
