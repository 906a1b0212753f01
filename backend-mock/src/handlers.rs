/// Axum HTTP handlers for the wallet backend API endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::sync::Arc;

use crate::ledger::{LedgerError, MockLedger};
use crate::types::*;

/// Shared application state
pub type AppState = Arc<MockLedger>;

/// Semantic failures leave through the real service's `detail` convention:
/// a JSON body with one `detail` string plus a 4xx status.
pub struct ApiError {
    status: StatusCode,
    detail: String,
}

impl ApiError {
    fn bad_request(detail: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            detail: detail.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "detail": self.detail }))).into_response()
    }
}

impl From<LedgerError> for ApiError {
    fn from(err: LedgerError) -> Self {
        let status = match err {
            LedgerError::InsufficientBalance => StatusCode::BAD_REQUEST,
            _ => StatusCode::NOT_FOUND,
        };
        Self {
            status,
            detail: err.to_string(),
        }
    }
}

// ============================================================================
// Auth
// ============================================================================

/// POST /auth/register
pub async fn register(
    State(ledger): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), ApiError> {
    if req.password.len() < 6 {
        return Err(ApiError::bad_request(
            "Password must be at least 6 characters",
        ));
    }

    let wallet = ledger.register();
    log::info!("Registered wallet {}", wallet.address);

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            address: wallet.address,
            balance: wallet.balance,
            private_key: wallet.private_key,
            message: "Wallet created successfully! Save your private key securely.".to_string(),
        }),
    ))
}

/// POST /auth/login
///
/// Authenticates by address alone; the password field is accepted and
/// ignored, like the real service.
pub async fn login(
    State(ledger): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let wallet = ledger.login(&req.address)?;
    log::info!("Login for wallet {}", wallet.address);

    Ok(Json(TokenResponse {
        access_token: mock_token(),
        token_type: "bearer".to_string(),
        address: wallet.address,
        balance: wallet.balance,
    }))
}

/// POST /auth/import
pub async fn import_wallet(
    State(ledger): State<AppState>,
    Json(req): Json<ImportRequest>,
) -> Result<Json<ImportResponse>, ApiError> {
    let (wallet, existed) = ledger.import(&req.address, &req.private_key);
    let message = if existed {
        "Wallet already exists and has been loaded"
    } else {
        "Wallet imported successfully"
    };
    log::info!("Import for wallet {} (existed: {})", wallet.address, existed);

    Ok(Json(ImportResponse {
        address: wallet.address,
        balance: wallet.balance,
        message: message.to_string(),
    }))
}

/// GET /auth/verify/{address}
pub async fn verify(
    State(ledger): State<AppState>,
    Path(address): Path<String>,
) -> Json<VerifyResponse> {
    Json(VerifyResponse {
        exists: ledger.exists(&address),
        address,
    })
}

// ============================================================================
// Wallet
// ============================================================================

/// GET /wallet/balance/{address}
pub async fn get_balance(
    State(ledger): State<AppState>,
    Path(address): Path<String>,
) -> Result<Json<BalanceResponse>, ApiError> {
    let wallet = ledger.wallet(&address)?;
    Ok(Json(BalanceResponse {
        address: wallet.address,
        balance: wallet.balance,
    }))
}

/// GET /wallet/info/{address}
pub async fn get_wallet_info(
    State(ledger): State<AppState>,
    Path(address): Path<String>,
) -> Result<Json<WalletInfoResponse>, ApiError> {
    let wallet = ledger.wallet(&address)?;
    Ok(Json(WalletInfoResponse {
        address: wallet.address,
        balance: wallet.balance,
        created_at: isoformat(wallet.created_at),
    }))
}

// ============================================================================
// Transactions
// ============================================================================

/// POST /transactions/send
pub async fn send_transaction(
    State(ledger): State<AppState>,
    Json(req): Json<SendRequest>,
) -> Result<(StatusCode, Json<TransactionResponse>), ApiError> {
    if !(req.amount > 0.0) {
        return Err(ApiError::bad_request("Amount must be greater than 0"));
    }

    let tx = ledger.send(&req.sender_address, &req.recipient_address, req.amount)?;
    log::info!(
        "Transfer {} ETH from {} to {} ({})",
        tx.amount,
        tx.sender_address,
        tx.recipient_address,
        tx.transaction_hash
    );

    Ok((StatusCode::CREATED, Json(tx.into())))
}

/// GET /transactions/history/{address}
pub async fn get_history(
    State(ledger): State<AppState>,
    Path(address): Path<String>,
) -> Json<Vec<TransactionResponse>> {
    let txs = ledger
        .history(&address)
        .into_iter()
        .map(TransactionResponse::from)
        .collect();
    Json(txs)
}

/// GET /transactions/{tx_hash}
pub async fn get_transaction(
    State(ledger): State<AppState>,
    Path(tx_hash): Path<String>,
) -> Result<Json<TransactionResponse>, ApiError> {
    let tx = ledger.transaction(&tx_hash)?;
    Ok(Json(tx.into()))
}

// ============================================================================
// Notifications
// ============================================================================

/// GET /notifications/{wallet_address}
pub async fn get_notifications(
    State(ledger): State<AppState>,
    Path(wallet_address): Path<String>,
) -> Json<Vec<NotificationResponse>> {
    let notifs = ledger
        .notifications_for(&wallet_address)
        .into_iter()
        .map(NotificationResponse::from)
        .collect();
    Json(notifs)
}

/// PUT /notifications/{id}/read
pub async fn mark_notification_read(
    State(ledger): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<NotificationResponse>, ApiError> {
    let notif = ledger.mark_read(id)?;
    Ok(Json(notif.into()))
}

/// POST /notifications/
pub async fn create_notification(
    State(ledger): State<AppState>,
    Json(req): Json<CreateNotificationRequest>,
) -> (StatusCode, Json<NotificationResponse>) {
    let notif = ledger.create_notification(&req.wallet_address, &req.message, &req.kind);
    (StatusCode::CREATED, Json(notif.into()))
}

/// DELETE /notifications/{id}
pub async fn delete_notification(
    State(ledger): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<DeleteResponse>, ApiError> {
    ledger.delete_notification(id)?;
    Ok(Json(DeleteResponse {
        message: "Notification deleted successfully".to_string(),
    }))
}

fn mock_token() -> String {
    use rand::RngCore;
    let mut bytes = [0u8; 16];
    rand::thread_rng().fill_bytes(&mut bytes);
    format!("mock-token-{}", hex::encode(bytes))
}
