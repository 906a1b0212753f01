/// Transaction integration tests: the composer's validation and submission
/// flow, history direction, and the wallet summary, all against the in-memory
/// mock backend.

mod common;

use std::sync::{Arc, Mutex};

use common::TestEnvironment;
use wallet::views::{TransactionComposer, TransactionHistory, TxDirection, ViewState, WalletSummary};

#[tokio::test]
async fn send_updates_balances_and_clears_the_form() {
    let env = TestEnvironment::new().await.unwrap();
    let sender = env.gateway.register("hunter22").await.unwrap();
    let recipient = env.gateway.register("hunter22").await.unwrap();

    let mut composer = TransactionComposer::new(sender.address.clone());
    composer.recipient_address = recipient.address.clone();
    composer.amount = "1.5".to_string();
    composer.submit(&env.gateway).await;

    let success = composer.success.clone().expect("send should succeed");
    assert!(success.starts_with("Transaction sent successfully! Hash: 0x"));
    assert!(composer.recipient_address.is_empty());
    assert!(composer.amount.is_empty());

    let sender_balance = env.gateway.balance(&sender.address).await.unwrap().balance;
    let recipient_balance = env
        .gateway
        .balance(&recipient.address)
        .await
        .unwrap()
        .balance;
    assert!((sender_balance - 1.84).abs() < 1e-9);
    assert!((recipient_balance - 4.84).abs() < 1e-9);
}

#[tokio::test]
async fn completion_hook_receives_the_transaction_hash() {
    let env = TestEnvironment::new().await.unwrap();
    let sender = env.gateway.register("hunter22").await.unwrap();
    let recipient = env.gateway.register("hunter22").await.unwrap();

    let seen: Arc<Mutex<Option<String>>> = Arc::new(Mutex::new(None));
    let seen_by_hook = seen.clone();

    let mut composer = TransactionComposer::new(sender.address.clone())
        .with_completion_hook(Box::new(move |hash| {
            *seen_by_hook.lock().unwrap() = Some(hash.to_string());
        }));
    composer.recipient_address = recipient.address.clone();
    composer.amount = "0.25".to_string();
    composer.submit(&env.gateway).await;

    let hash = seen.lock().unwrap().clone().expect("hook not invoked");
    let tx = env.gateway.transaction(&hash).await.unwrap();
    assert_eq!(tx.sender_address, sender.address);
    assert_eq!(tx.status, "completed");
}

#[tokio::test]
async fn invalid_amount_is_rejected_without_issuing_a_request() {
    let env = TestEnvironment::new().await.unwrap();
    let sender = env.gateway.register("hunter22").await.unwrap();
    let recipient = env.gateway.register("hunter22").await.unwrap();

    let mut composer = TransactionComposer::new(sender.address.clone());
    composer.recipient_address = recipient.address.clone();
    composer.amount = "-1".to_string();
    composer.submit(&env.gateway).await;

    assert_eq!(
        composer.error.as_deref(),
        Some("Amount must be greater than 0")
    );
    // Nothing reached the backend.
    let history = env
        .gateway
        .transaction_history(&sender.address)
        .await
        .unwrap();
    assert!(history.is_empty());
}

#[tokio::test]
async fn empty_recipient_is_rejected_without_issuing_a_request() {
    let env = TestEnvironment::new().await.unwrap();
    let sender = env.gateway.register("hunter22").await.unwrap();

    let mut composer = TransactionComposer::new(sender.address.clone());
    composer.amount = "1.0".to_string();
    composer.submit(&env.gateway).await;

    assert_eq!(composer.error.as_deref(), Some("Please fill in all fields"));
    let history = env
        .gateway
        .transaction_history(&sender.address)
        .await
        .unwrap();
    assert!(history.is_empty());
}

#[tokio::test]
async fn insufficient_balance_detail_renders_verbatim() {
    let env = TestEnvironment::new().await.unwrap();
    let sender = env.gateway.register("hunter22").await.unwrap();
    let recipient = env.gateway.register("hunter22").await.unwrap();

    let mut composer = TransactionComposer::new(sender.address.clone());
    composer.recipient_address = recipient.address.clone();
    composer.amount = "10".to_string();
    composer.submit(&env.gateway).await;

    assert_eq!(composer.error.as_deref(), Some("Insufficient balance"));
    // The form keeps its contents so the user can correct the amount.
    assert_eq!(composer.recipient_address, recipient.address);
}

#[tokio::test]
async fn unknown_recipient_detail_renders_verbatim() {
    let env = TestEnvironment::new().await.unwrap();
    let sender = env.gateway.register("hunter22").await.unwrap();

    let mut composer = TransactionComposer::new(sender.address.clone());
    composer.recipient_address = "0x2222222222222222222222222222222222222222".to_string();
    composer.amount = "0.5".to_string();
    composer.submit(&env.gateway).await;

    assert_eq!(
        composer.error.as_deref(),
        Some("Recipient wallet not found")
    );
}

#[tokio::test]
async fn history_derives_direction_per_viewed_address() {
    let env = TestEnvironment::new().await.unwrap();
    let a = env.gateway.register("hunter22").await.unwrap();
    let b = env.gateway.register("hunter22").await.unwrap();

    env.gateway
        .send_transaction(&a.address, &b.address, 1.0)
        .await
        .unwrap();

    let mut sender_view = TransactionHistory::new(a.address.clone());
    sender_view.refresh(&env.gateway).await;
    let txs = sender_view.state.content().unwrap();
    assert_eq!(txs.len(), 1);
    assert_eq!(sender_view.direction(&txs[0]), TxDirection::Sent);

    let mut recipient_view = TransactionHistory::new(b.address.clone());
    recipient_view.refresh(&env.gateway).await;
    let txs = recipient_view.state.content().unwrap();
    assert_eq!(recipient_view.direction(&txs[0]), TxDirection::Received);
}

#[tokio::test]
async fn history_is_newest_first() {
    let env = TestEnvironment::new().await.unwrap();
    let a = env.gateway.register("hunter22").await.unwrap();
    let b = env.gateway.register("hunter22").await.unwrap();

    let first = env
        .gateway
        .send_transaction(&a.address, &b.address, 0.5)
        .await
        .unwrap();
    let second = env
        .gateway
        .send_transaction(&a.address, &b.address, 0.25)
        .await
        .unwrap();

    let history = env.gateway.transaction_history(&a.address).await.unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].transaction_hash, second.transaction_hash);
    assert_eq!(history[1].transaction_hash, first.transaction_hash);
}

#[tokio::test]
async fn summary_renders_the_backend_balance() {
    let env = TestEnvironment::new().await.unwrap();
    let wallet = env.gateway.register("hunter22").await.unwrap();

    let mut summary = WalletSummary::new(wallet.address.clone());
    summary.refresh(&env.gateway).await;

    let info = summary.state.content().expect("summary should load");
    assert_eq!(info.address, wallet.address);
    assert_eq!(WalletSummary::balance_line(info), "3.3400 ETH");
}

#[tokio::test]
async fn summary_surfaces_backend_detail_verbatim() {
    let env = TestEnvironment::new().await.unwrap();

    let mut summary = WalletSummary::new("0xnobody");
    summary.refresh(&env.gateway).await;

    assert_eq!(summary.state.error(), Some("Wallet not found"));
}

#[tokio::test]
async fn summary_transport_failure_renders_generic_message() {
    let dead = wallet::gateway::Gateway::new("http://127.0.0.1:1");

    let mut summary = WalletSummary::new("0xanyone");
    summary.refresh(&dead).await;

    assert_eq!(summary.state.error(), Some("Failed to load wallet info"));
    assert!(matches!(summary.state, ViewState::Failed(_)));
}
