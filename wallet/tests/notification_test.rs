/// Notification panel integration tests: listing, local reconciliation of
/// mark-read and delete, and error surfacing, against the in-memory mock
/// backend.

mod common;

use common::TestEnvironment;
use wallet::gateway::NotificationKind;
use wallet::views::{NotificationPanel, ViewState};

#[tokio::test]
async fn notifications_list_newest_first() {
    let env = TestEnvironment::new().await.unwrap();
    let wallet = env.gateway.register("hunter22").await.unwrap();

    env.gateway
        .create_notification(&wallet.address, "first", NotificationKind::Info)
        .await
        .unwrap();
    env.gateway
        .create_notification(&wallet.address, "second", NotificationKind::Success)
        .await
        .unwrap();

    let mut panel = NotificationPanel::new(wallet.address.clone());
    panel.refresh(&env.gateway).await;

    let notifs = panel.state.content().unwrap();
    assert_eq!(notifs.len(), 2);
    assert_eq!(notifs[0].message, "second");
    assert_eq!(notifs[0].kind, NotificationKind::Success);
    assert_eq!(notifs[1].message, "first");
    assert_eq!(panel.unread_count(), 2);
}

#[tokio::test]
async fn mark_read_flips_exactly_one_flag_locally() {
    let env = TestEnvironment::new().await.unwrap();
    let wallet = env.gateway.register("hunter22").await.unwrap();

    let target = env
        .gateway
        .create_notification(&wallet.address, "read me", NotificationKind::Info)
        .await
        .unwrap();
    env.gateway
        .create_notification(&wallet.address, "leave me", NotificationKind::Warning)
        .await
        .unwrap();

    let mut panel = NotificationPanel::new(wallet.address.clone());
    panel.refresh(&env.gateway).await;

    panel.mark_read(&env.gateway, target.id).await.unwrap();

    let notifs = panel.state.content().unwrap();
    for notif in notifs {
        if notif.id == target.id {
            assert!(notif.read);
        } else {
            assert!(!notif.read);
        }
    }
    assert_eq!(panel.unread_count(), 1);

    // The backend agrees with the local reconciliation.
    let fresh = env.gateway.notifications(&wallet.address).await.unwrap();
    let updated = fresh.iter().find(|n| n.id == target.id).unwrap();
    assert!(updated.read);
}

#[tokio::test]
async fn delete_removes_exactly_one_entry_locally() {
    let env = TestEnvironment::new().await.unwrap();
    let wallet = env.gateway.register("hunter22").await.unwrap();

    let doomed = env
        .gateway
        .create_notification(&wallet.address, "doomed", NotificationKind::Error)
        .await
        .unwrap();
    let kept = env
        .gateway
        .create_notification(&wallet.address, "kept", NotificationKind::Info)
        .await
        .unwrap();

    let mut panel = NotificationPanel::new(wallet.address.clone());
    panel.refresh(&env.gateway).await;

    panel.delete(&env.gateway, doomed.id).await.unwrap();

    let notifs = panel.state.content().unwrap();
    assert_eq!(notifs.len(), 1);
    assert_eq!(notifs[0].id, kept.id);

    let fresh = env.gateway.notifications(&wallet.address).await.unwrap();
    assert_eq!(fresh.len(), 1);
}

#[tokio::test]
async fn failed_action_leaves_local_state_untouched() {
    let env = TestEnvironment::new().await.unwrap();
    let wallet = env.gateway.register("hunter22").await.unwrap();

    env.gateway
        .create_notification(&wallet.address, "only one", NotificationKind::Info)
        .await
        .unwrap();

    let mut panel = NotificationPanel::new(wallet.address.clone());
    panel.refresh(&env.gateway).await;

    let err = panel.delete(&env.gateway, 9999).await.unwrap_err();
    assert_eq!(
        err.display_or("Notification update failed"),
        "Notification not found"
    );
    assert_eq!(panel.state.content().unwrap().len(), 1);
}

#[tokio::test]
async fn fetch_failure_renders_generic_message_with_retry() {
    let dead = wallet::gateway::Gateway::new("http://127.0.0.1:1");

    let mut panel = NotificationPanel::new("0xanyone");
    panel.refresh(&dead).await;
    assert_eq!(panel.state.error(), Some("Failed to load notifications"));

    // The retry action is the same refresh, now against a live backend.
    let env = TestEnvironment::new().await.unwrap();
    let wallet = env.gateway.register("hunter22").await.unwrap();
    let mut panel = NotificationPanel::new(wallet.address.clone());
    panel.refresh(&env.gateway).await;
    assert!(matches!(panel.state, ViewState::Ready(_)));
}
