use super::ViewState;
use crate::error::WalletError;
use crate::gateway::{Gateway, Notification};

/// Notification list for one wallet. Mutations reconcile locally: a read flag
/// flips and a deleted entry disappears without re-fetching the list.
pub struct NotificationPanel {
    wallet_address: String,
    pub state: ViewState<Vec<Notification>>,
}

impl NotificationPanel {
    pub fn new(wallet_address: impl Into<String>) -> Self {
        Self {
            wallet_address: wallet_address.into(),
            state: ViewState::Loading,
        }
    }

    pub fn wallet_address(&self) -> &str {
        &self.wallet_address
    }

    /// Fetch the notifications; doubles as the manual retry and refresh action.
    pub async fn refresh(&mut self, gateway: &Gateway) {
        self.state = ViewState::Loading;
        match gateway.notifications(&self.wallet_address).await {
            Ok(notifs) => self.state = ViewState::Ready(notifs),
            Err(err) => {
                log::error!("notifications fetch failed: {}", err);
                self.state = ViewState::Failed(err.display_or("Failed to load notifications"));
            }
        }
    }

    /// Mark one notification read on the backend, then flip only that entry
    /// locally. On failure the local state is left untouched.
    pub async fn mark_read(&mut self, gateway: &Gateway, id: i64) -> Result<(), WalletError> {
        match gateway.mark_notification_read(id).await {
            Ok(_) => {
                if let ViewState::Ready(list) = &mut self.state {
                    apply_read(list, id);
                }
                Ok(())
            }
            Err(err) => {
                log::warn!("Failed to mark notification as read: {}", err);
                Err(err)
            }
        }
    }

    /// Delete one notification on the backend, then remove exactly that entry
    /// locally.
    pub async fn delete(&mut self, gateway: &Gateway, id: i64) -> Result<(), WalletError> {
        match gateway.delete_notification(id).await {
            Ok(_) => {
                if let ViewState::Ready(list) = &mut self.state {
                    apply_delete(list, id);
                }
                Ok(())
            }
            Err(err) => {
                log::warn!("Failed to delete notification: {}", err);
                Err(err)
            }
        }
    }

    pub fn unread_count(&self) -> usize {
        match &self.state {
            ViewState::Ready(list) => list.iter().filter(|n| !n.read).count(),
            _ => 0,
        }
    }
}

fn apply_read(list: &mut [Notification], id: i64) {
    if let Some(notif) = list.iter_mut().find(|n| n.id == id) {
        notif.read = true;
    }
}

fn apply_delete(list: &mut Vec<Notification>, id: i64) {
    list.retain(|n| n.id != id);
}
