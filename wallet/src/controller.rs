//! Session controller
//!
//! Owns the auth-mode state machine, the gateway, and the session store: an
//! explicit application-state container rather than ambient global state.
//! The store is read exactly once at construction and written only on
//! successful auth or logout.

use crate::error::StorageError;
use crate::gateway::Gateway;
use crate::session::{Session, SessionStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
    Import,
}

/// Independent form fields for the three auth flows.
#[derive(Debug, Clone, Default)]
pub struct AuthForm {
    pub login_address: String,
    pub register_password: String,
    pub import_address: String,
    pub import_private_key: String,
}

pub struct SessionController {
    gateway: Gateway,
    store: SessionStore,
    session: Option<Session>,
    pub mode: AuthMode,
    pub form: AuthForm,
    pub error: Option<String>,
    pub success: Option<String>,
}

impl SessionController {
    /// Build the controller and restore any persisted session. This is the
    /// one read of the store during the process lifetime.
    pub fn init(gateway: Gateway, store: SessionStore) -> Result<Self, StorageError> {
        let session = store.load()?;
        if let Some(s) = &session {
            log::info!("Restored session for {}", s.address);
        }
        Ok(Self {
            gateway,
            store,
            session,
            mode: AuthMode::default(),
            form: AuthForm::default(),
            error: None,
            success: None,
        })
    }

    pub fn gateway(&self) -> &Gateway {
        &self.gateway
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn set_mode(&mut self, mode: AuthMode) {
        self.mode = mode;
    }

    /// Drive the auth flow selected by the current mode. Validation runs
    /// before any network call; backend `detail` errors surface verbatim,
    /// transport errors as the generic per-mode message.
    pub async fn submit(&mut self) {
        self.error = None;
        self.success = None;
        match self.mode {
            AuthMode::Login => self.submit_login().await,
            AuthMode::Register => self.submit_register().await,
            AuthMode::Import => self.submit_import().await,
        }
    }

    async fn submit_login(&mut self) {
        if self.form.login_address.is_empty() {
            self.error = Some("Please enter wallet address".to_string());
            return;
        }
        match self.gateway.login(&self.form.login_address).await {
            Ok(resp) => {
                self.establish(Session {
                    address: resp.address,
                    balance: resp.balance,
                });
                self.success = Some("Logged in successfully!".to_string());
            }
            Err(err) => self.error = Some(err.display_or("Login failed")),
        }
    }

    async fn submit_register(&mut self) {
        if self.form.register_password.is_empty() {
            self.error = Some("Please enter a password".to_string());
            return;
        }
        match self.gateway.register(&self.form.register_password).await {
            Ok(resp) => {
                self.establish(Session {
                    address: resp.address,
                    balance: resp.balance,
                });
                // The backend never returns the private key again; this
                // message is the user's only chance to record it.
                self.success = Some(format!(
                    "Wallet created successfully! Save your private key: {}",
                    resp.private_key
                ));
            }
            Err(err) => self.error = Some(err.display_or("Registration failed")),
        }
    }

    async fn submit_import(&mut self) {
        if self.form.import_address.is_empty() || self.form.import_private_key.is_empty() {
            self.error = Some("Please fill in all fields".to_string());
            return;
        }
        match self
            .gateway
            .import_wallet(&self.form.import_address, &self.form.import_private_key)
            .await
        {
            Ok(resp) => {
                self.establish(Session {
                    address: resp.address,
                    balance: resp.balance,
                });
                self.success = Some("Wallet imported successfully!".to_string());
            }
            Err(err) => self.error = Some(err.display_or("Import failed")),
        }
    }

    fn establish(&mut self, session: Session) {
        if let Err(err) = self.store.save(&session) {
            // The auth itself succeeded; losing persistence only costs the
            // session surviving a restart.
            log::warn!("Failed to persist session: {}", err);
        }
        self.session = Some(session);
    }

    /// Tear the session down: forget it, drop the persisted copy, and reset
    /// every form field and message. Valid from any prior auth mode.
    pub fn logout(&mut self) {
        self.session = None;
        if let Err(err) = self.store.clear() {
            log::warn!("Failed to clear persisted session: {}", err);
        }
        self.form = AuthForm::default();
        self.error = None;
        self.success = None;
        self.mode = AuthMode::Login;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn controller(dir: &TempDir) -> SessionController {
        let store = SessionStore::new_with_base_dir(dir.path().to_path_buf());
        SessionController::init(Gateway::new("http://127.0.0.1:1"), store).unwrap()
    }

    #[tokio::test]
    async fn login_requires_address_before_any_request() {
        let dir = TempDir::new().unwrap();
        let mut ctrl = controller(&dir);
        ctrl.submit().await;
        assert_eq!(ctrl.error.as_deref(), Some("Please enter wallet address"));
        assert!(!ctrl.is_authenticated());
    }

    #[tokio::test]
    async fn register_requires_password() {
        let dir = TempDir::new().unwrap();
        let mut ctrl = controller(&dir);
        ctrl.set_mode(AuthMode::Register);
        ctrl.submit().await;
        assert_eq!(ctrl.error.as_deref(), Some("Please enter a password"));
    }

    #[tokio::test]
    async fn import_requires_both_fields() {
        let dir = TempDir::new().unwrap();
        let mut ctrl = controller(&dir);
        ctrl.set_mode(AuthMode::Import);
        ctrl.form.import_address = "0xabc".to_string();
        ctrl.submit().await;
        assert_eq!(ctrl.error.as_deref(), Some("Please fill in all fields"));
    }

    #[test]
    fn init_restores_persisted_session() {
        let dir = TempDir::new().unwrap();
        let store = SessionStore::new_with_base_dir(dir.path().to_path_buf());
        store
            .save(&Session {
                address: "0xABC".to_string(),
                balance: 1.5,
            })
            .unwrap();

        let ctrl =
            SessionController::init(Gateway::new("http://127.0.0.1:1"), store).unwrap();
        assert!(ctrl.is_authenticated());
        assert_eq!(ctrl.session().unwrap().address, "0xABC");
        assert_eq!(ctrl.session().unwrap().balance, 1.5);
    }

    #[test]
    fn logout_clears_session_form_and_messages() {
        let dir = TempDir::new().unwrap();
        let store = SessionStore::new_with_base_dir(dir.path().to_path_buf());
        store
            .save(&Session {
                address: "0xABC".to_string(),
                balance: 1.5,
            })
            .unwrap();

        let mut ctrl =
            SessionController::init(Gateway::new("http://127.0.0.1:1"), store.clone()).unwrap();
        ctrl.set_mode(AuthMode::Import);
        ctrl.form.login_address = "0xABC".to_string();
        ctrl.form.register_password = "hunter22".to_string();
        ctrl.form.import_address = "0xDEF".to_string();
        ctrl.form.import_private_key = "deadbeef".to_string();
        ctrl.success = Some("Logged in successfully!".to_string());

        ctrl.logout();

        assert!(!ctrl.is_authenticated());
        assert_eq!(store.load().unwrap(), None);
        assert!(ctrl.form.login_address.is_empty());
        assert!(ctrl.form.register_password.is_empty());
        assert!(ctrl.form.import_address.is_empty());
        assert!(ctrl.form.import_private_key.is_empty());
        assert!(ctrl.error.is_none());
        assert!(ctrl.success.is_none());
        assert_eq!(ctrl.mode, AuthMode::Login);
    }
}
