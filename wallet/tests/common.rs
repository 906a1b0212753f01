/// Common test utilities for wallet client integration tests
///
/// Boots the in-memory mock backend on an ephemeral loopback port and wires
/// a gateway and session store against it, with automatic cleanup of the
/// session directory.

use std::path::PathBuf;
use std::sync::Arc;

use backend_mock::{serve_ephemeral, MockLedger};
use tempfile::TempDir;
use wallet::controller::SessionController;
use wallet::gateway::Gateway;
use wallet::session::SessionStore;

pub struct TestEnvironment {
    pub temp_dir: TempDir,
    pub base_url: String,
    pub gateway: Gateway,
}

impl TestEnvironment {
    pub async fn new() -> anyhow::Result<Self> {
        let ledger = Arc::new(MockLedger::new());
        let addr = serve_ephemeral(ledger).await?;
        let base_url = format!("http://{}", addr);

        let temp_dir = TempDir::new()?;
        let gateway = Gateway::new(base_url.clone());

        Ok(Self {
            temp_dir,
            base_url,
            gateway,
        })
    }

    pub fn session_dir(&self) -> PathBuf {
        self.temp_dir.path().to_path_buf()
    }

    pub fn store(&self) -> SessionStore {
        SessionStore::new_with_base_dir(self.session_dir())
    }

    /// A controller wired to this environment's backend and session store.
    /// Building a second one simulates a process restart over the same
    /// persisted session.
    pub fn controller(&self) -> anyhow::Result<SessionController> {
        let ctrl = SessionController::init(Gateway::new(self.base_url.clone()), self.store())?;
        Ok(ctrl)
    }
}
