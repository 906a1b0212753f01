/// Mock Wallet Backend Library
///
/// This crate provides both a standalone binary and library components for
/// mocking the wallet backend API: an in-memory ledger of wallets,
/// transactions, and notifications behind the same routes and `detail`
/// error convention the real service exposes.

pub mod handlers;
pub mod ledger;
pub mod server;
pub mod types;

// Re-export commonly used items
pub use ledger::MockLedger;
pub use server::{create_router, run_server, serve_ephemeral};
