use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use wallet::config::ClientConfig;
use wallet::controller::{AuthMode, SessionController};
use wallet::gateway::{Gateway, NotificationKind};
use wallet::session::SessionStore;
use wallet::views::{
    format_address, NotificationPanel, TransactionComposer, TransactionHistory, ViewState,
    WalletSummary,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    // Initialize logger (set RUST_LOG=debug for request tracing)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ClientConfig::from_env();
    let gateway = Gateway::new(config.api_base_url.clone());
    let store = SessionStore::new_with_base_dir(PathBuf::from(&config.data_dir));
    let mut controller = SessionController::init(gateway, store)?;

    println!("Mock Web3 Wallet");
    if let Some(session) = controller.session() {
        println!("Logged in as {}", session.address);
    }
    println!("Type 'help' for commands.");

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let parts: Vec<&str> = line.split_whitespace().collect();
        let Some(&command) = parts.first() else {
            continue;
        };

        match command {
            "help" => print_help(),
            "quit" | "exit" => break,
            "login" | "register" | "import" => {
                auth_command(&mut controller, command, &parts[1..]).await;
            }
            "logout" => {
                controller.logout();
                println!("Logged out.");
            }
            _ => {
                let Some(address) = controller.session().map(|s| s.address.clone()) else {
                    println!("Not logged in. Use login, register, or import first.");
                    continue;
                };
                wallet_command(&controller, &address, command, &parts[1..]).await;
            }
        }
    }

    Ok(())
}

fn print_help() {
    println!("Auth:");
    println!("  login <address>            sign in to an existing wallet");
    println!("  register <password>        create a new wallet");
    println!("  import <address> <key>     import a wallet by private key");
    println!("  logout                     clear the session");
    println!("Wallet:");
    println!("  summary                    address, balance, creation date");
    println!("  balance                    balance only");
    println!("  verify <address>           check whether an address exists");
    println!("Transactions:");
    println!("  send <recipient> <amount>  submit a transfer");
    println!("  history                    list transactions, newest first");
    println!("  tx <hash>                  look up one transaction");
    println!("Notifications:");
    println!("  notifications              list notifications");
    println!("  read <id>                  mark one notification read");
    println!("  delete <id>                delete one notification");
    println!("  notify <type> <message..>  create a notification for yourself");
    println!("Other:");
    println!("  quit");
}

/// Fill the matching form fields and drive the controller's submit flow,
/// exactly as the auth page does.
async fn auth_command(controller: &mut SessionController, command: &str, args: &[&str]) {
    match command {
        "login" => {
            controller.set_mode(AuthMode::Login);
            controller.form.login_address = args.first().unwrap_or(&"").to_string();
        }
        "register" => {
            controller.set_mode(AuthMode::Register);
            controller.form.register_password = args.first().unwrap_or(&"").to_string();
        }
        "import" => {
            controller.set_mode(AuthMode::Import);
            controller.form.import_address = args.first().unwrap_or(&"").to_string();
            controller.form.import_private_key = args.get(1).unwrap_or(&"").to_string();
        }
        _ => unreachable!(),
    }
    controller.submit().await;
    if let Some(err) = &controller.error {
        println!("error: {}", err);
    }
    if let Some(msg) = &controller.success {
        println!("{}", msg);
    }
}

async fn wallet_command(controller: &SessionController, address: &str, command: &str, args: &[&str]) {
    let gateway = controller.gateway();
    match command {
        "summary" => {
            let mut summary = WalletSummary::new(address);
            summary.refresh(gateway).await;
            render_summary(&summary);
        }
        "balance" => match gateway.balance(address).await {
            Ok(resp) => println!("{:.4} ETH", resp.balance),
            Err(err) => println!("error: {}", err.display_or("Failed to load balance")),
        },
        "verify" => {
            let Some(target) = args.first() else {
                println!("usage: verify <address>");
                return;
            };
            match gateway.verify(target).await {
                Ok(resp) if resp.exists => println!("{} exists", resp.address),
                Ok(resp) => println!("{} does not exist", resp.address),
                Err(err) => println!("error: {}", err.display_or("Failed to verify address")),
            }
        }
        "send" => {
            let mut composer = TransactionComposer::new(address);
            composer.recipient_address = args.first().unwrap_or(&"").to_string();
            composer.amount = args.get(1).unwrap_or(&"").to_string();
            composer.submit(gateway).await;
            if let Some(err) = &composer.error {
                println!("error: {}", err);
            }
            if let Some(msg) = &composer.success {
                println!("{}", msg);
            }
        }
        "history" => {
            let mut history = TransactionHistory::new(address);
            history.refresh(gateway).await;
            render_history(&history);
        }
        "tx" => {
            let Some(hash) = args.first() else {
                println!("usage: tx <hash>");
                return;
            };
            match gateway.transaction(hash).await {
                Ok(tx) => println!(
                    "{} {} -> {} {} ETH [{}] at {}",
                    format_address(&tx.transaction_hash),
                    format_address(&tx.sender_address),
                    format_address(&tx.recipient_address),
                    tx.amount,
                    tx.status,
                    tx.timestamp
                ),
                Err(err) => println!("error: {}", err.display_or("Failed to load transaction")),
            }
        }
        "notifications" => {
            let mut panel = NotificationPanel::new(address);
            panel.refresh(gateway).await;
            render_notifications(&panel);
        }
        "read" | "delete" => {
            let Some(id) = args.first().and_then(|a| a.parse::<i64>().ok()) else {
                println!("usage: {} <id>", command);
                return;
            };
            let mut panel = NotificationPanel::new(address);
            panel.refresh(gateway).await;
            let result = if command == "read" {
                panel.mark_read(gateway, id).await
            } else {
                panel.delete(gateway, id).await
            };
            match result {
                Ok(()) => render_notifications(&panel),
                Err(err) => println!("error: {}", err.display_or("Notification update failed")),
            }
        }
        "notify" => {
            if args.len() < 2 {
                println!("usage: notify <success|error|warning|info> <message..>");
                return;
            }
            let kind = match args[0] {
                "success" => NotificationKind::Success,
                "error" => NotificationKind::Error,
                "warning" => NotificationKind::Warning,
                _ => NotificationKind::Info,
            };
            let message = args[1..].join(" ");
            match gateway.create_notification(address, &message, kind).await {
                Ok(notif) => println!("Created notification {}", notif.id),
                Err(err) => println!("error: {}", err.display_or("Failed to create notification")),
            }
        }
        other => println!("Unknown command '{}'. Type 'help'.", other),
    }
}

fn render_summary(summary: &WalletSummary) {
    match &summary.state {
        ViewState::Loading => println!("Loading..."),
        ViewState::Failed(msg) => println!("{} (run 'summary' to retry)", msg),
        ViewState::Ready(info) => {
            println!("Address: {}", info.address);
            println!("Balance: {}", WalletSummary::balance_line(info));
            println!("Created: {}", WalletSummary::created_line(info));
        }
    }
}

fn render_history(history: &TransactionHistory) {
    match &history.state {
        ViewState::Loading => println!("Loading..."),
        ViewState::Failed(msg) => println!("{} (run 'history' to retry)", msg),
        ViewState::Ready(txs) if txs.is_empty() => println!("No transactions found"),
        ViewState::Ready(txs) => {
            for tx in txs {
                let dir = history.direction(tx);
                println!(
                    "{:8} {}{} ETH  from {} to {}  [{}]  {}",
                    dir.label(),
                    dir.sign(),
                    tx.amount,
                    format_address(&tx.sender_address),
                    format_address(&tx.recipient_address),
                    tx.status,
                    tx.timestamp
                );
            }
        }
    }
}

fn render_notifications(panel: &NotificationPanel) {
    match &panel.state {
        ViewState::Loading => println!("Loading..."),
        ViewState::Failed(msg) => println!("{} (run 'notifications' to retry)", msg),
        ViewState::Ready(notifs) if notifs.is_empty() => println!("No notifications"),
        ViewState::Ready(notifs) => {
            for notif in notifs {
                let marker = if notif.read { " " } else { "*" };
                println!(
                    "{} [{}] ({}) {}  {}",
                    marker, notif.id, notif.kind, notif.message, notif.created_at
                );
            }
            println!("{} unread", panel.unread_count());
        }
    }
}
