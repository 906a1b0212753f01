use crate::gateway::Gateway;

/// Invoked after the backend accepts a transfer, with the transaction hash.
/// The default is no hook at all: sibling views are not refreshed and the
/// balance display goes stale until its own refresh. This hook is the only
/// place cross-component refresh can be wired in.
pub type CompletionHook = Box<dyn Fn(&str) + Send + Sync>;

/// Transfer form: validates locally, submits through the gateway, and clears
/// itself on success.
pub struct TransactionComposer {
    sender_address: String,
    pub recipient_address: String,
    pub amount: String,
    pub error: Option<String>,
    pub success: Option<String>,
    on_sent: Option<CompletionHook>,
}

impl TransactionComposer {
    pub fn new(sender_address: impl Into<String>) -> Self {
        Self {
            sender_address: sender_address.into(),
            recipient_address: String::new(),
            amount: String::new(),
            error: None,
            success: None,
            on_sent: None,
        }
    }

    pub fn with_completion_hook(mut self, hook: CompletionHook) -> Self {
        self.on_sent = Some(hook);
        self
    }

    pub fn sender_address(&self) -> &str {
        &self.sender_address
    }

    /// Form checks that run before any network call.
    fn validate(&self) -> Result<f64, String> {
        if self.recipient_address.is_empty() || self.amount.is_empty() {
            return Err("Please fill in all fields".to_string());
        }
        let amount: f64 = self
            .amount
            .trim()
            .parse()
            .map_err(|_| "Amount must be greater than 0".to_string())?;
        if amount <= 0.0 {
            return Err("Amount must be greater than 0".to_string());
        }
        Ok(amount)
    }

    /// Validate, send, and reconcile. Invalid input surfaces immediately and
    /// issues zero requests. A backend `detail` (e.g. "Insufficient balance")
    /// renders verbatim; transport failures render the generic message.
    pub async fn submit(&mut self, gateway: &Gateway) {
        self.error = None;
        self.success = None;

        let amount = match self.validate() {
            Ok(amount) => amount,
            Err(msg) => {
                self.error = Some(msg);
                return;
            }
        };

        match gateway
            .send_transaction(&self.sender_address, &self.recipient_address, amount)
            .await
        {
            Ok(tx) => {
                self.success = Some(format!(
                    "Transaction sent successfully! Hash: {}",
                    tx.transaction_hash
                ));
                self.recipient_address.clear();
                self.amount.clear();
                if let Some(hook) = &self.on_sent {
                    hook(&tx.transaction_hash);
                }
            }
            Err(err) => {
                log::error!("send transaction failed: {}", err);
                self.error = Some(err.display_or("Failed to send transaction"));
            }
        }
    }
}
