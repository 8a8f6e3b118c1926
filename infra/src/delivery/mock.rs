//! Mock delivery service
//!
//! Stands in for a real messaging transport during development and tests.
//! Messages are logged and recorded instead of sent; the session monitor is
//! honored the same way a real transport would honor it.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tracing::{info, warn};
use uuid::Uuid;

use cr_core::errors::DeliveryError;
use cr_core::services::otp::DeliveryServiceTrait;
use cr_shared::utils::mask_identity;

use super::session::SessionMonitor;

/// A message the mock transport accepted
#[derive(Debug, Clone)]
pub struct SentMessage {
    pub identity: String,
    pub message: String,
    pub media_url: Option<String>,
    pub message_id: String,
}

/// Mock transport for development and testing
#[derive(Clone)]
pub struct MockDeliveryService {
    monitor: SessionMonitor,
    sent: Arc<Mutex<Vec<SentMessage>>>,
    message_count: Arc<AtomicU64>,
    simulate_failure: bool,
    console_output: bool,
}

impl MockDeliveryService {
    /// Create a mock transport whose channel is already paired
    pub fn new() -> Self {
        Self::with_monitor(SessionMonitor::ready())
    }

    /// Create a mock transport gated on an external session monitor
    pub fn with_monitor(monitor: SessionMonitor) -> Self {
        Self {
            monitor,
            sent: Arc::new(Mutex::new(Vec::new())),
            message_count: Arc::new(AtomicU64::new(0)),
            simulate_failure: false,
            console_output: false,
        }
    }

    /// Echo accepted messages to the console (development convenience)
    pub fn with_console_output(mut self, console_output: bool) -> Self {
        self.console_output = console_output;
        self
    }

    /// Make every send fail after the readiness check
    pub fn with_simulated_failure(mut self, simulate_failure: bool) -> Self {
        self.simulate_failure = simulate_failure;
        self
    }

    /// Total number of messages accepted
    pub fn message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }

    /// Copy of every accepted message, in send order
    pub fn sent_messages(&self) -> Vec<SentMessage> {
        self.sent.lock().unwrap().clone()
    }
}

impl Default for MockDeliveryService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DeliveryServiceTrait for MockDeliveryService {
    async fn send(
        &self,
        identity: &str,
        message: &str,
        media_url: Option<&str>,
    ) -> Result<String, DeliveryError> {
        if !self.monitor.is_ready() {
            warn!(
                identity = %mask_identity(identity),
                state = ?self.monitor.state(),
                event = "delivery_not_ready",
                "Send attempted while channel is not paired"
            );
            return Err(DeliveryError::ChannelNotReady);
        }

        if self.simulate_failure {
            return Err(DeliveryError::SendFailed {
                provider: self.provider_name().to_string(),
                message: "simulated send failure".to_string(),
            });
        }

        let message_id = format!("mock_{}", Uuid::new_v4());
        let count = self.message_count.fetch_add(1, Ordering::SeqCst) + 1;

        if self.console_output {
            println!("--- MOCK DELIVERY #{} ---", count);
            println!("To: {}", identity);
            if let Some(url) = media_url {
                println!("Media: {}", url);
            }
            println!("{}", message);
        }

        info!(
            provider = self.provider_name(),
            identity = %mask_identity(identity),
            message_id = %message_id,
            has_media = media_url.is_some(),
            event = "message_sent",
            "Mock transport accepted message"
        );

        self.sent.lock().unwrap().push(SentMessage {
            identity: identity.to_string(),
            message: message.to_string(),
            media_url: media_url.map(str::to_string),
            message_id: message_id.clone(),
        });

        Ok(message_id)
    }

    fn provider_name(&self) -> &str {
        "mock"
    }
}
