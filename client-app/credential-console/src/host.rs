//! Stub collaborators for the console host: a timed credential gateway and
//! a notifier that prints toasts.

use std::time::Duration;

use async_trait::async_trait;
use credential_core::{CredentialGateway, CredentialRequest, GatewayError, Notification, Notifier, Severity};
use credential_shared::config::SimulationSettings;
use tracing::debug;

/// Waits `latency` and then succeeds, or fails when `fail` is set.
pub struct SimulatedGateway {
    latency: Duration,
    fail: bool,
}

impl SimulatedGateway {
    pub fn new(settings: &SimulationSettings) -> Self {
        Self {
            latency: Duration::from_millis(settings.latency_ms),
            fail: settings.fail,
        }
    }
}

#[async_trait]
impl CredentialGateway for SimulatedGateway {
    async fn submit(&self, request: &CredentialRequest) -> Result<(), GatewayError> {
        debug!("Simulated gateway call: {:?}", request);
        tokio::time::sleep(self.latency).await;
        if self.fail {
            Err(GatewayError::Unavailable("simulated failure".into()))
        } else {
            Ok(())
        }
    }
}

pub struct ConsoleNotifier;

impl ConsoleNotifier {
    pub fn render(notification: &Notification) -> String {
        let marker = match notification.severity {
            Severity::Default => "*",
            Severity::Destructive => "!",
        };
        format!("[{}] {}: {}", marker, notification.title, notification.description)
    }
}

impl Notifier for ConsoleNotifier {
    fn notify(&self, notification: Notification) {
        println!("{}", Self::render(&notification));
    }
}
