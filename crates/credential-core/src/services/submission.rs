// ============================================================================
// Credential Core - Submission Orchestrator
// File: crates/credential-core/src/services/submission.rs
// ============================================================================
//! Runs the credential gateway for a validated request and announces the
//! outcome through the notifier.

use std::sync::Arc;

use credential_shared::utils::mask_email;
use credential_shared::MessageCatalog;
use tracing::{info, warn};

use crate::domain::{CredentialRequest, FormMode, Notification, SubmissionStatus};
use crate::error::GatewayError;
use crate::ports::{CredentialGateway, Notifier};

/// Result of one gateway call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Succeeded,
    Failed(GatewayError),
}

impl SubmissionOutcome {
    pub fn status(&self) -> SubmissionStatus {
        match self {
            SubmissionOutcome::Succeeded => SubmissionStatus::Succeeded,
            SubmissionOutcome::Failed(_) => SubmissionStatus::Failed,
        }
    }
}

pub struct SubmissionOrchestrator<G: CredentialGateway, N: Notifier> {
    gateway: Arc<G>,
    notifier: Arc<N>,
    messages: Arc<MessageCatalog>,
}

impl<G: CredentialGateway, N: Notifier> SubmissionOrchestrator<G, N> {
    pub fn new(gateway: Arc<G>, notifier: Arc<N>, messages: Arc<MessageCatalog>) -> Self {
        Self {
            gateway,
            notifier,
            messages,
        }
    }

    /// Await the gateway. Runs to completion; there is no timeout or
    /// cancellation here.
    pub async fn run(&self, request: &CredentialRequest) -> SubmissionOutcome {
        info!(
            "Submitting {} credentials for: {}",
            request.mode,
            mask_email(&request.email)
        );

        match self.gateway.submit(request).await {
            Ok(()) => {
                info!("{} succeeded for: {}", request.mode, mask_email(&request.email));
                SubmissionOutcome::Succeeded
            }
            Err(e) => {
                warn!("{} failed for {}: {}", request.mode, mask_email(&request.email), e);
                SubmissionOutcome::Failed(e)
            }
        }
    }

    /// Mode-specific toast for an outcome
    pub fn notification_for(&self, mode: FormMode, outcome: &SubmissionOutcome) -> Notification {
        let messages = &self.messages.submission;
        match (mode, outcome) {
            (FormMode::SignIn, SubmissionOutcome::Succeeded) => Notification::new(
                &messages.sign_in_success_title,
                &messages.sign_in_success_description,
            ),
            (FormMode::Register, SubmissionOutcome::Succeeded) => Notification::new(
                &messages.register_success_title,
                &messages.register_success_description,
            ),
            (FormMode::SignIn, SubmissionOutcome::Failed(_)) => Notification::destructive(
                &messages.sign_in_failure_title,
                &messages.failure_description,
            ),
            (FormMode::Register, SubmissionOutcome::Failed(_)) => Notification::destructive(
                &messages.register_failure_title,
                &messages.failure_description,
            ),
        }
    }

    pub fn announce(&self, mode: FormMode, outcome: &SubmissionOutcome) {
        self.notify(self.notification_for(mode, outcome));
    }

    pub fn notify(&self, notification: Notification) {
        self.notifier.notify(notification);
    }
}
