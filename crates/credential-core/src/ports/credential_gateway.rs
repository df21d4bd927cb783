//! Credential gateway trait (port)

use async_trait::async_trait;

use crate::domain::CredentialRequest;
use crate::error::GatewayError;

/// Performs the actual sign-in or account creation. No retries happen in
/// the core.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CredentialGateway: Send + Sync {
    async fn submit(&self, request: &CredentialRequest) -> Result<(), GatewayError>;
}
