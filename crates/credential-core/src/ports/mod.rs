//! Collaborator traits (ports)

pub mod credential_gateway;
pub mod notifier;

pub use credential_gateway::CredentialGateway;
pub use notifier::Notifier;

#[cfg(test)]
pub use credential_gateway::MockCredentialGateway;
#[cfg(test)]
pub use notifier::MockNotifier;
