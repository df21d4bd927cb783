//! # Credential Core
//! 
//! Form-state engine for the sign-in and registration forms: field
//! validators, per-mode schemas, the submission lifecycle and the
//! collaborator ports it is driven through.

pub mod domain;
pub mod validation;
pub mod services;
pub mod ports;
pub mod error;

// Re-export the main surface
pub use domain::*;
pub use error::{FormError, GatewayError};
pub use ports::{CredentialGateway, Notifier};
pub use services::{CredentialForm, SubmissionOutcome};
pub use validation::Schema;
