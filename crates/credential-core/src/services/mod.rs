//! Domain services (business logic)

pub mod form_engine;
pub mod submission;

pub use form_engine::CredentialForm;
pub use submission::{SubmissionOrchestrator, SubmissionOutcome};
