//! # Credential Core - Domain Module
//! 
//! Value types shared by the form engine, the schema registry and the
//! collaborator ports.

pub mod form_mode;
pub mod field_values;
pub mod validation_errors;
pub mod submission_status;
pub mod visibility;
pub mod notification;
pub mod credential_request;

// Re-export all types
pub use form_mode::{FormMode, FieldName};
pub use field_values::{FieldValues, SignInFields, RegisterFields};
pub use validation_errors::{ValidationErrors, FieldError, ErrorKind};
pub use submission_status::SubmissionStatus;
pub use visibility::Visibility;
pub use notification::{Notification, Severity, OAuthProvider};
pub use credential_request::CredentialRequest;
