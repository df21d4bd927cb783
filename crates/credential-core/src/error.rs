//! Form and gateway errors

use thiserror::Error;

use crate::domain::{FieldName, FormMode, ValidationErrors};

/// Why a form operation did not proceed. All of these are recoverable by
/// the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Validation failed: {0}")]
    Invalid(ValidationErrors),

    #[error("A submission is already in progress")]
    SubmissionInProgress,

    #[error("Field {field} does not exist in {mode} mode")]
    FieldNotInMode { field: FieldName, mode: FormMode },

    #[error("Action {action} is not available in {mode} mode")]
    ActionNotInMode { action: &'static str, mode: FormMode },
}

/// Failure reported by the credential gateway. Surfaced only through a
/// notification, never mapped onto a field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("Credentials rejected: {0}")]
    Rejected(String),

    #[error("Credential service unavailable: {0}")]
    Unavailable(String),

    #[error("Submission dropped before the credential service answered")]
    Abandoned,
}
