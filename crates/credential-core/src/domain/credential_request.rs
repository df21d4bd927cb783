//! Payload passed to the credential gateway

use std::fmt;

use credential_shared::utils::mask_email;

use super::field_values::FieldValues;
use super::form_mode::FormMode;

/// Validated credentials for one submission attempt
#[derive(Clone, PartialEq, Eq)]
pub struct CredentialRequest {
    pub mode: FormMode,
    pub email: String,
    pub password: String,
}

impl CredentialRequest {
    pub fn from_values(values: &FieldValues) -> Self {
        Self {
            mode: values.mode(),
            email: values.email().to_string(),
            password: values.password().to_string(),
        }
    }
}

impl fmt::Debug for CredentialRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialRequest")
            .field("mode", &self.mode)
            .field("email", &mask_email(&self.email))
            .field("password", &"***")
            .finish()
    }
}
