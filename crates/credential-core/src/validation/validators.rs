// ============================================================================
// Credential Core - Field Validators
// File: crates/credential-core/src/validation/validators.rs
// Description: Pure predicates plus the message each failure maps to
// ============================================================================

use credential_shared::MessageCatalog;

pub use credential_shared::utils::is_valid_email;

/// Points into the validation section of the [`MessageCatalog`]. Validators
/// never carry display text themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKey {
    EmailRequired,
    EmailInvalid,
    PasswordRequired,
    ConfirmPasswordRequired,
    PasswordsMismatch,
}

impl MessageKey {
    pub fn resolve<'a>(&self, catalog: &'a MessageCatalog) -> &'a str {
        let messages = &catalog.validation;
        match self {
            MessageKey::EmailRequired => &messages.email_required,
            MessageKey::EmailInvalid => &messages.email_invalid,
            MessageKey::PasswordRequired => &messages.password_required,
            MessageKey::ConfirmPasswordRequired => &messages.confirm_password_required,
            MessageKey::PasswordsMismatch => &messages.passwords_mismatch,
        }
    }
}

/// Zero length fails. Whitespace-only input passes.
pub fn is_non_empty(value: &str) -> bool {
    !value.is_empty()
}

pub fn non_empty(value: &str, message: MessageKey) -> Result<(), MessageKey> {
    if is_non_empty(value) {
        Ok(())
    } else {
        Err(message)
    }
}

pub fn email_shape(value: &str, message: MessageKey) -> Result<(), MessageKey> {
    if is_valid_email(value) {
        Ok(())
    } else {
        Err(message)
    }
}

pub fn equals(value: &str, other: &str, message: MessageKey) -> Result<(), MessageKey> {
    if value == other {
        Ok(())
    } else {
        Err(message)
    }
}
