// ============================================================================
// Credential Core - Form Mode
// File: crates/credential-core/src/domain/form_mode.rs
// Description: Sign-in / register mode and the field names each mode carries
// ============================================================================

use credential_shared::constants::{FIELD_CONFIRM_PASSWORD, FIELD_EMAIL, FIELD_PASSWORD};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which flow a form instance runs. Fixed for the lifetime of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FormMode {
    SignIn,
    Register,
}

impl FormMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormMode::SignIn => "sign-in",
            FormMode::Register => "register",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "sign-in" | "signin" | "login" => Some(FormMode::SignIn),
            "register" | "signup" | "sign-up" => Some(FormMode::Register),
            _ => None,
        }
    }

    /// Fields present in this mode, in display order
    pub fn fields(&self) -> &'static [FieldName] {
        match self {
            FormMode::SignIn => &[FieldName::Email, FieldName::Password],
            FormMode::Register => &[
                FieldName::Email,
                FieldName::Password,
                FieldName::ConfirmPassword,
            ],
        }
    }

    pub fn has_field(&self, field: FieldName) -> bool {
        self.fields().contains(&field)
    }
}

impl fmt::Display for FormMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field identifiers. Ordering follows the on-screen order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FieldName {
    #[serde(rename = "email")]
    Email,
    #[serde(rename = "password")]
    Password,
    #[serde(rename = "confirmPassword")]
    ConfirmPassword,
}

impl FieldName {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldName::Email => FIELD_EMAIL,
            FieldName::Password => FIELD_PASSWORD,
            FieldName::ConfirmPassword => FIELD_CONFIRM_PASSWORD,
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            FIELD_EMAIL => Some(FieldName::Email),
            FIELD_PASSWORD => Some(FieldName::Password),
            FIELD_CONFIRM_PASSWORD => Some(FieldName::ConfirmPassword),
            _ => None,
        }
    }

    /// Whether the field is obscured by default and has a visibility toggle
    pub fn is_secret(&self) -> bool {
        !matches!(self, FieldName::Email)
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
