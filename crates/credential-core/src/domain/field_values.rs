// ============================================================================
// Credential Core - Field Values
// File: crates/credential-core/src/domain/field_values.rs
// Description: Per-mode field sets as a tagged union
// ============================================================================

use super::form_mode::{FieldName, FormMode};
use crate::error::FormError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignInFields {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterFields {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Current input of a form. The variant fixes the mode, so a sign-in form
/// cannot hold a confirmation password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValues {
    SignIn(SignInFields),
    Register(RegisterFields),
}

impl FieldValues {
    /// All fields empty
    pub fn empty(mode: FormMode) -> Self {
        match mode {
            FormMode::SignIn => FieldValues::SignIn(SignInFields::default()),
            FormMode::Register => FieldValues::Register(RegisterFields::default()),
        }
    }

    pub fn mode(&self) -> FormMode {
        match self {
            FieldValues::SignIn(_) => FormMode::SignIn,
            FieldValues::Register(_) => FormMode::Register,
        }
    }

    pub fn email(&self) -> &str {
        match self {
            FieldValues::SignIn(f) => &f.email,
            FieldValues::Register(f) => &f.email,
        }
    }

    pub fn password(&self) -> &str {
        match self {
            FieldValues::SignIn(f) => &f.password,
            FieldValues::Register(f) => &f.password,
        }
    }

    pub fn confirm_password(&self) -> Option<&str> {
        match self {
            FieldValues::SignIn(_) => None,
            FieldValues::Register(f) => Some(&f.confirm_password),
        }
    }

    /// `None` when the mode has no such field
    pub fn get(&self, field: FieldName) -> Option<&str> {
        match field {
            FieldName::Email => Some(self.email()),
            FieldName::Password => Some(self.password()),
            FieldName::ConfirmPassword => self.confirm_password(),
        }
    }

    pub fn set(&mut self, field: FieldName, value: String) -> Result<(), FormError> {
        let mode = self.mode();
        let slot = match (self, field) {
            (FieldValues::SignIn(f), FieldName::Email) => &mut f.email,
            (FieldValues::SignIn(f), FieldName::Password) => &mut f.password,
            (FieldValues::Register(f), FieldName::Email) => &mut f.email,
            (FieldValues::Register(f), FieldName::Password) => &mut f.password,
            (FieldValues::Register(f), FieldName::ConfirmPassword) => &mut f.confirm_password,
            (FieldValues::SignIn(_), FieldName::ConfirmPassword) => {
                return Err(FormError::FieldNotInMode { field, mode });
            }
        };
        *slot = value;
        Ok(())
    }
}
