//! Show/hide state of the obscured fields

use super::form_mode::FieldName;

/// Independent of validation and submission. Both fields start obscured.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Visibility {
    pub password: bool,
    pub confirm_password: bool,
}

impl Visibility {
    pub fn toggle_password(&mut self) -> bool {
        self.password = !self.password;
        self.password
    }

    pub fn toggle_confirm_password(&mut self) -> bool {
        self.confirm_password = !self.confirm_password;
        self.confirm_password
    }

    /// Email is never obscured
    pub fn is_shown(&self, field: FieldName) -> bool {
        match field {
            FieldName::Email => true,
            FieldName::Password => self.password,
            FieldName::ConfirmPassword => self.confirm_password,
        }
    }
}
