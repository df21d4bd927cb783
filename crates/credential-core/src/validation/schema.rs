// ============================================================================
// Credential Core - Schema Registry
// File: crates/credential-core/src/validation/schema.rs
// Description: Ordered rule lists for sign-in and registration
// ============================================================================
//! Each mode has a static, ordered rule list. Field rules come first, then
//! cross-field rules. Evaluation keeps the first failure per field, and a
//! cross-field rule only runs once every field it reads has passed.

use credential_shared::MessageCatalog;
use tracing::debug;

use super::validators::{email_shape, equals, non_empty, MessageKey};
use crate::domain::{ErrorKind, FieldName, FieldValues, FormMode, ValidationErrors};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Required {
        field: FieldName,
        message: MessageKey,
    },
    EmailShape {
        field: FieldName,
        message: MessageKey,
    },
    /// `field` must equal `other`; the error is shown on `field`.
    Matches {
        field: FieldName,
        other: FieldName,
        message: MessageKey,
    },
}

impl Rule {
    /// Field the error is attached to
    pub fn target(&self) -> FieldName {
        match self {
            Rule::Required { field, .. }
            | Rule::EmailShape { field, .. }
            | Rule::Matches { field, .. } => *field,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Rule::Matches { .. } => ErrorKind::CrossField,
            _ => ErrorKind::Field,
        }
    }

    /// The other field the rule reads, besides its target
    fn dependencies(&self) -> Option<FieldName> {
        match self {
            Rule::Matches { other, .. } => Some(*other),
            _ => None,
        }
    }

    fn evaluate(&self, values: &FieldValues) -> Result<(), MessageKey> {
        let read = |field: FieldName| values.get(field).unwrap_or_default();
        match self {
            Rule::Required { field, message } => non_empty(read(*field), *message),
            Rule::EmailShape { field, message } => email_shape(read(*field), *message),
            Rule::Matches {
                field,
                other,
                message,
            } => equals(read(*field), read(*other), *message),
        }
    }
}

pub const SIGN_IN_RULES: &[Rule] = &[
    Rule::Required {
        field: FieldName::Email,
        message: MessageKey::EmailRequired,
    },
    Rule::EmailShape {
        field: FieldName::Email,
        message: MessageKey::EmailInvalid,
    },
    Rule::Required {
        field: FieldName::Password,
        message: MessageKey::PasswordRequired,
    },
];

/// Sign-in rules, then the confirmation field, then the match refinement.
pub const REGISTER_RULES: &[Rule] = &[
    Rule::Required {
        field: FieldName::Email,
        message: MessageKey::EmailRequired,
    },
    Rule::EmailShape {
        field: FieldName::Email,
        message: MessageKey::EmailInvalid,
    },
    Rule::Required {
        field: FieldName::Password,
        message: MessageKey::PasswordRequired,
    },
    Rule::Required {
        field: FieldName::ConfirmPassword,
        message: MessageKey::ConfirmPasswordRequired,
    },
    Rule::Matches {
        field: FieldName::ConfirmPassword,
        other: FieldName::Password,
        message: MessageKey::PasswordsMismatch,
    },
];

/// Named rule set for one mode
#[derive(Debug, Clone, Copy)]
pub struct Schema {
    mode: FormMode,
    rules: &'static [Rule],
}

impl Schema {
    pub fn for_mode(mode: FormMode) -> Self {
        let rules = match mode {
            FormMode::SignIn => SIGN_IN_RULES,
            FormMode::Register => REGISTER_RULES,
        };
        Self { mode, rules }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn rules(&self) -> &'static [Rule] {
        self.rules
    }

    /// Whole-object validation pass
    pub fn validate(&self, values: &FieldValues, messages: &MessageCatalog) -> ValidationErrors {
        let mut errors = ValidationErrors::new();

        for rule in self.rules {
            let target = rule.target();
            if errors.contains(target) {
                continue;
            }
            if let Some(dependency) = rule.dependencies() {
                if errors.contains(dependency) {
                    continue;
                }
            }
            if let Err(key) = rule.evaluate(values) {
                errors.record(target, rule.kind(), key.resolve(messages));
            }
        }

        debug!(
            "Validated {} form: {} error(s)",
            self.mode,
            errors.len()
        );
        errors
    }
}
