//! Per-field validation results

use std::collections::BTreeMap;
use std::fmt;

use super::form_mode::FieldName;

/// Single-field rule or a rule spanning several fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Field,
    CrossField,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub kind: ErrorKind,
    pub message: String,
}

/// Failing fields of one validation pass. A missing key means the field is
/// valid. At most one error is kept per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: BTreeMap<FieldName, FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn get(&self, field: FieldName) -> Option<&FieldError> {
        self.errors.get(&field)
    }

    pub fn contains(&self, field: FieldName) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn message(&self, field: FieldName) -> Option<&str> {
        self.errors.get(&field).map(|e| e.message.as_str())
    }

    pub fn fields(&self) -> impl Iterator<Item = FieldName> + '_ {
        self.errors.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &FieldError)> {
        self.errors.iter().map(|(k, v)| (*k, v))
    }

    /// Keeps the first error recorded for a field.
    pub(crate) fn record(&mut self, field: FieldName, kind: ErrorKind, message: &str) {
        self.errors.entry(field).or_insert_with(|| FieldError {
            kind,
            message: message.to_string(),
        });
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.errors.keys().map(|k| k.as_str()).collect();
        write!(f, "{} invalid field(s): {}", names.len(), names.join(", "))
    }
}
