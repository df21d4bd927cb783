//! Field validators and the per-mode schemas built from them

pub mod validators;
pub mod schema;

pub use validators::{is_non_empty, is_valid_email, MessageKey};
pub use schema::{Rule, Schema, REGISTER_RULES, SIGN_IN_RULES};
