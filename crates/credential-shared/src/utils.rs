//! Utility functions

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::warn;

static EMAIL_SHAPE: Lazy<Option<Regex>> = Lazy::new(|| {
    match Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$") {
        Ok(re) => Some(re),
        Err(e) => {
            warn!("Email regex compilation failed: {}", e);
            None
        }
    }
});

/// Permissive email shape check: `local@domain.tld`, no whitespace.
///
/// Deliverability is not checked, only that there is a local part, a single
/// `@` and a dotted domain.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_SHAPE
        .as_ref()
        .map(|re| re.is_match(email))
        .unwrap_or(false)
}

pub fn mask_email(email: &str) -> String {
    if let Some(at_pos) = email.find('@') {
        let (local, domain) = email.split_at(at_pos);
        let keep = if local.chars().count() <= 2 { 1 } else { 2 };
        let visible: String = local.chars().take(keep).collect();
        format!("{}***{}", visible, domain)
    } else {
        "***".to_string()
    }
}
