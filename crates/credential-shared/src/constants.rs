//! Application-wide constants

pub const FIELD_EMAIL: &str = "email";
pub const FIELD_PASSWORD: &str = "password";
pub const FIELD_CONFIRM_PASSWORD: &str = "confirmPassword";
pub const DEFAULT_LOG_FILTER: &str = "info";
pub const DEFAULT_SIMULATED_LATENCY_MS: u64 = 1500;
pub const ENV_PREFIX: &str = "CREDENTIAL";
