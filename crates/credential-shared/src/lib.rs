//! # Credential Shared
//! 
//! Shared utilities, message catalog, configuration and telemetry for the
//! credential form crates.

pub mod constants;
pub mod utils;
pub mod messages;
pub mod telemetry;
pub mod config;
pub mod error;

pub use error::AppError;
pub use messages::MessageCatalog;
