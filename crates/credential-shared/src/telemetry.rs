//! Telemetry setup

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::TelemetrySettings;
use crate::error::AppError;

/// Install the global subscriber. `RUST_LOG` wins over the configured filter.
pub fn init_telemetry(settings: &TelemetrySettings) -> Result<(), AppError> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.filter))
        .map_err(|e| AppError::InvalidConfig(format!("telemetry.filter: {}", e)))?;

    let registry = tracing_subscriber::registry().with(env_filter);
    let result = if settings.json {
        registry.with(fmt::layer().json()).try_init()
    } else {
        registry.with(fmt::layer().with_target(false)).try_init()
    };
    result.map_err(|e| AppError::InternalError(e.to_string()))
}
