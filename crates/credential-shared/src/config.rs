//! Configuration management

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::constants::{DEFAULT_LOG_FILTER, DEFAULT_SIMULATED_LATENCY_MS, ENV_PREFIX};
use crate::error::AppError;
use crate::messages::MessageCatalog;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub telemetry: TelemetrySettings,
    pub simulation: SimulationSettings,
    pub messages: MessageCatalog,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    pub env: String,
    pub name: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            env: "development".into(),
            name: "credential-console".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetrySettings {
    /// `EnvFilter` directives used when `RUST_LOG` is not set
    pub filter: String,
    pub json: bool,
}

impl Default for TelemetrySettings {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LOG_FILTER.into(),
            json: false,
        }
    }
}

/// Behaviour of the stub credential gateway used by the console host
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationSettings {
    pub latency_ms: u64,
    pub fail: bool,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            latency_ms: DEFAULT_SIMULATED_LATENCY_MS,
            fail: false,
        }
    }
}

impl AppConfig {
    /// Load from defaults, `config/default`, `config/{APP_ENV}` and
    /// `CREDENTIAL_*` environment variables (nested keys use `__`,
    /// e.g. `CREDENTIAL_TELEMETRY__JSON=true`).
    pub fn load() -> Result<Self, AppError> {
        let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        let config = Self::builder(&env)?
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;
        Self::from_config(config)
    }

    /// Defaults plus the optional config files, without the environment layer.
    pub fn builder(env: &str) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        let defaults = Config::try_from(&AppConfig::default())?;
        Ok(Config::builder()
            .add_source(defaults)
            .set_override("app.env", env)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false)))
    }

    pub fn from_config(config: Config) -> Result<Self, AppError> {
        let loaded: AppConfig = config.try_deserialize()?;
        loaded
            .messages
            .validate()
            .map_err(|e| AppError::InvalidConfig(e.to_string()))?;
        Ok(loaded)
    }
}
