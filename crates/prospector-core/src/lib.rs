//! Shared domain types, configuration, and the filter-to-clause adapter for
//! the prospector workspace.

mod app_config;
mod config;
pub mod query;
pub mod types;

pub use app_config::{AppConfig, Environment, TransportMode};
pub use config::{load_app_config, load_app_config_from_env};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
