//! Shared configuration and source-credibility primitives for BiasLens.

pub mod app_config;
pub mod config;
pub mod sources;

use thiserror::Error;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use sources::{extract_domain, source_rating, CredibilityRating, SourceCredibility};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required env var: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
