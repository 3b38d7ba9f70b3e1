//! Shared domain types and configuration for revsense.

pub mod app_config;
pub mod comparison;
pub mod config;
pub mod sentiment;

pub use app_config::AppConfig;
pub use comparison::{compare, ComparisonResult, Winner};
pub use config::{load_app_config, load_app_config_from_env};
pub use sentiment::{OverallSentiment, SentimentLabel, SentimentSummary};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
