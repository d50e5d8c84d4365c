pub mod app_config;
pub mod classify;
pub mod company;
pub mod config;
pub mod criteria;

pub use app_config::AppConfig;
pub use classify::{classify_size, SizeClassifier, DEFAULT_BRACKETS};
pub use company::{Company, DedupKey, SizeCategory};
pub use config::{load_app_config, load_app_config_from_env, DEFAULT_EXPORT_PATH};
pub use criteria::{split_list, GeoFilter, SearchCriteria};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid size category: {0}")]
    InvalidSizeCategory(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
