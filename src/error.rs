//! Error handling
//!
//! Error types raised while loading, validating, installing or deriving
//! URLs from the environment configuration.

use thiserror::Error;

use crate::config::loader::ConfigValidationError;

/// Environment configuration error type
#[derive(Error, Debug)]
pub enum EnvironmentError {
    /// Figment could not merge or extract the configuration layers
    #[error("failed to load environment configuration: {0}")]
    Load(String),

    /// A loaded configuration broke a field invariant
    #[error("invalid environment configuration: {0}")]
    Validation(#[from] ConfigValidationError),

    /// A derived URL could not be parsed
    #[error("invalid url '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// `install` was called after the record was already in place
    #[error("environment configuration is already installed")]
    AlreadyInstalled,
}

impl From<figment::Error> for EnvironmentError {
    fn from(e: figment::Error) -> Self {
        EnvironmentError::Load(e.to_string())
    }
}

impl EnvironmentError {
    pub(crate) fn invalid_url(url: &str, err: url::ParseError) -> Self {
        EnvironmentError::InvalidUrl {
            url: url.to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result alias
pub type Result<T> = std::result::Result<T, EnvironmentError>;
