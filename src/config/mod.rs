//! Environment configuration
//!
//! Holds the process-wide [`EnvironmentConfig`]. The record is set once,
//! either explicitly through [`install`] at process start or implicitly with
//! the authored defaults on the first [`environment`] read, and is read-only
//! afterwards.

pub mod environment;
pub mod loader;

use once_cell::sync::OnceCell;

pub use environment::{Auth0Config, EnvironmentConfig};

use crate::error::{EnvironmentError, Result};

static ENVIRONMENT: OnceCell<EnvironmentConfig> = OnceCell::new();

/// The process-wide environment record
pub fn environment() -> &'static EnvironmentConfig {
    ENVIRONMENT.get_or_init(|| {
        tracing::debug!("No environment installed, using authored defaults");
        EnvironmentConfig::default()
    })
}

/// Install `config` as the process-wide record.
///
/// Fails if a record is already in place, including the implicit default
/// installed by an earlier [`environment`] read.
pub fn install(config: EnvironmentConfig) -> Result<&'static EnvironmentConfig> {
    ENVIRONMENT
        .set(config)
        .map_err(|_| EnvironmentError::AlreadyInstalled)?;
    tracing::info!("Environment configuration installed");
    Ok(environment())
}
