//! Caffee - environment configuration
//!
//! The read-only environment record shared by the coffee shop frontend:
//! the drinks API base URL and the Auth0 settings used for login redirects.

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod observability;

pub use config::{Auth0Config, EnvironmentConfig, environment, install};
pub use error::{EnvironmentError, Result};
