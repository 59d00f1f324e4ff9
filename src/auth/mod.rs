//! Auth Module
//!
//! Auth0 redirect links derived from the environment record.

pub mod links;

pub use links::{AUTH0_DOMAIN_SUFFIX, RESPONSE_TYPE};
