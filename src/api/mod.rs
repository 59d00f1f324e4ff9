//! API consumer helpers
//!
//! Route and permission catalogue for the drinks API that `api_server_url`
//! points at. No transport lives here.

pub mod routes;

pub use routes::{ApiRoute, Permission, UnknownPermission};
