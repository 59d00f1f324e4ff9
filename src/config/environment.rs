use serde::{Deserialize, Serialize};
use url::Url;

use crate::api::routes::ApiRoute;
use crate::error::{EnvironmentError, Result};

/// Auth0 identity-provider settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Auth0Config {
    /// Auth0 tenant domain prefix (`{url}.auth0.com`)
    pub url: String,
    /// Identifier of the protected API the access token is issued for
    pub audience: String,
    /// Public client id of the registered application
    pub client_id: String,
    /// Where Auth0 redirects the user-agent after authentication
    pub callback_url: String,
}

impl Default for Auth0Config {
    fn default() -> Self {
        Self {
            url: "moehab.eu".into(),
            audience: "Caffee".into(),
            client_id: "a6KyiLT9wi03ZSJ6C2gBBLG6xbmRTkFW".into(),
            callback_url: "http://localhost:8100".into(),
        }
    }
}

/// Environment configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvironmentConfig {
    /// Build/deployment mode
    pub production: bool,
    /// Base URL of the drinks API server, prefixed verbatim onto request paths
    pub api_server_url: String,
    /// Auth0 settings
    pub auth0: Auth0Config,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            production: false,
            api_server_url: "http://127.0.0.1:5000".into(),
            auth0: Auth0Config::default(),
        }
    }
}

impl EnvironmentConfig {
    /// Development record, identical to the authored defaults
    pub fn development() -> Self {
        Self::default()
    }

    /// Production record
    pub fn production() -> Self {
        let mut config = Self::development();
        config.production = true;
        config
    }

    /// Build the absolute URL for an API path.
    ///
    /// `path` is appended to the base as text, with a leading `/` inserted
    /// when it lacks one. The joined string is then parsed as a URL, which
    /// resolves dot segments and percent-encodes characters that need it.
    pub fn api_url(&self, path: &str) -> Result<Url> {
        let raw = if path.is_empty() || path.starts_with('/') {
            format!("{}{}", self.api_server_url, path)
        } else {
            format!("{}/{}", self.api_server_url, path)
        };
        Url::parse(&raw).map_err(|e| EnvironmentError::invalid_url(&raw, e))
    }

    /// Absolute URL of a drinks API route
    pub fn route_url(&self, route: &ApiRoute) -> Result<Url> {
        self.api_url(&route.path())
    }
}
