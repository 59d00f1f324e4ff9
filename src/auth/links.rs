//! Auth0 Links
//!
//! URL builders for the Auth0 implicit-grant login and logout redirects.
//! Only strings are produced here; the redirect itself is up to the caller.

use url::Url;

use crate::config::Auth0Config;
use crate::error::{EnvironmentError, Result};

/// Hosted Auth0 tenants live under this suffix
pub const AUTH0_DOMAIN_SUFFIX: &str = "auth0.com";

/// `response_type` requested at `/authorize`
pub const RESPONSE_TYPE: &str = "token";

impl Auth0Config {
    /// Full tenant domain, e.g. `moehab.eu.auth0.com`
    pub fn tenant_domain(&self) -> String {
        format!("{}.{}", self.url, AUTH0_DOMAIN_SUFFIX)
    }

    /// Token issuer (`iss` claim)
    pub fn issuer(&self) -> String {
        format!("https://{}/", self.tenant_domain())
    }

    /// JSON Web Key Set location used to verify issued tokens
    pub fn jwks_url(&self) -> Result<Url> {
        self.tenant_url("/.well-known/jwks.json")
    }

    /// Login link for the implicit flow.
    ///
    /// `callback_path` is appended to `callback_url` to form the
    /// `redirect_uri`, so the user lands back on a specific page.
    pub fn login_url(&self, callback_path: &str) -> Result<Url> {
        let redirect_uri = format!("{}{}", self.callback_url, callback_path);
        let mut url = self.tenant_url("/authorize")?;
        url.query_pairs_mut()
            .append_pair("audience", &self.audience)
            .append_pair("response_type", RESPONSE_TYPE)
            .append_pair("client_id", &self.client_id)
            .append_pair("redirect_uri", &redirect_uri);
        tracing::debug!(client_id = %self.client_id, %redirect_uri, "Built Auth0 login url");
        Ok(url)
    }

    /// Logout link returning the user-agent to `callback_url`
    pub fn logout_url(&self) -> Result<Url> {
        let mut url = self.tenant_url("/v2/logout")?;
        url.query_pairs_mut()
            .append_pair("client_id", &self.client_id)
            .append_pair("returnTo", &self.callback_url);
        Ok(url)
    }

    fn tenant_url(&self, path: &str) -> Result<Url> {
        let raw = format!("https://{}{}", self.tenant_domain(), path);
        Url::parse(&raw).map_err(|e| EnvironmentError::invalid_url(&raw, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(url: &Url, key: &str) -> Option<String> {
        url.query_pairs()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.into_owned())
    }

    #[test]
    fn test_tenant_domain_and_issuer() {
        let auth0 = Auth0Config::default();

        assert_eq!(auth0.tenant_domain(), "moehab.eu.auth0.com");
        assert_eq!(auth0.issuer(), "https://moehab.eu.auth0.com/");
        assert_eq!(
            auth0.jwks_url().unwrap().as_str(),
            "https://moehab.eu.auth0.com/.well-known/jwks.json"
        );
    }

    #[test]
    fn test_login_url_embeds_client_id() {
        let auth0 = Auth0Config::default();
        let url = auth0.login_url("").unwrap();

        assert_eq!(url.scheme(), "https");
        assert_eq!(url.host_str(), Some("moehab.eu.auth0.com"));
        assert_eq!(url.path(), "/authorize");
        assert_eq!(
            query(&url, "client_id").as_deref(),
            Some("a6KyiLT9wi03ZSJ6C2gBBLG6xbmRTkFW")
        );
        assert!(url.as_str().contains("client_id=a6KyiLT9wi03ZSJ6C2gBBLG6xbmRTkFW"));
        assert_eq!(query(&url, "audience").as_deref(), Some("Caffee"));
        assert_eq!(query(&url, "response_type").as_deref(), Some("token"));
        assert_eq!(
            query(&url, "redirect_uri").as_deref(),
            Some("http://localhost:8100")
        );
    }

    #[test]
    fn test_login_url_appends_callback_path() {
        let auth0 = Auth0Config::default();
        let url = auth0.login_url("/tabs/user-page").unwrap();

        assert_eq!(
            query(&url, "redirect_uri").as_deref(),
            Some("http://localhost:8100/tabs/user-page")
        );
    }

    #[test]
    fn test_logout_url() {
        let auth0 = Auth0Config::default();
        let url = auth0.logout_url().unwrap();

        assert_eq!(url.path(), "/v2/logout");
        assert_eq!(
            query(&url, "client_id").as_deref(),
            Some("a6KyiLT9wi03ZSJ6C2gBBLG6xbmRTkFW")
        );
        assert_eq!(query(&url, "returnTo").as_deref(), Some("http://localhost:8100"));
    }

    #[test]
    fn test_invalid_domain_prefix() {
        let auth0 = Auth0Config {
            url: "bad tenant".into(),
            ..Auth0Config::default()
        };

        assert!(matches!(
            auth0.login_url(""),
            Err(EnvironmentError::InvalidUrl { .. })
        ));
    }
}
