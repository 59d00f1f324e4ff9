use crate::config::environment::EnvironmentConfig;
use crate::error::Result;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml, Yaml},
};
use std::path::{Path, PathBuf};
use url::Url;

/// Prefix for environment-variable overrides
pub const ENV_PREFIX: &str = "CAFFEE_";

/// Keys whose environment overrides are taken as raw text
const STRING_KEYS: [&str; 5] = [
    "api_server_url",
    "auth0.url",
    "auth0.audience",
    "auth0.client_id",
    "auth0.callback_url",
];

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load from the default path
    ///
    /// Layers, later wins:
    /// 1. authored defaults
    /// 2. ./environment.toml
    /// 3. `CAFFEE_*` environment variables
    ///
    /// String fields take environment values as written, so an audience of
    /// `12345` or a client id of `00123` is kept as text.
    pub fn load() -> Result<EnvironmentConfig> {
        Self::load_from(default_config_path())
    }

    /// Load from the given file, which may be TOML or YAML
    pub fn load_from(path: impl AsRef<Path>) -> Result<EnvironmentConfig> {
        let path = path.as_ref();
        tracing::debug!("Loading environment configuration from {}", path.display());

        let config: EnvironmentConfig = Self::figment(path).extract()?;
        tracing::info!(
            production = config.production,
            api_server_url = %config.api_server_url,
            "Environment configuration loaded"
        );
        Ok(config)
    }

    /// Layered figment for `path`
    pub fn figment(path: &Path) -> Figment {
        let figment = Figment::from(Serialized::defaults(EnvironmentConfig::default()));
        let figment = if is_yaml(path) {
            figment.merge(Yaml::file(path))
        } else {
            figment.merge(Toml::file(path))
        };
        let env = Env::prefixed(ENV_PREFIX).split("__");

        // Env parses `12345` or `true` into typed values; string fields keep the text.
        let raw = env
            .iter()
            .filter_map(|(key, value)| {
                STRING_KEYS
                    .into_iter()
                    .find(|k| key.as_str().eq_ignore_ascii_case(k))
                    .map(|k| (k, value))
            })
            .collect::<Vec<_>>();
        raw.into_iter()
            .fold(figment.merge(env), |figment, (key, value)| {
                figment.merge(Serialized::default(key, value))
            })
    }

    /// Validate field invariants
    pub fn validate(config: &EnvironmentConfig) -> std::result::Result<(), ConfigValidationError> {
        let strings = [
            ("api_server_url", &config.api_server_url),
            ("auth0.url", &config.auth0.url),
            ("auth0.audience", &config.auth0.audience),
            ("auth0.client_id", &config.auth0.client_id),
            ("auth0.callback_url", &config.auth0.callback_url),
        ];
        for (field, value) in strings {
            if value.trim().is_empty() {
                return Err(ConfigValidationError::EmptyField(field));
            }
        }

        require_absolute_url("api_server_url", &config.api_server_url)?;
        require_absolute_url("auth0.callback_url", &config.auth0.callback_url)?;

        Ok(())
    }
}

fn require_absolute_url(
    field: &'static str,
    value: &str,
) -> std::result::Result<(), ConfigValidationError> {
    let url = Url::parse(value).map_err(|e| ConfigValidationError::InvalidUrl {
        field,
        reason: e.to_string(),
    })?;
    if url.host_str().is_none_or(str::is_empty) {
        return Err(ConfigValidationError::MissingHost(field));
    }
    Ok(())
}

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("yaml") | Some("yml")
    )
}

/// Configuration validation error
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("field '{0}' must not be empty")]
    EmptyField(&'static str),

    #[error("field '{field}' is not a valid url: {reason}")]
    InvalidUrl { field: &'static str, reason: String },

    #[error("field '{0}' has no host")]
    MissingHost(&'static str),
}

/// Default configuration file path
pub fn default_config_path() -> PathBuf {
    PathBuf::from("environment.toml")
}

/// Whether the default configuration file exists
pub fn config_exists() -> bool {
    default_config_path().exists()
}
