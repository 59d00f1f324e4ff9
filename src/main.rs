use anyhow::Context;
use caffee_env::api::ApiRoute;
use caffee_env::config::loader::{ConfigLoader, default_config_path};
use caffee_env::observability::{init_tracing, structured_from_env};
use serde_json::json;
use std::path::PathBuf;
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing(structured_from_env());

    let path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(default_config_path);
    info!("Resolving environment from {}", path.display());

    let config = ConfigLoader::load_from(&path)?;
    ConfigLoader::validate(&config).context("environment configuration failed validation")?;
    let env = caffee_env::install(config)?;

    let routes = [ApiRoute::ListDrinks, ApiRoute::DrinkDetails]
        .iter()
        .map(|route| Ok((route.path(), json!(env.route_url(route)?.as_str()))))
        .collect::<caffee_env::Result<serde_json::Map<String, serde_json::Value>>>()?;

    let resolved = json!({
        "environment": env,
        "auth0": {
            "tenant_domain": env.auth0.tenant_domain(),
            "issuer": env.auth0.issuer(),
            "login_url": env.auth0.login_url("")?.as_str(),
            "logout_url": env.auth0.logout_url()?.as_str(),
        },
        "routes": routes,
    });
    println!("{}", serde_json::to_string_pretty(&resolved)?);

    Ok(())
}
