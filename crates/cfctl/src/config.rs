use crate::cli::Cli;
use anyhow::{Context, Result};
use cloudflare_api::DEFAULT_BASE_URL;
use cloudflare_auth::AuthConfig;
use config::{Config, File};
use directories::ProjectDirs;
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    #[serde(default)]
    pub credentials: AuthConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub base_url: String,
}

/// `<config dir>/cfctl/config.toml`, read when it exists and no path is given.
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "cloudflare", "cfctl")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Layers defaults, the config file, then command-line and environment values.
pub fn load_config(cli: &Cli) -> Result<AppConfig> {
    let mut builder = Config::builder().set_default("server.base_url", DEFAULT_BASE_URL)?;

    match &cli.config {
        Some(path) => {
            builder = builder.add_source(File::from(path.clone()).required(true));
        }
        None => {
            if let Some(path) = default_config_path() {
                builder = builder.add_source(File::from(path).required(false));
            }
        }
    }

    let settings = builder
        .set_override_option("server.base_url", cli.base_url.clone())?
        .set_override_option("credentials.api_token", cli.api_token.clone())?
        .set_override_option("credentials.api_key", cli.api_key.clone())?
        .set_override_option("credentials.api_email", cli.api_email.clone())?
        .build()
        .context("failed to load configuration")?;

    settings
        .try_deserialize()
        .context("invalid configuration")
}
