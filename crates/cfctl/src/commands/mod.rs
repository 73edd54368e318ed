mod account;
mod raw;
mod token;
mod zone;

use crate::cli::{Cli, Commands};
use crate::config::AppConfig;
use anyhow::{Context, Result};
use cloudflare_api::CloudflareClient;
use cloudflare_auth::create_auth_provider;
use tracing::debug;

pub async fn execute(cli: Cli, config: AppConfig) -> Result<()> {
    let auth_provider = create_auth_provider(config.credentials.clone())
        .context("failed to set up credentials")?;
    let auth_headers = auth_provider.auth_headers().await?;

    debug!(base_url = %config.server.base_url, "creating client");
    let client = CloudflareClient::new(&config.server.base_url, auth_headers);

    match cli.command {
        Commands::Verify => token::verify(&client).await,
        Commands::Zone { zone_id } => zone::execute(&client, &zone_id).await,
        Commands::Account { account_id } => account::execute(&client, &account_id).await,
        Commands::Get { path } => raw::get(&client, &path).await,
    }
}
