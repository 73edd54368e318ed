use anyhow::Result;
use cloudflare_api::CloudflareClient;

pub async fn execute(client: &CloudflareClient, account_id: &str) -> Result<()> {
    let account = client.account_details(account_id).await?;
    println!("Account: {} ({})", account.name, account.id);
    Ok(())
}
