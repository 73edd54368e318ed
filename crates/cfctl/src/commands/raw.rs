use anyhow::Result;
use cloudflare_api::{CloudflareClient, Method};

pub async fn get(client: &CloudflareClient, path: &str) -> Result<()> {
    let path = normalize_path(path);
    let result = client.raw(Method::GET, &path).await?;
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

fn normalize_path(path: &str) -> String {
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    }
}
