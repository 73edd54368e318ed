use anyhow::Result;
use cloudflare_api::{CloudflareClient, Zone};

pub async fn execute(client: &CloudflareClient, zone_id: &str) -> Result<()> {
    let zone = client.zone_details(zone_id).await?;
    println!("{}", render(&zone));
    Ok(())
}

fn render(zone: &Zone) -> String {
    let mut lines = vec![
        format!("Zone: {} ({})", zone.name, zone.id),
        format!("Status: {}{}", zone.status, if zone.paused { ", paused" } else { "" }),
    ];
    if !zone.name_servers.is_empty() {
        lines.push(format!("Name servers: {}", zone.name_servers.join(", ")));
    }
    lines.join("\n")
}
