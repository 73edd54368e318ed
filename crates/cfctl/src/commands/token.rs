use crate::output::format_token_status;
use anyhow::Result;
use cloudflare_api::{CloudflareClient, TokenVerification};

pub async fn verify(client: &CloudflareClient) -> Result<()> {
    let token = client.verify_token().await?;
    println!("{}", render(&token));
    Ok(())
}

fn render(token: &TokenVerification) -> String {
    let mut out = format!("Token {} is {}", token.id, format_token_status(&token.status));
    if let Some(expires_on) = token.expires_on {
        out.push_str(&format!("\nExpires: {}", expires_on.format("%Y-%m-%d %H:%M:%S UTC")));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use cloudflare_api::TokenStatus;

    #[test]
    fn test_render_without_expiry() {
        let token = TokenVerification {
            id: "abc".to_string(),
            status: TokenStatus::Active,
            not_before: None,
            expires_on: None,
        };
        let out = render(&token);
        assert!(out.starts_with("Token abc is "));
        assert!(out.contains("active"));
        assert!(!out.contains("Expires"));
    }
}
