use cloudflare_api::{ApiError, ErrorKind, TokenStatus};
use colored::Colorize;

/// Multi-line report of a classified API failure.
pub fn describe_api_error(err: &ApiError) -> String {
    let mut lines = vec![format!(
        "{} (HTTP {})",
        err.kind().to_string().red().bold(),
        err.http_status_code()
    )];

    for info in err.errors() {
        if info.code != 0 {
            lines.push(format!("  - {} ({})", info.message, info.code));
        } else {
            lines.push(format!("  - {}", info.message));
        }
    }

    if !err.ray_id().is_empty() {
        lines.push(format!("  ray id: {}", err.ray_id()));
    }

    if let Some(hint) = hint(err.kind()) {
        lines.push(format!("  {}", hint.dimmed()));
    }

    lines.join("\n")
}

fn hint(kind: ErrorKind) -> Option<&'static str> {
    match kind {
        ErrorKind::Authentication => Some("check the configured API token or key"),
        ErrorKind::Authorization => Some("the credentials lack permission for this resource"),
        ErrorKind::Ratelimit => Some("rate limited, try again later"),
        ErrorKind::Service => Some("the API reported a server-side failure"),
        ErrorKind::Request | ErrorKind::NotFound => None,
    }
}

pub fn report_error(err: &anyhow::Error) {
    match err
        .downcast_ref::<cloudflare_api::Error>()
        .and_then(|e| e.api_error())
    {
        Some(api_err) => eprintln!("{}", describe_api_error(api_err)),
        None => eprintln!("{} {:#}", "error:".red().bold(), err),
    }
}

pub fn format_token_status(status: &TokenStatus) -> String {
    match status {
        TokenStatus::Active => status.to_string().green().to_string(),
        TokenStatus::Disabled => status.to_string().yellow().to_string(),
        TokenStatus::Expired => status.to_string().red().to_string(),
    }
}
