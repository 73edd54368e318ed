use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cfctl")]
#[command(about = "Inspect Cloudflare API responses and their errors")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file path
    #[arg(global = true, short, long, env = "CFCTL_CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// API base URL
    #[arg(global = true, long, env = "CLOUDFLARE_BASE_URL")]
    pub base_url: Option<String>,

    /// Scoped API token
    #[arg(global = true, long, env = "CLOUDFLARE_API_TOKEN", hide_env_values = true)]
    pub api_token: Option<String>,

    /// Global API key, used with --api-email
    #[arg(global = true, long, env = "CLOUDFLARE_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Account email for the global API key
    #[arg(global = true, long, env = "CLOUDFLARE_API_EMAIL")]
    pub api_email: Option<String>,

    /// Enable verbose output
    #[arg(global = true, short, long)]
    pub verbose: bool,

    /// Disable color output
    #[arg(global = true, long)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Verify the configured API token
    Verify,

    /// Show zone details
    Zone {
        /// Zone identifier
        #[arg(value_name = "ZONE_ID")]
        zone_id: String,
    },

    /// Show account details
    Account {
        /// Account identifier
        #[arg(value_name = "ACCOUNT_ID")]
        account_id: String,
    },

    /// Issue a GET against an arbitrary API path
    Get {
        /// Path below the base URL, e.g. /zones
        #[arg(value_name = "PATH")]
        path: String,
    },
}
