use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::Value;
use tracing::info;
use tracing_subscriber::EnvFilter;
use zabbix_rs::{Config, ZabbixClient};

#[derive(Parser)]
#[command(name = "zabbix")]
#[command(about = "Zabbix JSON-RPC API CLI", long_about = None)]
struct Cli {
    /// Path to a config file (defaults to ./config.toml, then ZABBIX_* env vars)
    #[arg(short, long)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the remote API version
    Version,
    /// Call an API method and print the raw response
    Call {
        /// Method name, e.g. host.get
        method: String,
        /// Parameters as a JSON document
        #[arg(short, long, default_value = "{}")]
        params: String,
    },
    /// Log in with the configured credentials, then log out again
    CheckAuth,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => Config::from_path(path)?,
        None => Config::load()?,
    };

    let client = ZabbixClient::from_config(&config.zabbix).await?;

    match cli.command {
        Commands::Version => {
            let version = client.api_version().await?;
            println!("{version}");
        }
        Commands::Call { method, params } => {
            let params: Value =
                serde_json::from_str(&params).context("--params is not valid JSON")?;
            if zabbix_rs::requires_auth(&method) {
                client.login_from_config(&config.zabbix).await?;
            }
            let response = client.call(&method, params).await?;
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        Commands::CheckAuth => {
            let token = client
                .login_from_config(&config.zabbix)
                .await?
                .ok_or_else(|| anyhow::anyhow!("No credentials or session id configured"))?;
            info!("Login successful ({} character token)", token.len());

            // Leave resumed sessions alive for whoever owns them
            if config.zabbix.session_id.is_none() {
                client.logout().await?;
                info!("Logout successful");
            }
        }
    }

    Ok(())
}
