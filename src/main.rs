use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use voxara_nbfc_backend::cli::{self, Cli, Commands};
use voxara_nbfc_backend::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up MONGO_URI and API_KEY
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let mut config = AppConfig::from_env().context("invalid configuration")?;

    match cli.command() {
        Commands::Serve { host, port } => {
            cli::apply_overrides(&mut config, host, port);
            voxara_nbfc_backend::server::run(config).await
        }
        Commands::Ping => cli::ping(&config).await,
    }
}
