use clap::{Parser, Subcommand};

use crate::config::AppConfig;
use crate::database::{DocumentStore, MongoStore};

#[derive(Parser, Debug)]
#[command(name = "voxara-nbfc-backend")]
#[command(about = "Daily call report backend for NBFC field employees")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    #[command(about = "Run the HTTP server (default)")]
    Serve {
        #[arg(long, help = "Listen host, overrides HOST")]
        host: Option<String>,
        #[arg(long, help = "Listen port, overrides PORT")]
        port: Option<u16>,
    },

    #[command(about = "Check that the configured MongoDB deployment is reachable")]
    Ping,
}

impl Cli {
    /// Subcommand to run, `serve` when none was given
    pub fn command(self) -> Commands {
        self.command.unwrap_or(Commands::Serve {
            host: None,
            port: None,
        })
    }
}

/// Apply `serve` flag overrides on top of the environment configuration
pub fn apply_overrides(config: &mut AppConfig, host: Option<String>, port: Option<u16>) {
    if let Some(host) = host {
        config.api.host = host;
    }
    if let Some(port) = port {
        config.api.port = port;
    }
}

pub async fn ping(config: &AppConfig) -> anyhow::Result<()> {
    let store = MongoStore::connect(&config.database).await?;
    store.ping().await?;
    println!("MongoDB database '{}' is reachable", config.database.name);
    Ok(())
}
