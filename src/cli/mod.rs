pub mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "shop-catalog-api")]
#[command(about = "Product catalog backend: cards, nodes, characteristics, sizes and orders")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    #[command(about = "Run the HTTP server (default)")]
    Serve {
        #[arg(long, help = "Port to listen on (overrides SERV_PORT / PORT)")]
        port: Option<u16>,
    },

    #[command(about = "Apply database migrations and exit")]
    Migrate,
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = crate::config::config();
    tracing::info!("Starting in {:?} mode", config.environment);

    match cli.command.unwrap_or(Commands::Serve { port: None }) {
        Commands::Serve { port } => commands::serve::run(config, port).await,
        Commands::Migrate => commands::migrate::run(config).await,
    }
}
