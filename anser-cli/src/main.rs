mod cli;
mod config;
mod serve;
mod telemetry;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { host, port, dev } => {
            let config = Config::from_env()?;
            serve::run_serve(config, &host, port, dev).await
        }
    }
}
