mod cli;
mod error;
mod history;
mod report;
mod sources;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use log::info;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    info!("Starting BuildLens - Build History Insights Tool");
    cli.execute().await?;

    Ok(())
}
