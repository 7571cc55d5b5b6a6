use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use sheets2json::cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    sheets2json::run(cli.into_options()).await?;

    Ok(())
}
