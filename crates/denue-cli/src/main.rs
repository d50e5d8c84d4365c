mod search;
mod table;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::search::SearchArgs;

#[derive(Debug, Parser)]
#[command(name = "denue")]
#[command(about = "Find potential clients in the INEGI DENUE business registry")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Search establishments by keyword, by state or around a point
    Search(SearchArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = denue_core::load_app_config()?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Search(args)) => search::run(&config, args).await?,
        None => println!("denue: run `denue search --help` to get started"),
    }

    Ok(())
}
