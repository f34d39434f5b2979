//! KindBite assistant terminal entry point.

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod listings;

/// KindBite food-rescue assistant
#[derive(Parser)]
#[command(name = "kindbite")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Chat with the assistant (REPL)
    Chat(commands::chat::ChatArgs),

    /// Print the statistics snapshot for a listings file
    Stats(commands::stats::StatsArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "kindbite=debug,kindbite_engine=debug,kindbite_session=debug,kindbite_memory=debug,info"
    } else {
        "kindbite=info,warn"
    };
    tracing_subscriber::fmt()
        .with_target(true)
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .init();

    match cli.command {
        Commands::Chat(args) => commands::chat::run(args).await,
        Commands::Stats(args) => commands::stats::run(args),
    }
}
