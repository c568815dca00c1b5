use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod analysis;
mod cli;
mod config;
mod error;
mod output;
mod parser;
mod planner;
mod provider;
mod store;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing - only show logs with --verbose
    let filter = if cli.verbose {
        EnvFilter::new("stride=debug")
    } else {
        EnvFilter::new("stride=warn")
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Generate(args) => cli::generate::execute(&cli.config, args).await,
        Commands::Analyze(args) => cli::analyze::execute(&cli.config, args),
        Commands::Complete(args) => cli::complete::execute(&cli.config, args),
        Commands::Schema => cli::schema::execute(),
    }
}
