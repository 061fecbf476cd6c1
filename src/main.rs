// src/main.rs
use anyhow::Result;
use clap::Parser;
use esg_readiness::cli::Cli;
use esg_readiness::config::AppConfig;
use esg_readiness::questionnaire::cli_handler::execute_command;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Initialize environment
    dotenv::dotenv().ok();

    let config = AppConfig::load()?;

    // Initialize logging; RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    execute_command(cli.command, cli.questions, &config)
}
