mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use dia_config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing; stdout is reserved for reports
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = cli::Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    match cli.command {
        cli::Commands::Summarize {
            source,
            json,
            show_masked,
            lang,
        } => commands::summarize::handle(&config, source, json, show_masked, lang).await,
        cli::Commands::Mask { text, json } => commands::mask::handle(text, json),
        cli::Commands::Rules => commands::rules::handle(),
        cli::Commands::Completions { shell } => commands::completions::handle(shell),
    }
}
