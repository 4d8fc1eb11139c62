use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use relais_bot::application::errors::BotError;
use relais_bot::application::messaging::MessageDispatcher;
use relais_bot::infrastructure::adapters::DiscordAdapter;
use relais_bot::infrastructure::config::{Config, Secrets};
use relais_bot::infrastructure::http::ReqwestFetcher;
use relais_bot::infrastructure::{logging, providers};

#[derive(Parser)]
#[command(name = "relais-bot")]
#[command(about = "A Discord command bot for memes, jokes, weather and news", long_about = None)]
struct Cli {
    /// Config file path
    #[arg(short, long, default_value = "config.yaml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Config errors can occur before there is a subscriber to log to
            if logging::is_installed() {
                tracing::error!("{}", e);
            } else {
                eprintln!("relais-bot: {}", e);
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), BotError> {
    let (config, found) = Config::load_or_default(&cli.config)?;

    // Held for the process lifetime so the file writer keeps flushing
    let _log_guard = logging::init(&config.logging)?;
    if !found {
        tracing::warn!("Config file {} not found, using defaults", cli.config.display());
    }

    let secrets = Secrets::from_env()?;

    let fetcher = ReqwestFetcher::new(config.http.timeout())
        .map_err(|e| BotError::Internal(format!("HTTP client: {}", e)))?;
    let context = providers::build_context(&config, &secrets, Arc::new(fetcher));

    tracing::info!("Starting relais-bot with prefix {:?}", config.bot.prefix);
    let dispatcher = Arc::new(MessageDispatcher::new(context));

    DiscordAdapter::new(secrets.discord_token).run(dispatcher).await
}
