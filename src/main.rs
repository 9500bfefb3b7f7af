//! TwentyOne Game Server Binary
//!
//! Standalone HTTP server for playing blackjack against the house.

use clap::Parser;
use twentyone::api::ApiServer;
use twentyone::config::TwentyOneConfig;

#[derive(Parser, Debug)]
#[command(name = "twentyone")]
#[command(about = "TwentyOne Blackjack Game Server", long_about = None)]
struct Args {
    /// Server host
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Server port
    #[arg(long, default_value = "8080")]
    port: u16,

    /// Base URL of the card-deck provider
    #[arg(long, default_value = "https://deckofcardsapi.com/api")]
    provider_url: String,

    /// Number of 52-card packs per shoe
    #[arg(long, default_value = "6")]
    deck_count: u32,

    /// Allowed CORS origins (comma-separated, use * for all)
    #[arg(long, default_value = "*")]
    cors_origins: String,

    /// Request timeout in seconds
    #[arg(long, default_value = "30")]
    timeout: u64,

    /// TOML configuration file; when given, the other flags are ignored
    #[arg(long)]
    config: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => TwentyOneConfig::load(path)?,
        None => {
            let mut config = TwentyOneConfig::default();
            config.server.host = args.host;
            config.server.port = args.port;
            config.server.request_timeout_secs = args.timeout;
            config.server.allowed_origins = args
                .cors_origins
                .split(',')
                .map(|s| s.trim().to_string())
                .collect();
            config.provider.base_url = args.provider_url;
            config.table.deck_count = args.deck_count;
            config.validate()?;
            config
        }
    };

    ApiServer::new(config).run().await
}
