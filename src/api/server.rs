//! API Server
//!
//! Server setup, middleware stack, and graceful shutdown.

use super::{
    handlers::AppState,
    middleware::{create_cors_layer, request_id_middleware},
    routes::create_router,
};
use crate::config::TwentyOneConfig;
use crate::deck::CardsApiClient;
use crate::services::GameService;
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};
use tracing::info;

/// Game API server
pub struct ApiServer {
    config: TwentyOneConfig,
}

impl ApiServer {
    pub fn new(config: TwentyOneConfig) -> Self {
        Self { config }
    }

    /// Start the API server
    pub async fn run(self) -> Result<(), Box<dyn std::error::Error>> {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "twentyone=info,tower_http=info".into()),
            )
            .init();

        info!("🚀 Starting TwentyOne Game Server");

        let app = self.create_app()?;
        let addr = self.get_socket_addr()?;

        info!("🌐 Listen: http://{}", addr);
        self.log_server_info();

        let listener = tokio::net::TcpListener::bind(addr).await?;

        info!("✅ Game server running");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("🛑 Game server stopped gracefully");
        Ok(())
    }

    /// Create the application with the middleware stack
    fn create_app(&self) -> Result<axum::Router, Box<dyn std::error::Error>> {
        let provider = Arc::new(CardsApiClient::new(&self.config.provider)?);
        let service = Arc::new(GameService::new(
            provider,
            &self.config.provider,
            self.config.table.clone(),
        ));
        let state = Arc::new(AppState {
            service,
            version: env!("CARGO_PKG_VERSION").to_string(),
        });

        Ok(create_router(state)
            // Request ID middleware (first for tracing)
            .layer(axum::middleware::from_fn(request_id_middleware))
            // CORS layer (before timeout to handle preflight)
            .layer(create_cors_layer(self.config.server.allowed_origins.clone()))
            // Timeout layer
            .layer(TimeoutLayer::new(self.config.request_timeout()))
            // Tracing layer (last for complete request tracing)
            .layer(TraceLayer::new_for_http()))
    }

    /// Get socket address from config
    fn get_socket_addr(&self) -> Result<SocketAddr, Box<dyn std::error::Error>> {
        Ok(SocketAddr::from((
            self.config.server.host.parse::<std::net::IpAddr>()?,
            self.config.server.port,
        )))
    }

    /// Log server information
    fn log_server_info(&self) {
        info!("📋 Server Configuration:");
        info!("   Provider: {}", self.config.provider.base_url);
        info!("   Decks per shoe: {}", self.config.table.deck_count);
        info!(
            "   Draw retries: {} x {}ms",
            self.config.provider.draw_attempts, self.config.provider.draw_backoff_ms
        );
        info!("   CORS: {:?}", self.config.server.allowed_origins);
        info!("   Request timeout: {}s", self.config.server.request_timeout_secs);

        info!("📊 Available endpoints:");
        info!("   GET  /health                    - Health check");
        info!("   POST /api/games                 - Start a game");
        info!("   PUT  /api/games/:game_id/hit    - Draw a card");
        info!("   PUT  /api/games/:game_id/stand  - Finish the game");
    }
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            info!("Received terminate signal");
        },
    }
}
