//! Route Definitions
//!
//! Maps URLs to handlers with type-safe routing.

use super::handlers::*;
use axum::{
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;

/// Build the API router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check (high priority)
        .route("/health", get(health_handler))
        // Game lifecycle
        .route("/api/games", post(start_game_handler))
        .route("/api/games/:game_id/hit", put(hit_handler))
        .route("/api/games/:game_id/stand", put(stand_handler))
        // Attach shared state
        .with_state(state)
}
