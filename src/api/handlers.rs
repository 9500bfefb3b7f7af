//! Request Handlers
//!
//! Maps service results onto HTTP responses. Game-not-found surfaces as
//! the move-specific "completed game" message; an exhausted provider
//! surfaces as 503 so the client knows the same move can be retried.

use super::{errors::ApiError, middleware::RequestId, models::*};
use crate::errors::{GameError, ProviderError, TwentyOneError};
use crate::services::GameService;
use axum::{
    extract::{Path, State},
    Extension, Json,
};
use std::sync::Arc;
use tracing::error;

/// Shared application state
pub struct AppState {
    pub service: Arc<GameService>,
    pub version: String,
}

/// Health check handler - minimal response time
/// GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "Running".to_string(),
    })
}

/// Start a new game
/// POST /api/games
pub async fn start_game_handler(
    Extension(request_id): Extension<RequestId>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<GameResponse>, ApiError> {
    match state.service.start_game().await {
        Ok(game) => Ok(Json(GameResponse::from_game(game))),
        Err(e) => {
            error!("Failed to start a game: {}", e);
            Err(ApiError::service_unavailable(
                request_id.0,
                "failed to start a game, please try again later".to_string(),
            ))
        }
    }
}

/// Draw a card for the player
/// PUT /api/games/:game_id/hit
pub async fn hit_handler(
    Extension(request_id): Extension<RequestId>,
    State(state): State<Arc<AppState>>,
    Path(game_id): Path<String>,
) -> Result<Json<GameResponse>, ApiError> {
    state
        .service
        .hit(&game_id)
        .await
        .map(|game| Json(GameResponse::from_game(game)))
        .map_err(|e| move_error(request_id.0, e, "cannot hit a completed game"))
}

/// Finish the game, playing out the dealer's hand
/// PUT /api/games/:game_id/stand
pub async fn stand_handler(
    Extension(request_id): Extension<RequestId>,
    State(state): State<Arc<AppState>>,
    Path(game_id): Path<String>,
) -> Result<Json<GameResponse>, ApiError> {
    state
        .service
        .stand(&game_id)
        .await
        .map(|game| Json(GameResponse::from_game(game)))
        .map_err(|e| move_error(request_id.0, e, "cannot stand on a completed game"))
}

/// Translate a failed hit or stand into an API error.
fn move_error(request_id: String, err: TwentyOneError, completed_message: &str) -> ApiError {
    match err {
        TwentyOneError::Game(GameError::NotFound(_)) => {
            ApiError::not_found(request_id, completed_message.to_string())
        }
        TwentyOneError::Provider(ProviderError::AcquisitionFailed { attempts }) => {
            error!("Draw gave up after {} attempts", attempts);
            ApiError::service_unavailable(
                request_id,
                "failed to draw a card, try again".to_string(),
            )
        }
        other => {
            error!("Unexpected move failure: {}", other);
            ApiError::internal_error(request_id, "internal error".to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::errors::ApiErrorKind;

    #[test]
    fn test_not_found_maps_to_completed_game_message() {
        let err = move_error(
            "req-1".to_string(),
            GameError::NotFound("deck1".to_string()).into(),
            "cannot stand on a completed game",
        );
        match err.kind {
            ApiErrorKind::NotFound(msg) => assert_eq!(msg, "cannot stand on a completed game"),
            other => panic!("unexpected kind: {:?}", other),
        }
    }

    #[test]
    fn test_exhausted_draw_maps_to_service_unavailable() {
        let err = move_error(
            "req-1".to_string(),
            ProviderError::AcquisitionFailed { attempts: 3 }.into(),
            "cannot hit a completed game",
        );
        assert!(matches!(err.kind, ApiErrorKind::ServiceUnavailable(_)));
    }
}
