//! In-memory store of games awaiting a player decision.
//!
//! A game lives here between moves. Taking a game removes it from the
//! map, so at most one request operates on a game at a time; the caller
//! puts the game back when the round is still open and drops it once a
//! winner is decided.

use dashmap::DashMap;

use crate::errors::GameError;
use crate::games::Game;

#[derive(Default)]
pub struct GameStore {
    games: DashMap<String, Game>,
}

impl GameStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a game under its id.
    pub fn put(&self, game: Game) {
        self.games.insert(game.game_id.clone(), game);
    }

    /// Remove and return the game, granting the caller exclusive access.
    ///
    /// A game that is absent is indistinguishable from one that already
    /// finished: concurrent callers race on the removal and exactly one
    /// wins.
    pub fn take(&self, game_id: &str) -> Result<Game, GameError> {
        self.games
            .remove(game_id)
            .map(|(_, game)| game)
            .ok_or_else(|| GameError::NotFound(game_id.to_string()))
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}
