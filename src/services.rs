//! Game orchestration service
//!
//! Owns the full lifecycle of a blackjack round: deal, player hit,
//! player stand with the dealer play-out. State moves between the
//! store and the running request; a game only rests in the store while
//! no winner is decided.

use std::sync::Arc;

use tracing::info;

use crate::config::{ProviderConfig, TableConfig};
use crate::deck::{DeckClient, DeckProvider};
use crate::errors::{GameError, TwentyOneResult};
use crate::game_store::GameStore;
use crate::games::{rules, Dealer, Deck, Game, Player, Winner};
use crate::retry::RetryPolicy;

/// Cards pulled in the opening deal: two for the player, the dealer's
/// up card and secret card.
const OPENING_DEAL: u32 = 4;

pub struct GameService {
    store: GameStore,
    deck: DeckClient,
    table: TableConfig,
}

impl GameService {
    pub fn new(provider: Arc<dyn DeckProvider>, provider_config: &ProviderConfig, table: TableConfig) -> Self {
        let policy = RetryPolicy::new(provider_config.draw_attempts, provider_config.draw_backoff());
        Self {
            store: GameStore::new(),
            deck: DeckClient::new(provider, policy),
            table,
        }
    }

    /// Deal a new game: fresh shoe, two player cards, dealer up card and
    /// secret card, naturals resolved immediately.
    ///
    /// Dealing alternates player, dealer, player, dealer; the fourth
    /// card stays face down.
    pub async fn start_game(&self) -> TwentyOneResult<Game> {
        let dealt = self
            .deck
            .new_shuffled_deck(self.table.deck_count, OPENING_DEAL)
            .await
            .map_err(|e| GameError::StartFailed(e.to_string()))?;

        let mut cards = dealt.cards.into_iter();
        let first_player = cards.next();
        let dealer_up = cards.next();
        let second_player = cards.next();
        let dealer_secret = cards.next();
        let (Some(p1), Some(up), Some(p2), Some(secret)) =
            (first_player, dealer_up, second_player, dealer_secret)
        else {
            return Err(GameError::StartFailed("short opening deal".to_string()).into());
        };

        let mut player = Player::default();
        player.cards = vec![p1, p2];
        player.recompute_totals();
        let dealer = Dealer::new(up, secret);

        let mut game = Game {
            game_id: dealt.deck_id.clone(),
            deck: Deck {
                deck_id: dealt.deck_id,
                remaining: dealt.remaining,
            },
            shuffle_at: self.table.shuffle_at(),
            dealer,
            player,
            winner: Winner::None,
        };
        game.winner = rules::resolve_at_start(game.player.best_total(), game.dealer.best_total());

        if game.winner.is_terminal() {
            info!("Game {} ended on the deal: {}", game.game_id, game.winner);
        } else {
            self.store.put(game.clone());
            info!("Game {} dealt, {} cards remaining", game.game_id, game.deck.remaining);
        }
        Ok(game)
    }

    /// Draw one card for the player.
    ///
    /// A failed draw leaves the game exactly as it was, back in the
    /// store, so the player can hit again. A bust ends the game.
    pub async fn hit(&self, game_id: &str) -> TwentyOneResult<Game> {
        let mut game = self.store.take(game_id)?;

        let drawn = match self.deck.draw_card(game_id).await {
            Ok(drawn) => drawn,
            Err(e) => {
                self.store.put(game);
                return Err(e.into());
            }
        };

        game.deck.remaining = drawn.remaining;
        game.player.cards.push(drawn.card);
        game.player.recompute_totals();
        game.winner = rules::resolve_after_player_hit(game.player.best_total());

        if game.winner.is_terminal() {
            info!("Game {} ended on a hit: {}", game.game_id, game.winner);
        } else {
            self.store.put(game.clone());
        }
        Ok(game)
    }

    /// Play out the dealer's hand and settle the game.
    ///
    /// A failed draw mid play-out puts the game back with the cards the
    /// dealer already drew, so a retried stand resumes the play-out
    /// instead of restarting it. A completed stand always removes the
    /// game from the store.
    pub async fn stand(&self, game_id: &str) -> TwentyOneResult<Game> {
        let mut game = self.store.take(game_id)?;
        let best_player = game.player.best_total();

        while rules::dealer_should_hit(best_player, game.dealer.best_total()) {
            let drawn = match self.deck.draw_card(game_id).await {
                Ok(drawn) => drawn,
                Err(e) => {
                    self.store.put(game);
                    return Err(e.into());
                }
            };
            game.deck.remaining = drawn.remaining;
            game.dealer.cards.push(drawn.card);
            game.dealer.recompute_totals();
        }

        game.winner = rules::resolve_at_end(best_player, game.dealer.best_total());
        info!("Game {} settled: {}", game.game_id, game.winner);
        Ok(game)
    }
}
