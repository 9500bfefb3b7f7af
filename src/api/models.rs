//! API Response Models
//!
//! Response types for the game endpoints, including the projection that
//! keeps the dealer's secret card off the wire while a game is live.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::games::{Card, Deck, Game, Winner};

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

/// Full game state as returned by every game endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameResponse {
    pub game_id: String,
    pub deck: Deck,
    pub shuffle_at: i64,
    pub dealer: DealerView,
    pub player: PlayerView,
    pub winner: Winner,
}

/// Dealer hand as shown to the player.
///
/// While the game is live only the up cards appear; the secret card and
/// the dealer's totals stay hidden. Once a winner is decided the secret
/// card leads the card list and the totals are published.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DealerView {
    pub cards: Vec<Card>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hand_totals: Option<BTreeSet<u32>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerView {
    pub cards: Vec<Card>,
    pub hand_totals: BTreeSet<u32>,
}

impl GameResponse {
    pub fn from_game(game: Game) -> Self {
        let dealer = if game.winner.is_terminal() {
            let mut cards = Vec::with_capacity(game.dealer.cards.len() + 1);
            cards.push(game.dealer.secret_card);
            cards.extend(game.dealer.cards);
            DealerView {
                cards,
                hand_totals: Some(game.dealer.hand_totals),
            }
        } else {
            DealerView {
                cards: game.dealer.cards,
                hand_totals: None,
            }
        };

        Self {
            game_id: game.game_id,
            deck: game.deck,
            shuffle_at: game.shuffle_at,
            dealer,
            player: PlayerView {
                cards: game.player.cards,
                hand_totals: game.player.hand_totals,
            },
            winner: game.winner,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::{Dealer, Player};

    fn game(winner: Winner) -> Game {
        let mut player = Player::default();
        player.cards = vec![
            Card::new("HEARTS", "KH", "KING"),
            Card::new("CLUBS", "9C", "9"),
        ];
        player.recompute_totals();
        Game {
            game_id: "deck1".to_string(),
            deck: Deck {
                deck_id: "deck1".to_string(),
                remaining: 308,
            },
            shuffle_at: 237,
            dealer: Dealer::new(
                Card::new("SPADES", "4S", "4"),
                Card::new("DIAMONDS", "7D", "7"),
            ),
            player,
            winner,
        }
    }

    #[test]
    fn test_live_game_hides_secret_card() {
        let response = GameResponse::from_game(game(Winner::None));

        assert_eq!(response.dealer.cards.len(), 1);
        assert_eq!(response.dealer.cards[0].code, "4S");
        assert!(response.dealer.hand_totals.is_none());

        let json = serde_json::to_value(&response).unwrap();
        assert!(json["dealer"].get("hand_totals").is_none());
        assert!(json["dealer"].get("secret_card").is_none());
        assert_eq!(json["winner"], "none");
    }

    #[test]
    fn test_finished_game_reveals_secret_card_first() {
        let response = GameResponse::from_game(game(Winner::Player));

        assert_eq!(response.dealer.cards.len(), 2);
        assert_eq!(response.dealer.cards[0].code, "7D");
        assert_eq!(response.dealer.cards[1].code, "4S");
        assert!(response.dealer.hand_totals.is_some());
    }

    #[test]
    fn test_player_totals_always_visible() {
        let response = GameResponse::from_game(game(Winner::None));
        assert!(response.player.hand_totals.contains(&19));
    }
}
