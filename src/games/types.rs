//! Core blackjack domain types.
//!
//! Everything here is plain data: the deck client fills it in, the rule
//! engine reads it, and the API layer projects it onto the wire.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use super::scoring;

/// Rank classification used by the scoring fold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rank {
    /// "2".."10"
    Numeral(u32),
    /// JACK, QUEEN, KING
    Face,
    /// ACE (counts 1 or 11)
    Ace,
}

/// Alternate image URLs served by the card provider.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CardImages {
    pub svg: String,
    pub png: String,
}

/// A single playing card as returned by the deck provider.
///
/// Immutable once drawn; `value` is a numeral string "2".."10" or one of
/// "ACE", "JACK", "QUEEN", "KING".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Card {
    pub suit: String,
    pub image: String,
    pub images: CardImages,
    pub code: String,
    pub value: String,
}

impl Card {
    /// Build a card the way the provider would, deriving image URLs from
    /// the two-character code.
    pub fn new(suit: &str, code: &str, value: &str) -> Self {
        Self {
            suit: suit.to_string(),
            image: format!("https://deckofcardsapi.com/static/img/{}.png", code),
            images: CardImages {
                svg: format!("https://deckofcardsapi.com/static/img/{}.svg", code),
                png: format!("https://deckofcardsapi.com/static/img/{}.png", code),
            },
            code: code.to_string(),
            value: value.to_string(),
        }
    }

    /// Classify the card for scoring. Anything non-numeric that is not an
    /// ace counts as a face card worth 10.
    pub fn rank(&self) -> Rank {
        match self.value.parse::<u32>() {
            Ok(n) => Rank::Numeral(n),
            Err(_) if self.value == "ACE" => Rank::Ace,
            Err(_) => Rank::Face,
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.value, self.suit)
    }
}

/// The player's side of the table.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Player {
    pub cards: Vec<Card>,
    pub hand_totals: BTreeSet<u32>,
}

impl Player {
    /// Recompute the candidate totals from scratch over the full card
    /// sequence.
    pub fn recompute_totals(&mut self) {
        self.hand_totals = scoring::hand_totals(&self.cards);
    }

    /// Best total <= 21, or 0 when every candidate busts.
    pub fn best_total(&self) -> u32 {
        scoring::best_under_21(&self.hand_totals)
    }
}

/// The dealer's side: revealed cards plus the face-down card.
///
/// `secret_card` participates in scoring from the opening deal but must
/// never reach the wire while the game is live; the API layer owns that
/// projection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Dealer {
    pub cards: Vec<Card>,
    pub secret_card: Card,
    pub hand_totals: BTreeSet<u32>,
}

impl Dealer {
    pub fn new(up_card: Card, secret_card: Card) -> Self {
        let mut dealer = Self {
            cards: vec![up_card],
            secret_card,
            hand_totals: BTreeSet::new(),
        };
        dealer.recompute_totals();
        dealer
    }

    /// Recompute totals over the secret card followed by the revealed
    /// cards, matching the dealing order.
    pub fn recompute_totals(&mut self) {
        let full_hand: Vec<Card> = std::iter::once(self.secret_card.clone())
            .chain(self.cards.iter().cloned())
            .collect();
        self.hand_totals = scoring::hand_totals(&full_hand);
    }

    /// Best total <= 21 including the secret card, or 0 on bust.
    pub fn best_total(&self) -> u32 {
        scoring::best_under_21(&self.hand_totals)
    }
}

/// Provider-side deck session: opaque id plus the provider's remaining
/// card count.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Deck {
    pub deck_id: String,
    pub remaining: u32,
}

/// Who has won, if anyone. `None` means the game is still in progress.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Winner {
    #[default]
    None,
    Player,
    Dealer,
    Both,
}

impl Winner {
    /// A game with any winner other than `None` has ended.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Winner::None)
    }
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Winner::None => "none",
            Winner::Player => "player",
            Winner::Dealer => "dealer",
            Winner::Both => "both",
        };
        write!(f, "{}", s)
    }
}

/// Full state of one blackjack game.
///
/// `game_id` doubles as the provider deck id. `shuffle_at` is the
/// remaining-card threshold below which a fresh deck should be dealt;
/// computed at start and carried in state, the current resolution logic
/// does not act on it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Game {
    pub game_id: String,
    pub deck: Deck,
    pub shuffle_at: i64,
    pub dealer: Dealer,
    pub player: Player,
    pub winner: Winner,
}
