//! Card-deck provider client
//!
//! Talks to a deck-of-cards HTTP API: one call to create a shuffled
//! multi-pack shoe with an initial deal, then single-card draws against
//! the same deck id. Draws go through a fixed-delay retry policy; deck
//! creation does not.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::warn;

use crate::config::ProviderConfig;
use crate::errors::ProviderError;
use crate::games::Card;
use crate::retry::{retry, RetryPolicy};

/// A freshly shuffled shoe together with its initial deal.
#[derive(Clone, Debug)]
pub struct DealtDeck {
    pub deck_id: String,
    pub remaining: u32,
    pub cards: Vec<Card>,
}

/// A single card drawn from an existing shoe.
#[derive(Clone, Debug)]
pub struct DrawnCard {
    pub card: Card,
    pub remaining: u32,
}

/// Source of shuffled decks and drawn cards.
#[async_trait]
pub trait DeckProvider: Send + Sync {
    /// Create a shuffled shoe of `deck_count` packs and draw
    /// `card_count` cards from it in one round trip.
    async fn new_shuffled_deck(
        &self,
        deck_count: u32,
        card_count: u32,
    ) -> Result<DealtDeck, ProviderError>;

    /// Draw one card from an existing shoe.
    async fn draw_card(&self, deck_id: &str) -> Result<DrawnCard, ProviderError>;
}

/// Wire shape shared by the provider's new-deck and draw endpoints.
#[derive(Debug, Deserialize)]
struct DrawResponse {
    success: bool,
    deck_id: String,
    remaining: u32,
    #[serde(default)]
    cards: Vec<Card>,
}

/// HTTP client for the deckofcardsapi.com wire format.
pub struct CardsApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl CardsApiClient {
    pub fn new(config: &ProviderConfig) -> Result<Self, ProviderError> {
        let http = reqwest::Client::builder()
            .timeout(config.http_timeout())
            .build()
            .map_err(|e| ProviderError::Unavailable(e.to_string()))?;
        Ok(Self {
            http,
            base_url: config.base_url.clone(),
        })
    }

    async fn get_draw(&self, url: &str) -> Result<DrawResponse, ProviderError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| ProviderError::Unavailable(e.to_string()))?;
        let response = response
            .error_for_status()
            .map_err(|e| ProviderError::Unavailable(e.to_string()))?;
        let body: DrawResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Unavailable(e.to_string()))?;
        if !body.success {
            return Err(ProviderError::EmptyDraw);
        }
        Ok(body)
    }
}

#[async_trait]
impl DeckProvider for CardsApiClient {
    async fn new_shuffled_deck(
        &self,
        deck_count: u32,
        card_count: u32,
    ) -> Result<DealtDeck, ProviderError> {
        let url = format!(
            "{}/deck/new/draw/?count={}&deck_count={}",
            self.base_url, card_count, deck_count
        );
        let body = self.get_draw(&url).await?;
        if body.cards.len() < card_count as usize {
            return Err(ProviderError::EmptyDraw);
        }
        Ok(DealtDeck {
            deck_id: body.deck_id,
            remaining: body.remaining,
            cards: body.cards,
        })
    }

    async fn draw_card(&self, deck_id: &str) -> Result<DrawnCard, ProviderError> {
        let url = format!("{}/deck/{}/draw/?count=1", self.base_url, deck_id);
        let body = self.get_draw(&url).await?;
        let card = body.cards.into_iter().next().ok_or(ProviderError::EmptyDraw)?;
        Ok(DrawnCard {
            card,
            remaining: body.remaining,
        })
    }
}

/// Provider wrapper that retries single-card draws.
///
/// Deck creation is passed through unretried: a failed start leaves no
/// state behind and the caller simply asks again.
pub struct DeckClient {
    provider: Arc<dyn DeckProvider>,
    policy: RetryPolicy,
}

impl DeckClient {
    pub fn new(provider: Arc<dyn DeckProvider>, policy: RetryPolicy) -> Self {
        Self { provider, policy }
    }

    pub async fn new_shuffled_deck(
        &self,
        deck_count: u32,
        card_count: u32,
    ) -> Result<DealtDeck, ProviderError> {
        self.provider.new_shuffled_deck(deck_count, card_count).await
    }

    pub async fn draw_card(&self, deck_id: &str) -> Result<DrawnCard, ProviderError> {
        let attempts = self.policy.max_attempts.max(1);
        retry(self.policy, || self.provider.draw_card(deck_id))
            .await
            .map_err(|e| {
                warn!("Draw exhausted {} attempts against deck {}: {}", attempts, deck_id, e);
                ProviderError::AcquisitionFailed { attempts }
            })
    }
}
