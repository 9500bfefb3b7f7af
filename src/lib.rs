//! TwentyOne - Blackjack Game Server
//!
//! HTTP game server backed by an external card-deck provider. Games are
//! held in memory between moves; the deck provider supplies the shuffled
//! shoe and every drawn card.

pub mod api;
pub mod config;
pub mod deck;
pub mod errors;
pub mod game_store;
pub mod games;
pub mod retry;
pub mod services;
