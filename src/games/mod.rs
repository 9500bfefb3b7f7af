//! Blackjack domain: card and game types, scoring, and table rules.

pub mod rules;
pub mod scoring;
pub mod types;

pub use types::*;
