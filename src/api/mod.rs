//! Game API Service
//!
//! HTTP surface for the blackjack game server: routing, handlers,
//! response models, error mapping, and middleware.

pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod server;

pub use server::ApiServer;
