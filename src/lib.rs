// FairPlay donation API.
// Connects Spotify listening data to artist-support payments: card
// donations proxied to a Stripe-backed backend, simulated Lightning
// escrow donations, artist profile claims, community donation charts
// and a Spotify top-artists proxy. The `client` module carries the
// embeddable donation flow state machine the frontend drives.

pub mod client;
pub mod config;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;
