// API route configuration.
// Defines the routing rules of every HTTP endpoint.

use crate::handlers::*;
use actix_web::{web, Scope};

/// API route configuration.
pub fn api_routes() -> Scope {
    web::scope("/api")
        // Stripe donation routes
        .route("/donate", web::post().to(create_donation))
        .route(
            "/donate/{payment_intent_id}",
            web::get().to(get_donation_status),
        )
        // Lightning escrow routes
        .route("/donate-lightning", web::post().to(create_lightning_donation))
        .route("/donate-lightning", web::get().to(get_escrow_status))
        // Mock checkout route
        .route("/donate-mock", web::post().to(create_mock_donation))
        // Artist claim routes
        .service(artist_routes())
        // Spotify listening data routes
        .service(spotify_routes())
        // Community chart route
        .route("/charts", web::get().to(get_charts))
        .route("/version", web::get().to(version_info))
}

/// Artist profile routes.
fn artist_routes() -> Scope {
    web::scope("/artists")
        .route("/claim", web::post().to(submit_claim))
        .route("/claim", web::get().to(get_claim_status))
}

/// Spotify proxy routes.
fn spotify_routes() -> Scope {
    web::scope("/spotify").route("/top-artists", web::get().to(top_artists))
}

/// Public routes (no authentication).
pub fn public_routes() -> Scope {
    web::scope("").route("/health", web::get().to(health_check))
}
