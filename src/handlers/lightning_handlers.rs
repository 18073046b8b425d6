// Lightning donation handlers.
// Both operations require an authenticated session before any other
// processing; escrow receipts and status snapshots come from the
// simulated escrow service.

use crate::models::{ErrorResponse, EscrowLookupQuery, LightningDonationRequest};
use crate::services::EscrowService;
use crate::state::AppStateData;
use crate::utils::extract_session;
use actix_web::{web, HttpResponse, Result as ActixResult};

/// Create a Lightning donation held in simulated escrow.
///
/// POST /api/donate-lightning
///
/// Requires an authenticated session.
/// Request body: LightningDonationRequest
/// Response: LightningDonationResponse
pub async fn create_lightning_donation(
    data: AppStateData,
    request: web::Json<LightningDonationRequest>,
    req: actix_web::HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(e) = extract_session(&req) {
        log::debug!("Rejected unauthenticated Lightning donation: {}", e);
        return Ok(HttpResponse::Unauthorized().json(ErrorResponse::authentication_required()));
    }

    let intent = match request
        .into_inner()
        .validate(data.config.donation.min_amount_btc)
    {
        Ok(intent) => intent,
        Err(e) => return Ok(HttpResponse::BadRequest().json(e.to_response())),
    };

    let service = EscrowService::from_config(&data.config.donation);
    let receipt = service.create_escrow(&intent).await;
    Ok(HttpResponse::Ok().json(receipt))
}

/// Look up the status of an escrow.
///
/// GET /api/donate-lightning?escrowId=
///
/// Requires an authenticated session. The snapshot is synthesized;
/// escrow identifiers are not persisted anywhere.
pub async fn get_escrow_status(
    data: AppStateData,
    query: web::Query<EscrowLookupQuery>,
    req: actix_web::HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(e) = extract_session(&req) {
        log::debug!("Rejected unauthenticated escrow lookup: {}", e);
        return Ok(HttpResponse::Unauthorized().json(ErrorResponse::authentication_required()));
    }

    let escrow_id = match query.into_inner().escrow_id {
        Some(id) if !id.trim().is_empty() => id,
        _ => {
            return Ok(HttpResponse::BadRequest().json(ErrorResponse::new("Escrow ID required")))
        }
    };

    let service = EscrowService::from_config(&data.config.donation);
    Ok(HttpResponse::Ok().json(service.escrow_status(&escrow_id)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppState;
    use actix_web::{test, App};
    use serde_json::json;

    macro_rules! lightning_app {
        () => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new(AppState::new_for_test()))
                    .route(
                        "/api/donate-lightning",
                        web::post().to(create_lightning_donation),
                    )
                    .route("/api/donate-lightning", web::get().to(get_escrow_status)),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_lightning_donation_requires_authentication() {
        let app = lightning_app!();

        let req = test::TestRequest::post()
            .uri("/api/donate-lightning")
            .set_json(json!({
                "artistName": "X",
                "artistId": "1",
                "amount": 0.002,
                "walletAddress": "phoenix_k3j9x2m4q"
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 401);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Authentication required");
    }

    #[actix_web::test]
    async fn test_lightning_donation_missing_wallet() {
        let app = lightning_app!();

        let req = test::TestRequest::post()
            .uri("/api/donate-lightning")
            .insert_header(("Authorization", "Bearer token"))
            .set_json(json!({"artistName": "X", "artistId": "1", "amount": 0.002}))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert!(body["required"]
            .as_array()
            .unwrap()
            .contains(&json!("walletAddress")));
    }

    #[actix_web::test]
    async fn test_lightning_donation_creates_escrow() {
        let app = lightning_app!();

        let req = test::TestRequest::post()
            .uri("/api/donate-lightning")
            .insert_header(("Authorization", "Bearer token"))
            .set_json(json!({
                "artistName": "Test Artist",
                "artistId": "a1",
                "amount": "0.002",
                "walletAddress": "breez_ab12cd34e"
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "escrowed");
        assert_eq!(body["currency"], "BTC");
        assert!(body["escrowId"].as_str().unwrap().starts_with("htlc_"));
        assert_eq!(body["escrowDetails"]["verificationRequired"], true);
    }

    #[actix_web::test]
    async fn test_escrow_lookup_requires_id() {
        let app = lightning_app!();

        let req = test::TestRequest::get()
            .uri("/api/donate-lightning")
            .insert_header(("Authorization", "Bearer token"))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Escrow ID required");
    }

    #[actix_web::test]
    async fn test_escrow_lookup_synthesizes_pending_status() {
        let app = lightning_app!();

        let req = test::TestRequest::get()
            .uri("/api/donate-lightning?escrowId=htlc_123_abc")
            .insert_header(("Authorization", "Bearer token"))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["escrowId"], "htlc_123_abc");
        assert_eq!(body["verificationStatus"], "pending");
    }
}
