// Artist claim handlers.

use crate::models::{ClaimLookupQuery, ClaimRequest, ErrorResponse};
use crate::services::ClaimService;
use crate::state::AppStateData;
use crate::utils::extract_session;
use actix_web::{web, HttpResponse, Result as ActixResult};

/// Submit an artist profile claim for review.
///
/// POST /api/artists/claim
///
/// Requires an authenticated session.
/// Request body: ClaimRequest
/// Response: ClaimResponse
pub async fn submit_claim(
    data: AppStateData,
    request: web::Json<ClaimRequest>,
    req: actix_web::HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(e) = extract_session(&req) {
        log::debug!("Rejected unauthenticated claim submission: {}", e);
        return Ok(HttpResponse::Unauthorized().json(ErrorResponse::authentication_required()));
    }

    let intent = match request.into_inner().validate() {
        Ok(intent) => intent,
        Err(e) => return Ok(HttpResponse::BadRequest().json(e.to_response())),
    };

    let service = ClaimService::from_config(&data.config.donation);
    let receipt = service.submit(&intent).await;
    Ok(HttpResponse::Ok().json(receipt))
}

/// Look up the review status of a claim.
///
/// GET /api/artists/claim?claimId=
///
/// Requires an authenticated session. Status is synthesized; claims
/// are not persisted anywhere.
pub async fn get_claim_status(
    data: AppStateData,
    query: web::Query<ClaimLookupQuery>,
    req: actix_web::HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(e) = extract_session(&req) {
        log::debug!("Rejected unauthenticated claim lookup: {}", e);
        return Ok(HttpResponse::Unauthorized().json(ErrorResponse::authentication_required()));
    }

    let claim_id = match query.into_inner().claim_id {
        Some(id) if !id.trim().is_empty() => id,
        _ => return Ok(HttpResponse::BadRequest().json(ErrorResponse::new("Claim ID required"))),
    };

    let service = ClaimService::from_config(&data.config.donation);
    Ok(HttpResponse::Ok().json(service.claim_status(&claim_id)))
}
