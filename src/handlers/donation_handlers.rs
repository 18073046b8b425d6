// Card donation handlers.
// The real path validates and forwards to the Stripe-backed payment
// process; the mock path synthesizes a success locally. Either way a
// rejected request never produces a downstream call.

use crate::models::{DonationRequest, ErrorResponse};
use crate::services::{MockDonationService, ProxyResult, StripeProxy};
use crate::state::AppStateData;
use crate::utils::extract_session;
use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse, Result as ActixResult};

fn relay_status(status: u16) -> StatusCode {
    StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

/// Create a card donation.
///
/// POST /api/donate
///
/// Requires an authenticated session. The validated payload is forwarded
/// to the payment backend with the session email as receipt fallback;
/// backend rejections are relayed with their original error body.
pub async fn create_donation(
    data: AppStateData,
    request: web::Json<DonationRequest>,
    req: actix_web::HttpRequest,
) -> ActixResult<HttpResponse> {
    let session = match extract_session(&req) {
        Ok(session) => session,
        Err(e) => {
            log::debug!("Rejected unauthenticated donation: {}", e);
            return Ok(HttpResponse::Unauthorized().json(ErrorResponse::authentication_required()));
        }
    };

    let intent = match request
        .into_inner()
        .validate(data.config.donation.min_amount_usd)
    {
        Ok(intent) => intent,
        Err(e) => return Ok(HttpResponse::BadRequest().json(e.to_response())),
    };

    log::info!(
        "Processing Stripe donation: ${} to {}",
        intent.amount,
        intent.artist_name
    );

    let proxy = StripeProxy::new(
        data.http_client.clone(),
        data.config.payments.backend_url.clone(),
    );
    let payload = intent.for_backend(session.email.as_deref());

    match proxy.create_donation(&payload).await {
        Ok(ProxyResult::Ok(ack)) => {
            log::info!("Stripe donation successful: {}", ack.payment_intent_id);
            Ok(HttpResponse::Ok().json(ack.into_response()))
        }
        Ok(ProxyResult::Rejected { status, body }) => {
            log::error!("Payment backend rejected donation ({}): {}", status, body);
            Ok(HttpResponse::build(relay_status(status))
                .json(ErrorResponse::new("Payment processing failed").with_details(body)))
        }
        Err(e) => {
            log::error!("Stripe donation error: {:#}", e);
            Ok(HttpResponse::InternalServerError().json(
                ErrorResponse::new("Payment processing failed")
                    .with_message(format!("{:#}", e))
                    .with_timestamp(),
            ))
        }
    }
}

/// Look up the status of a payment intent.
///
/// GET /api/donate/{payment_intent_id}
///
/// Relays the payment backend's status payload unchanged.
pub async fn get_donation_status(
    data: AppStateData,
    path: web::Path<String>,
) -> ActixResult<HttpResponse> {
    let payment_intent_id = path.into_inner();

    let proxy = StripeProxy::new(
        data.http_client.clone(),
        data.config.payments.backend_url.clone(),
    );

    match proxy.payment_status(&payment_intent_id).await {
        Ok(ProxyResult::Ok(body)) => Ok(HttpResponse::Ok().json(body)),
        Ok(ProxyResult::Rejected { status, body }) => {
            Ok(HttpResponse::build(relay_status(status))
                .json(ErrorResponse::new("Failed to retrieve payment status").with_details(body)))
        }
        Err(e) => {
            log::error!("Error retrieving payment status: {:#}", e);
            Ok(HttpResponse::InternalServerError().json(
                ErrorResponse::new("Failed to retrieve payment status")
                    .with_message(format!("{:#}", e)),
            ))
        }
    }
}

/// Create a mock donation, bypassing the payment backend entirely.
///
/// POST /api/donate-mock
///
/// Public, success-only; used for local testing of the donation flow.
pub async fn create_mock_donation(
    data: AppStateData,
    request: web::Json<DonationRequest>,
) -> ActixResult<HttpResponse> {
    let intent = match request
        .into_inner()
        .validate(data.config.donation.min_amount_usd)
    {
        Ok(intent) => intent,
        Err(e) => return Ok(HttpResponse::BadRequest().json(e.to_response())),
    };

    let service = MockDonationService::new(data.config.donation.mock_latency_ms);
    let response = service.create_payment(&intent).await;
    Ok(HttpResponse::Ok().json(response))
}
