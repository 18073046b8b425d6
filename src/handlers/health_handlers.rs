// Health and version endpoints.

use crate::services::StripeProxy;
use crate::state::AppStateData;
use actix_web::{HttpResponse, Result as ActixResult};
use chrono::Utc;
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub payment_backend: String,
    pub timestamp: chrono::DateTime<Utc>,
}

/// Service liveness plus a reachability probe of the payment backend.
///
/// GET /health
pub async fn health_check(data: AppStateData) -> ActixResult<HttpResponse> {
    let proxy = StripeProxy::new(
        data.http_client.clone(),
        data.config.payments.backend_url.clone(),
    );

    let payment_backend = if proxy.is_reachable().await {
        "reachable"
    } else {
        "unreachable"
    };

    Ok(HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        payment_backend: payment_backend.to_string(),
        timestamp: Utc::now(),
    }))
}

/// Build metadata.
///
/// GET /api/version
pub async fn version_info() -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "description": env!("CARGO_PKG_DESCRIPTION"),
    })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppState;
    use actix_web::{test, web, App};

    #[actix_web::test]
    async fn test_health_reports_backend_reachability() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/health")
            .with_status(200)
            .create_async()
            .await;

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(AppState::new_for_test_with_backend(
                    &server.url(),
                )))
                .route("/health", web::get().to(health_check)),
        )
        .await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["paymentBackend"], "reachable");
        mock.assert_async().await;
    }

    #[actix_web::test]
    async fn test_version_reports_package_metadata() {
        let app = test::init_service(
            App::new().route("/api/version", web::get().to(version_info)),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/version").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["name"], "fairplay");
        assert!(!body["version"].as_str().unwrap().is_empty());
    }
}
