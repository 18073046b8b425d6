// Spotify listening data handlers.
// The service keeps no Spotify credentials of its own; the caller's
// bearer token is forwarded upstream and upstream failures map onto a
// coded error contract the UI can branch on.

use crate::models::ErrorResponse;
use crate::services::SpotifyService;
use crate::state::AppStateData;
use crate::utils::extract_session;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, Result as ActixResult};

/// Fetch the caller's top artists over all three Spotify ranges.
///
/// GET /api/spotify/top-artists
///
/// Requires an authenticated session whose token is valid for the
/// Spotify Web API.
pub async fn top_artists(
    data: AppStateData,
    req: actix_web::HttpRequest,
) -> ActixResult<HttpResponse> {
    let session = match extract_session(&req) {
        Ok(session) => session,
        Err(e) => {
            log::debug!("Rejected unauthenticated top-artists request: {}", e);
            return Ok(HttpResponse::Unauthorized().json(
                ErrorResponse::new("Not authenticated")
                    .with_message("Please sign in with Spotify to view your top artists"),
            ));
        }
    };

    let service = SpotifyService::new(
        data.http_client.clone(),
        data.config.spotify.api_base_url.clone(),
    );

    match service.top_artists(&session.access_token).await {
        Ok(artists) => Ok(HttpResponse::Ok().json(artists)),
        Err(e) => {
            log::error!("Spotify top-artists fetch failed: {}", e);
            let status = StatusCode::from_u16(e.status_code())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            Ok(HttpResponse::build(status).json(
                ErrorResponse::new(e.title())
                    .with_message(e.to_string())
                    .with_code(e.code()),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppState;
    use actix_web::{test, web, App};
    use mockito::Matcher;

    macro_rules! spotify_app {
        ($state:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new($state))
                    .route("/api/spotify/top-artists", web::get().to(top_artists)),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_top_artists_requires_authentication() {
        let app = spotify_app!(AppState::new_for_test());

        let req = test::TestRequest::get()
            .uri("/api/spotify/top-artists")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 401);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Not authenticated");
        assert_eq!(
            body["message"],
            "Please sign in with Spotify to view your top artists"
        );
    }

    #[actix_web::test]
    async fn test_expired_token_maps_to_coded_error() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/me/top/artists")
            .match_query(Matcher::Any)
            .with_status(401)
            .with_body(r#"{"error":{"status":401}}"#)
            .expect_at_least(1)
            .create_async()
            .await;

        let app = spotify_app!(AppState::new_for_test_with_spotify(&server.url()));

        let req = test::TestRequest::get()
            .uri("/api/spotify/top-artists")
            .insert_header(("Authorization", "Bearer stale-token"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 401);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], "TOKEN_EXPIRED");
        mock.assert_async().await;
    }

    #[actix_web::test]
    async fn test_top_artists_aggregates_all_ranges() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/me/top/artists")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"items":[{"id":"a1","name":"Clairo","genres":["indie pop"],"images":[],"popularity":78,"external_urls":{}}]}"#,
            )
            .expect(3)
            .create_async()
            .await;

        let app = spotify_app!(AppState::new_for_test_with_spotify(&server.url()));

        let req = test::TestRequest::get()
            .uri("/api/spotify/top-artists")
            .insert_header(("Authorization", "Bearer good-token"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["weekly"][0]["name"], "Clairo");
        assert_eq!(body["monthly"][0]["name"], "Clairo");
        assert_eq!(body["yearly"][0]["name"], "Clairo");
    }
}
