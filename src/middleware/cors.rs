// CORS middleware configuration.
// The API is consumed by a browser frontend served from a different
// port during development.

use actix_cors::Cors;
use actix_web::http::header;

/// Create the CORS middleware.
///
/// Allows localhost origins on any port plus the standard auth and
/// content headers the frontend sends.
pub fn create_cors() -> Cors {
    Cors::default()
        .allowed_origin_fn(|origin, _req_head| {
            origin.as_bytes().starts_with(b"http://localhost")
                || origin.as_bytes().starts_with(b"https://localhost")
                || origin.as_bytes().starts_with(b"http://127.0.0.1")
                || origin.as_bytes().starts_with(b"https://127.0.0.1")
        })
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::HeaderName::from_static("x-user-email"),
        ])
        .max_age(3600)
}
