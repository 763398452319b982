use axum::http::{header, HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};

/// Restricts browsers to one origin when configured, otherwise allows any.
pub fn cors_layer(origin: Option<&str>) -> CorsLayer {
    let methods = [Method::GET, Method::POST, Method::PUT, Method::DELETE];

    match origin.and_then(|o| o.parse::<HeaderValue>().ok()) {
        Some(origin) => CorsLayer::new()
            .allow_origin(origin)
            .allow_methods(methods)
            .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]),
        None => {
            if let Some(raw) = origin {
                tracing::warn!("Ignoring unparseable CORS_ORIGIN '{}'", raw);
            }
            CorsLayer::new()
                .allow_methods(methods)
                .allow_headers(Any)
                .allow_origin(Any)
        }
    }
}
