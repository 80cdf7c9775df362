//! HTTP middleware

use axum::http::{header, Method};
use std::time::Duration;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
};

/// Create CORS middleware: any origin, the usual browser methods and headers.
pub fn cors_middleware() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::HEAD,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::ORIGIN,
            header::CONTENT_LENGTH,
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::CACHE_CONTROL,
            header::PRAGMA,
            header::EXPIRES,
        ])
}

/// Create timeout middleware
pub fn timeout_middleware(timeout: Duration) -> TimeoutLayer {
    TimeoutLayer::new(timeout)
}
