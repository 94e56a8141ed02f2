//! CORS middleware.
//!
//! Wrapper around tower-http CORS with gateway configuration.
//!
//! Browsers reject `Access-Control-Allow-Credentials: true` next to a
//! wildcard, so credentials are only sent for explicit origin lists. Wildcard
//! methods and headers are mirrored from the request in that case.

use crate::domain::config::CorsConfig;
use axum::http::{HeaderName, HeaderValue, Method};
use std::time::Duration;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

/// Create CORS layer from gateway config
pub fn create_cors_layer(config: &CorsConfig) -> CorsLayer {
    if !config.enabled {
        // No CORS headers at all: same-origin only
        return CorsLayer::new();
    }

    let wildcard = |list: &[String]| list.iter().any(|v| v == "*");
    let any_origin = wildcard(&config.allowed_origins);
    let credentials = config.allow_credentials && !any_origin;

    let origin = if any_origin {
        AllowOrigin::any()
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        AllowOrigin::list(origins)
    };

    let methods = if !wildcard(&config.allowed_methods) {
        let methods: Vec<Method> = config
            .allowed_methods
            .iter()
            .filter_map(|m| m.parse().ok())
            .collect();
        AllowMethods::list(methods)
    } else if credentials {
        AllowMethods::mirror_request()
    } else {
        AllowMethods::any()
    };

    let headers = if !wildcard(&config.allowed_headers) {
        let headers: Vec<HeaderName> = config
            .allowed_headers
            .iter()
            .filter_map(|h| h.parse().ok())
            .collect();
        AllowHeaders::list(headers)
    } else if credentials {
        AllowHeaders::mirror_request()
    } else {
        AllowHeaders::any()
    };

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(methods)
        .allow_headers(headers)
        .max_age(Duration::from_secs(config.max_age));

    if credentials {
        cors.allow_credentials(true)
    } else {
        cors
    }
}
