//! # Integration Flows
//!
//! Drives the complete gateway router (middleware stack included) with
//! in-memory requests, so every test exercises the same path a real client
//! would: CORS, tracing, validation, schema parsing and the calculator.
//!
//! ## Scenarios covered on both transports:
//!
//! 1. `add(10, 5)` answers 15
//! 2. `divide(10, 0)` fails with a division-by-zero category
//! 3. `power(2, 8)` answers 256
//! 4. `sqrt(-16)` fails with a negative-square-root category
//! 5. `sqrt(16)` answers 4

pub mod rest_flows;
pub mod rpc_flows;

#[cfg(test)]
pub(crate) mod support {
    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
        response::Response,
        Router,
    };
    use math_api_gateway::{ApiGatewayService, GatewayConfig};
    use math_operations::CalculatorService;
    use serde_json::Value;
    use std::sync::Arc;
    use tower::ServiceExt;

    /// Gateway with default configuration and the real calculator.
    pub(crate) fn gateway() -> ApiGatewayService {
        ApiGatewayService::new(GatewayConfig::default(), Arc::new(CalculatorService::new()))
            .expect("default config is valid")
    }

    pub(crate) fn router() -> Router {
        gateway().router()
    }

    pub(crate) async fn send(router: Router, request: Request<Body>) -> Response {
        router.oneshot(request).await.expect("router is infallible")
    }

    pub(crate) async fn post_raw(router: Router, uri: &str, body: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_owned()))
            .expect("valid request");

        let response = send(router, request).await;
        let status = response.status();
        (status, body_json(response).await)
    }

    pub(crate) async fn post_json(router: Router, uri: &str, body: &Value) -> (StatusCode, Value) {
        post_raw(router, uri, &body.to_string()).await
    }

    pub(crate) async fn get_json(router: Router, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("valid request");

        let response = send(router, request).await;
        let status = response.status();
        (status, body_json(response).await)
    }

    pub(crate) async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body readable");
        serde_json::from_slice(&bytes).expect("body is JSON")
    }
}
