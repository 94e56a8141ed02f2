//! # REST Flows
//!
//! `POST /api/v1/{operation}` with a JSON operand object.

#[cfg(test)]
mod tests {
    use crate::integration::support::{get_json, post_json, post_raw, router, send};
    use axum::{
        body::Body,
        http::{header, Method, Request, StatusCode},
    };
    use serde_json::json;

    // =============================================================================
    // SCENARIOS
    // =============================================================================

    #[tokio::test]
    async fn test_add_ten_and_five() {
        let (status, body) = post_json(router(), "/api/v1/add", &json!({"a": 10, "b": 5})).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({"operation": "add", "a": 10.0, "b": 5.0, "result": 15.0})
        );
    }

    #[tokio::test]
    async fn test_divide_by_zero() {
        let (status, body) = post_json(router(), "/api/v1/divide", &json!({"a": 10, "b": 0})).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"], "Division By Zero");
        assert_eq!(body["message"], "Division by zero is not allowed");
    }

    #[tokio::test]
    async fn test_power_two_to_eight() {
        let (status, body) = post_json(
            router(),
            "/api/v1/power",
            &json!({"base": 2, "exponent": 8}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({"operation": "power", "base": 2.0, "exponent": 8.0, "result": 256.0})
        );
    }

    #[tokio::test]
    async fn test_sqrt_of_negative() {
        let (status, body) = post_json(router(), "/api/v1/sqrt", &json!({"number": -16})).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"], "Negative Square Root");
        assert_eq!(body["message"], "Square root of negative number is not allowed");
    }

    #[tokio::test]
    async fn test_sqrt_of_sixteen() {
        let (status, body) = post_json(router(), "/api/v1/sqrt", &json!({"number": 16})).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({"operation": "sqrt", "input": 16.0, "result": 4.0})
        );
    }

    // =============================================================================
    // SCHEMA LAYER
    // =============================================================================

    #[tokio::test]
    async fn test_extra_fields_ignored() {
        let (status, body) = post_json(
            router(),
            "/api/v1/multiply",
            &json!({"a": 3, "b": 4, "note": "ignored"}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["result"], 12.0);
        assert!(body.get("note").is_none());
    }

    #[tokio::test]
    async fn test_missing_field_is_bad_request() {
        let (status, body) = post_json(router(), "/api/v1/subtract", &json!({"a": 3})).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"], "Bad Request");
        assert!(body["message"].as_str().unwrap().contains('b'));
    }

    #[tokio::test]
    async fn test_numeric_string_coerced() {
        let (status, body) = post_json(router(), "/api/v1/add", &json!({"a": "10", "b": 5})).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["result"], 15.0);
    }

    #[tokio::test]
    async fn test_boolean_operand_coerced() {
        let (status, body) = post_json(router(), "/api/v1/subtract", &json!({"a": true, "b": false})).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({"operation": "subtract", "a": 1.0, "b": 0.0, "result": 1.0})
        );
    }

    #[tokio::test]
    async fn test_overflow_is_internal_error() {
        for (op, payload) in [
            ("add", json!({"a": 1e308, "b": 1e308})),
            ("multiply", json!({"a": 1e200, "b": 1e200})),
            ("divide", json!({"a": 1e308, "b": 1e-308})),
        ] {
            let uri = format!("/api/v1/{}", op);
            let (status, body) = post_json(router(), &uri, &payload).await;

            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{}", op);
            assert_eq!(
                body,
                json!({"error": "Internal Server Error", "message": "An unexpected error occurred"})
            );
        }
    }

    #[tokio::test]
    async fn test_tangent_of_infinity_is_invalid() {
        let (status, body) = post_json(router(), "/api/v1/tan", &json!({"number": "-inf"})).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid Operation");
        assert_eq!(body["message"], "Invalid tangent operation");
    }

    #[tokio::test]
    async fn test_malformed_json_body() {
        let (status, body) = post_raw(router(), "/api/v1/add", "{\"a\": 1,").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Bad Request");
    }

    #[tokio::test]
    async fn test_unknown_operation() {
        let (status, body) = post_json(router(), "/api/v1/modulo", &json!({"a": 1, "b": 2})).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Not Found");
    }

    #[tokio::test]
    async fn test_every_operation_reachable() {
        let cases = [
            ("add", json!({"a": 1, "b": 2}), 3.0),
            ("subtract", json!({"a": 1, "b": 2}), -1.0),
            ("multiply", json!({"a": 1.5, "b": 2}), 3.0),
            ("divide", json!({"a": 1, "b": 4}), 0.25),
            ("power", json!({"base": 2, "exponent": 3}), 8.0),
            ("sqrt", json!({"number": 0}), 0.0),
            ("sin", json!({"number": 0}), 0.0),
            ("cos", json!({"number": 0}), 1.0),
            ("tan", json!({"number": 0}), 0.0),
        ];

        for (op, payload, expected) in cases {
            let uri = format!("/api/v1/{}", op);
            let (status, body) = post_json(router(), &uri, &payload).await;
            assert_eq!(status, StatusCode::OK, "{}", op);
            assert_eq!(body["operation"], op);
            assert_eq!(body["result"], expected, "{}", op);
        }
    }

    // =============================================================================
    // SURROUNDING ENDPOINTS
    // =============================================================================

    #[tokio::test]
    async fn test_health() {
        let (status, body) = get_json(router(), "/health").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["service"], "mathematical-api");
    }

    #[tokio::test]
    async fn test_root_lists_operations() {
        let (status, body) = get_json(router(), "/").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["operations"].as_array().map(Vec::len), Some(9));
        assert_eq!(body["operations"][0]["name"], "add");
        assert_eq!(body["operations"][0]["params"], json!(["a", "b"]));
        assert_eq!(body["operations"][8]["name"], "tan");
        assert_eq!(body["operations"][8]["params"], json!(["number"]));
    }

    #[tokio::test]
    async fn test_cors_preflight_allows_any_origin() {
        let request = Request::builder()
            .method(Method::OPTIONS)
            .uri("/api/v1/add")
            .header(header::ORIGIN, "https://calc.example.com")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .body(Body::empty())
            .unwrap();

        let response = send(router(), request).await;

        assert!(response.status().is_success());
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "*"
        );
    }

    #[tokio::test]
    async fn test_cors_header_on_simple_request() {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/v1/sin")
            .header(header::ORIGIN, "https://calc.example.com")
            .body(Body::from(json!({"number": 0}).to_string()))
            .unwrap();

        let response = send(router(), request).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "*"
        );
    }

    #[tokio::test]
    async fn test_metrics_count_rest_calls() {
        let gateway = crate::integration::support::gateway();

        post_json(gateway.router(), "/api/v1/divide", &json!({"a": 1, "b": 0})).await;
        post_json(gateway.router(), "/api/v1/divide", &json!({"a": 1, "b": 2})).await;

        let (_, body) = get_json(gateway.router(), "/metrics").await;
        assert_eq!(body["operations"]["divide"]["calls"], 2);
        assert_eq!(body["operations"]["divide"]["errors"], 1);
    }
}
