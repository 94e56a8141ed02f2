//! # JSON-RPC Flows
//!
//! `POST /rpc` with operation names as methods. Errors come back inside a
//! 200 envelope unless the request is structurally invalid.

#[cfg(test)]
mod tests {
    use crate::integration::support::{post_json, post_raw, router};
    use axum::http::StatusCode;
    use math_api_gateway::domain::error::codes;
    use serde_json::{json, Value};

    fn call(method: &str, params: Value, id: u64) -> Value {
        json!({"jsonrpc": "2.0", "method": method, "params": params, "id": id})
    }

    async fn rpc(request: Value) -> (StatusCode, Value) {
        post_json(router(), "/rpc", &request).await
    }

    // =============================================================================
    // SCENARIOS
    // =============================================================================

    #[tokio::test]
    async fn test_add_ten_and_five() {
        let (status, body) = rpc(call("add", json!({"a": 10, "b": 5}), 1)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["jsonrpc"], "2.0");
        assert_eq!(body["id"], 1);
        assert_eq!(
            body["result"],
            json!({"operation": "add", "a": 10.0, "b": 5.0, "result": 15.0})
        );
    }

    #[tokio::test]
    async fn test_divide_by_zero() {
        let (status, body) = rpc(call("divide", json!({"a": 10, "b": 0}), 2)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["error"]["code"], codes::DIVISION_BY_ZERO);
        assert_eq!(body["error"]["data"]["error"], "Division By Zero");
        assert!(body.get("result").is_none());
    }

    #[tokio::test]
    async fn test_power_two_to_eight() {
        let (_, body) = rpc(call("power", json!({"base": 2, "exponent": 8}), 3)).await;

        assert_eq!(body["result"]["result"], 256.0);
    }

    #[tokio::test]
    async fn test_sqrt_of_negative() {
        let (_, body) = rpc(call("sqrt", json!({"number": -16}), 4)).await;

        assert_eq!(body["error"]["code"], codes::NEGATIVE_SQUARE_ROOT);
        assert_eq!(body["error"]["data"]["error"], "Negative Square Root");
    }

    #[tokio::test]
    async fn test_sqrt_of_sixteen() {
        let (_, body) = rpc(call("sqrt", json!([16]), 5)).await;

        assert_eq!(
            body["result"],
            json!({"operation": "sqrt", "input": 16.0, "result": 4.0})
        );
    }

    #[tokio::test]
    async fn test_scenarios_as_batch() {
        let batch = json!([
            call("add", json!({"a": 10, "b": 5}), 1),
            call("divide", json!({"a": 10, "b": 0}), 2),
            call("power", json!([2, 8]), 3),
            call("sqrt", json!({"number": -16}), 4),
            call("sqrt", json!({"number": 16}), 5),
        ]);

        let (status, body) = rpc(batch).await;
        assert_eq!(status, StatusCode::OK);

        let responses = body.as_array().expect("batch answers with an array");
        assert_eq!(responses.len(), 5);

        let ids: Vec<_> = responses.iter().map(|r| r["id"].clone()).collect();
        assert_eq!(ids, vec![json!(1), json!(2), json!(3), json!(4), json!(5)]);

        assert_eq!(responses[0]["result"]["result"], 15.0);
        assert_eq!(responses[1]["error"]["code"], codes::DIVISION_BY_ZERO);
        assert_eq!(responses[2]["result"]["result"], 256.0);
        assert_eq!(responses[3]["error"]["code"], codes::NEGATIVE_SQUARE_ROOT);
        assert_eq!(responses[4]["result"]["result"], 4.0);
    }

    // =============================================================================
    // PROTOCOL ERRORS
    // =============================================================================

    #[tokio::test]
    async fn test_unknown_method() {
        let (status, body) = rpc(call("modulo", json!([1, 2]), 9)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["error"]["code"], codes::METHOD_NOT_FOUND);
        assert_eq!(body["id"], 9);
    }

    #[tokio::test]
    async fn test_missing_operand_is_invalid_params() {
        let (_, body) = rpc(call("subtract", json!({"a": 1}), 10)).await;

        assert_eq!(body["error"]["code"], codes::INVALID_PARAMS);
        assert_eq!(body["error"]["data"]["error"], "Bad Request");
    }

    #[tokio::test]
    async fn test_extra_params_ignored() {
        let (_, body) = rpc(call("cos", json!({"number": 0, "unit": "rad"}), 11)).await;

        assert_eq!(body["result"]["result"], 1.0);
    }

    #[tokio::test]
    async fn test_overflow_is_internal_error() {
        let (status, body) = rpc(call("add", json!([1e308, 1e308]), 12)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["id"], 12);
        assert_eq!(body["error"]["code"], codes::INTERNAL_ERROR);
        assert_eq!(body["error"]["data"]["error"], "Internal Server Error");
        assert!(body.get("result").is_none());
    }

    #[tokio::test]
    async fn test_lax_operands() {
        let (_, body) = rpc(call("power", json!({"base": "2", "exponent": true}), 13)).await;
        assert_eq!(body["result"]["result"], 2.0);

        let (_, body) = rpc(call("tan", json!(["inf"]), 14)).await;
        assert_eq!(body["error"]["code"], codes::INVALID_OPERATION);
    }

    #[tokio::test]
    async fn test_wrong_version_rejected() {
        let (status, body) = rpc(json!({"jsonrpc": "1.0", "method": "add", "params": [1, 2], "id": 1})).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], codes::INVALID_REQUEST);
    }

    #[tokio::test]
    async fn test_unparsable_body() {
        let (status, body) = post_raw(router(), "/rpc", "{not json").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], codes::PARSE_ERROR);
    }
}
