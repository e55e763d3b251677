//! Sample echo handler
//!
//! Reads the `requestQuery` query parameter and echoes its decoded value
//! back as `{"receivedQuery": "<value>"}`. The parameter is required: a
//! missing or undecodable query string is a client error, answered with 400
//! rather than crashing the request task.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use serde::Serialize;

use crate::http;
use crate::logger;

/// The one query parameter this handler reads
pub const QUERY_PARAM: &str = "requestQuery";

/// Response body of the sample route
#[derive(Debug, Serialize)]
pub struct EchoResponse {
    #[serde(rename = "receivedQuery")]
    pub received_query: String,
}

/// Handle `GET /api/sample`
///
/// `query` is the raw (still percent-encoded) query string of the request
/// URI, if any.
pub fn handle(query: Option<&str>, server_name: &str) -> Response<Full<Bytes>> {
    match http::query::lookup(query.unwrap_or(""), QUERY_PARAM) {
        Ok(value) => http::json_response(
            StatusCode::OK,
            &EchoResponse {
                received_query: value,
            },
            server_name,
        ),
        Err(e) => {
            logger::log_warning(&format!("Rejecting request: {e}"));
            http::error_response(StatusCode::BAD_REQUEST, &e.to_string(), server_name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_json(resp: Response<Full<Bytes>>) -> serde_json::Value {
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_echoes_decoded_value() {
        let resp = handle(Some("requestQuery=hello"), "test");
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers()["Content-Type"], "application/json");
        assert_eq!(body_json(resp).await["receivedQuery"], "hello");
    }

    #[tokio::test]
    async fn test_percent_encoded_plus_round_trips() {
        let resp = handle(Some("requestQuery=2022-11-20T00:00:00%2B09:00"), "test");
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            body_json(resp).await["receivedQuery"],
            "2022-11-20T00:00:00+09:00"
        );
    }

    #[tokio::test]
    async fn test_missing_parameter_is_bad_request() {
        let resp = handle(None, "test");
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body = body_json(resp).await;
        assert!(body["error"].as_str().unwrap().contains(QUERY_PARAM));
    }

    #[tokio::test]
    async fn test_malformed_encoding_is_bad_request() {
        let resp = handle(Some("requestQuery=%2"), "test");
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
