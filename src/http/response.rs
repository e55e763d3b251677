//! HTTP response building module
//!
//! Builders for the JSON responses this service emits, decoupled from
//! specific business logic. Serialization goes through serde so string
//! values containing quotes or backslashes always produce valid JSON.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use serde::Serialize;

/// Build JSON response
pub fn json_response<T: Serialize>(
    status: StatusCode,
    body: &T,
    server_name: &str,
) -> Response<Full<Bytes>> {
    let json = match serde_json::to_string(body) {
        Ok(j) => j,
        Err(e) => {
            crate::logger::log_error(&format!("Failed to serialize response: {e}"));
            return error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error",
                server_name,
            );
        }
    };

    Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .header("Server", server_name)
        .body(Full::new(Bytes::from(json)))
        .unwrap_or_else(|e| {
            log_build_error(status.as_u16(), &e);
            Response::new(Full::new(Bytes::from("Error")))
        })
}

/// Build JSON error response with an `error` field
pub fn error_response(status: StatusCode, message: &str, server_name: &str) -> Response<Full<Bytes>> {
    let body = serde_json::json!({ "error": message });
    Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .header("Server", server_name)
        .body(Full::new(Bytes::from(body.to_string())))
        .unwrap_or_else(|e| {
            log_build_error(status.as_u16(), &e);
            Response::new(Full::new(Bytes::from("Error")))
        })
}

/// Build 404 Not Found response
pub fn build_404_response(server_name: &str) -> Response<Full<Bytes>> {
    error_response(StatusCode::NOT_FOUND, "Not Found", server_name)
}

/// Build 405 Method Not Allowed response
pub fn build_405_response(allow: &str, server_name: &str) -> Response<Full<Bytes>> {
    let body = serde_json::json!({ "error": "Method Not Allowed" });
    Response::builder()
        .status(StatusCode::METHOD_NOT_ALLOWED)
        .header("Content-Type", "application/json")
        .header("Allow", allow)
        .header("Server", server_name)
        .body(Full::new(Bytes::from(body.to_string())))
        .unwrap_or_else(|e| {
            log_build_error(405, &e);
            Response::new(Full::new(Bytes::from("Method Not Allowed")))
        })
}

/// Log response build error
fn log_build_error(status: u16, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}
