//! Response builders for proxy integration results.
//!
//! Every response carries the CORS headers, including errors and the
//! preflight answer.

use serde_json::{Map, Value, json};

pub const ALLOW_METHODS: &str = "POST, OPTIONS";
pub const ALLOW_HEADERS: &str = "Content-Type, Authorization";

fn cors_headers(allow_origin: &str) -> Map<String, Value> {
    let mut headers = Map::new();
    headers.insert("Access-Control-Allow-Origin".into(), json!(allow_origin));
    headers.insert("Access-Control-Allow-Methods".into(), json!(ALLOW_METHODS));
    headers.insert("Access-Control-Allow-Headers".into(), json!(ALLOW_HEADERS));
    headers
}

fn json_response(allow_origin: &str, status_code: u16, body: &Value) -> Value {
    let mut headers = cors_headers(allow_origin);
    headers.insert("Content-Type".into(), json!("application/json"));
    json!({
        "statusCode": status_code,
        "headers": headers,
        "body": body.to_string()
    })
}

/// Returns a 204 response with an empty body for a CORS preflight.
#[must_use]
pub fn preflight(allow_origin: &str) -> Value {
    json!({
        "statusCode": 204,
        "headers": cors_headers(allow_origin),
        "body": ""
    })
}

/// Returns a 200 OK response with `{"ok":true}`.
#[must_use]
pub fn ok(allow_origin: &str) -> Value {
    json_response(allow_origin, 200, &json!({ "ok": true }))
}

/// Returns an error response with the given status code and message.
#[must_use]
pub fn err_response(allow_origin: &str, status_code: u16, message: &str) -> Value {
    json_response(allow_origin, status_code, &json!({ "error": message }))
}
