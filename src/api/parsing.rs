use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::core::models::ContactSubmission;

/// Returns the upper-cased HTTP method of a proxy event.
///
/// HTTP API (v2) and Function URL events carry it under
/// `requestContext.http.method`; REST API (v1) events use `httpMethod`.
pub fn request_method(payload: &Value) -> Option<String> {
    payload
        .get("requestContext")
        .and_then(|ctx| ctx.get("http"))
        .and_then(|http| http.get("method"))
        .and_then(Value::as_str)
        .or_else(|| payload.get("httpMethod").and_then(Value::as_str))
        .map(str::to_ascii_uppercase)
}

pub fn get_header_value<'a>(headers: &'a Value, name: &str) -> Option<&'a str> {
    if let Some(v) = headers.get(name).and_then(|s| s.as_str()) {
        return Some(v);
    }
    headers.as_object().and_then(|map| {
        map.iter().find_map(|(k, v)| {
            if k.eq_ignore_ascii_case(name) {
                v.as_str()
            } else {
                None
            }
        })
    })
}

/// Returns the request body as JSON.
///
/// A body that is already a JSON object is used directly. A string body is
/// base64-decoded when `isBase64Encoded` is set, decoded as UTF-8 and parsed,
/// with an empty body standing in for `{}`. Every failure yields an empty
/// object, which later fails the required-field check.
pub fn read_body_json(payload: &Value) -> Value {
    let empty = || Value::Object(Map::new());

    let raw = match payload.get("body") {
        Some(body @ Value::Object(_)) => return body.clone(),
        Some(Value::String(s)) => s.as_str(),
        None | Some(Value::Null) => "",
        Some(other) => {
            warn!("Unexpected body type in event: {}", json_type(other));
            return empty();
        }
    };

    let is_base64 = payload
        .get("isBase64Encoded")
        .and_then(Value::as_bool)
        .unwrap_or(false);

    let text = if is_base64 {
        match STANDARD.decode(raw.trim()) {
            Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
            Err(e) => {
                warn!("Failed to decode base64 body: {}", e);
                return empty();
            }
        }
    } else {
        raw.to_string()
    };

    let text = if text.is_empty() { "{}" } else { text.as_str() };

    match serde_json::from_str::<Value>(text) {
        Ok(v) => v,
        Err(e) => {
            debug!("Request body is not valid JSON: {}", e);
            empty()
        }
    }
}

pub fn read_submission(payload: &Value) -> ContactSubmission {
    ContactSubmission::from_value(&read_body_json(payload))
}

fn json_type(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
