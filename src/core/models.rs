use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A contact-form submission as parsed from the request body.
///
/// Every field is optional at this stage; absent, `null`, `false`, `0` and
/// empty-string values are all normalized to `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
    /// Honeypot field; hidden from humans, so any value means a bot filled it in.
    pub website: Option<String>,
}

impl ContactSubmission {
    /// Reads the known fields out of a JSON body. Anything that is not a JSON
    /// object yields an empty submission.
    #[must_use]
    pub fn from_value(body: &Value) -> Self {
        let Some(obj) = body.as_object() else {
            return Self::default();
        };
        let field = |key: &str| obj.get(key).and_then(coerce_text);

        Self {
            name: field("name"),
            email: field("email"),
            message: field("message"),
            website: field("website"),
        }
    }

    #[must_use]
    pub fn is_honeypot_filled(&self) -> bool {
        self.website.is_some()
    }
}

fn coerce_text(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::Bool(true) => Some("true".to_string()),
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::Number(n) => Some(n.to_string()),
        Value::Array(_) | Value::Object(_) => Some(value.to_string()),
    }
}

/// The email relayed to the site owner for one accepted submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutboundEmail {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub reply_to: String,
    pub html: String,
}
