//! Resend transactional email client
//!
//! Sends a single message per call through `POST /emails`. There is no retry;
//! a failed send is reported once and surfaced to the caller.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{info, warn};
use url::Url;

use super::{EmailSender, SendOutcome};
use crate::core::models::OutboundEmail;
use crate::errors::ContactError;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Serialize)]
struct ResendPayload<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    reply_to: &'a str,
    html: &'a str,
}

#[derive(Debug, Deserialize)]
struct ResendSuccessResponse {
    #[serde(default)]
    id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ResendErrorResponse {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// Resend API client
pub struct ResendClient {
    http: Client,
    api_key: String,
    endpoint: Url,
}

impl ResendClient {
    /// # Errors
    ///
    /// Returns an error if `base_url` is not a valid URL or the HTTP client
    /// cannot be built.
    pub fn new(api_key: &str, base_url: &str) -> Result<Self, ContactError> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ContactError::HttpError(format!("Failed to build HTTP client: {e}")))?;

        // Without a trailing slash `join` would replace the last path segment.
        let mut base = base_url.trim_end_matches('/').to_string();
        base.push('/');
        let endpoint = Url::parse(&base)?.join("emails")?;

        Ok(Self {
            http,
            api_key: api_key.to_string(),
            endpoint,
        })
    }

    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

/// Turns a Resend error body into the text returned to the caller.
fn describe_error(status: reqwest::StatusCode, body: &str) -> String {
    match serde_json::from_str::<ResendErrorResponse>(body) {
        Ok(ResendErrorResponse {
            name: Some(name),
            message: Some(message),
        }) => format!("{name}: {message}"),
        Ok(ResendErrorResponse {
            message: Some(message),
            ..
        }) => message,
        Ok(ResendErrorResponse { name: Some(name), .. }) => name,
        _ if body.trim().is_empty() => format!("HTTP {}", status.as_u16()),
        _ => format!("HTTP {}: {}", status.as_u16(), body.trim()),
    }
}

#[async_trait]
impl EmailSender for ResendClient {
    async fn send(&self, email: &OutboundEmail) -> Result<SendOutcome, ContactError> {
        let payload = ResendPayload {
            from: &email.from,
            to: &email.to,
            subject: &email.subject,
            reply_to: &email.reply_to,
            html: &email.html,
        };

        let response = self
            .http
            .post(self.endpoint.clone())
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| ContactError::HttpError(format!("Resend request failed: {e}")))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            ContactError::HttpError(format!(
                "Failed to read Resend response body (status {status}): {e}"
            ))
        })?;

        if !status.is_success() {
            let description = describe_error(status, &body);
            warn!(status = %status, "Resend rejected message: {}", description);
            return Ok(SendOutcome::Rejected(description));
        }

        // The message is accepted at this point even if the body is unexpected.
        let id = serde_json::from_str::<ResendSuccessResponse>(&body)
            .ok()
            .and_then(|r| r.id);
        info!(message_id = ?id, "Email accepted by Resend");
        Ok(SendOutcome::Delivered { id })
    }
}
