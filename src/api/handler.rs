//! Contact-form Lambda handler.
//!
//! Evaluation order per request:
//! - CORS preflight (`OPTIONS`) answered with 204
//! - anything other than `POST` rejected with 405
//! - body parsed, honeypot checked, fields validated
//! - configuration checked, then exactly one email sent

use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{error, info, warn};

use super::validation::{Verdict, validate};
use super::{helpers, parsing};
use crate::core::config::{AppConfig, MailSettings};
use crate::email::template::build_email;
use crate::email::{EmailSender, ResendClient, SendOutcome};
use crate::errors::ContactError;

pub use self::function_handler as handler;

/// Lambda handler for the contact endpoint.
///
/// # Errors
///
/// Never returns an error; every failure is mapped to an HTTP response so the
/// caller always receives the CORS headers.
#[tracing::instrument(level = "info", skip(event), fields(request_id = %event.context.request_id))]
pub async fn function_handler(event: LambdaEvent<Value>) -> Result<Value, Error> {
    let config = AppConfig::from_env();

    #[cfg(feature = "debug-logs")]
    info!("Contact Lambda received event: {:?}", event.payload);

    let response = handle_contact(&config, &event.payload, |settings| {
        ResendClient::new(&settings.api_key, &config.resend_api_url)
    })
    .await;

    Ok(response)
}

/// Runs one contact request against `payload` and returns the proxy response.
///
/// `connect` builds the email sender once the configuration is known to be
/// complete; it is never called for requests that are rejected earlier.
pub async fn handle_contact<F, S>(config: &AppConfig, payload: &Value, connect: F) -> Value
where
    F: FnOnce(&MailSettings) -> Result<S, ContactError>,
    S: EmailSender,
{
    let origin = config.allow_origin.as_str();
    let method = parsing::request_method(payload);

    match method.as_deref() {
        Some("OPTIONS") => return helpers::preflight(origin),
        Some("POST") => {}
        other => {
            warn!(method = ?other, "Rejected request method");
            return helpers::err_response(origin, 405, "Method not allowed");
        }
    }

    if let Some(caller) = payload
        .get("headers")
        .and_then(|h| parsing::get_header_value(h, "Origin"))
    {
        info!(caller_origin = %caller, "Contact submission received");
    }

    let submission = parsing::read_submission(payload);

    let valid = match validate(&submission) {
        Verdict::Bot => {
            info!("Honeypot field filled, dropping submission");
            return helpers::ok(origin);
        }
        Verdict::MissingFields => {
            warn!("Submission missing required fields");
            return helpers::err_response(origin, 400, "Missing fields");
        }
        Verdict::InvalidEmail => {
            warn!("Submission has malformed email address");
            return helpers::err_response(origin, 400, "Invalid email");
        }
        Verdict::Accepted(valid) => valid,
    };

    let settings = match config.mail_settings() {
        Ok(s) => s,
        Err(e) => {
            error!("Config error: {}", e);
            return helpers::err_response(origin, 500, "Server not configured");
        }
    };

    let email = build_email(&settings, valid.name, valid.email, valid.message);

    let sent = match connect(&settings) {
        Ok(sender) => sender.send(&email).await,
        Err(e) => Err(e),
    };

    match sent {
        Ok(SendOutcome::Delivered { id }) => {
            info!(message_id = ?id, "Contact email relayed");
            helpers::ok(origin)
        }
        Ok(SendOutcome::Rejected(description)) => {
            error!("Email provider rejected message: {}", description);
            helpers::err_response(origin, 502, &description)
        }
        Err(e) => {
            error!("Failed to relay contact email: {}", e);
            helpers::err_response(origin, 500, "Server error")
        }
    }
}
