//! BDRC contact - a serverless endpoint that relays website contact-form
//! submissions to the site owner by email.
//!
//! The crate builds a single Lambda (`contact-api`) behind an API Gateway or
//! Function URL proxy integration. Each invocation validates one submission
//! and, when it is accepted, sends exactly one email through Resend.
//!
//! # Architecture
//!
//! The system uses:
//! - AWS Lambda for serverless execution
//! - Resend's HTTP API for email delivery
//! - A hidden honeypot form field to silently drop bot submissions
//! - Tokio for async runtime
//!
//! # Example
//!
//! ```no_run
//! use bdrc_contact::api::handle_contact;
//! use bdrc_contact::core::config::AppConfig;
//! use bdrc_contact::email::ResendClient;
//!
//! #[tokio::main]
//! async fn main() {
//!     bdrc_contact::setup_logging();
//!
//!     let config = AppConfig::from_env();
//!     let event = serde_json::json!({
//!         "requestContext": { "http": { "method": "POST" } },
//!         "body": r#"{"name":"Ann","email":"ann@example.com","message":"Hello"}"#
//!     });
//!
//!     let response = handle_contact(&config, &event, |settings| {
//!         ResendClient::new(&settings.api_key, &config.resend_api_url)
//!     })
//!     .await;
//!     println!("{response}");
//! }
//! ```

// Module declarations
pub mod api;
pub mod core;
pub mod email;
pub mod errors;

pub use errors::ContactError;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// This function sets up tracing-subscriber with a JSON formatter suitable for
/// `CloudWatch` Logs integration. Calling it more than once is harmless; only
/// the first call installs the subscriber.
///
/// # Example
///
/// ```
/// // Initialize structured logging at the start of your Lambda handler
/// bdrc_contact::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry().with(fmt_layer).try_init();
}
