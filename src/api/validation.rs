//! Submission checks, applied in order: honeypot, required fields, email shape.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::models::ContactSubmission;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("static regex compile"));

/// A submission with every required field present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidSubmission<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub message: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict<'a> {
    /// Honeypot filled in; answer with success and send nothing.
    Bot,
    MissingFields,
    InvalidEmail,
    Accepted(ValidSubmission<'a>),
}

#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

#[must_use]
pub fn validate(submission: &ContactSubmission) -> Verdict<'_> {
    if submission.is_honeypot_filled() {
        return Verdict::Bot;
    }

    let (Some(name), Some(email), Some(message)) = (
        submission.name.as_deref(),
        submission.email.as_deref(),
        submission.message.as_deref(),
    ) else {
        return Verdict::MissingFields;
    };

    if !is_valid_email(email) {
        return Verdict::InvalidEmail;
    }

    Verdict::Accepted(ValidSubmission {
        name,
        email,
        message,
    })
}
