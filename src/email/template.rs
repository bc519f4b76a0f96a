//! HTML body and subject for relayed contact messages.

use crate::core::config::MailSettings;
use crate::core::models::OutboundEmail;

pub const SUBJECT_PREFIX: &str = "BDRC Contact — ";

/// Escapes the five HTML-significant characters in one pass, so entities
/// produced for one character are never escaped again.
#[must_use]
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            other => out.push(other),
        }
    }
    out
}

/// Escapes a multi-line message and turns its line breaks into `<br/>`.
#[must_use]
pub fn message_to_html(message: &str) -> String {
    escape_html(message)
        .replace("\r\n", "\n")
        .replace('\n', "<br/>")
}

#[must_use]
pub fn build_subject(name: &str) -> String {
    format!("{SUBJECT_PREFIX}{name}")
}

#[must_use]
pub fn build_html_body(name: &str, email: &str, message: &str) -> String {
    format!(
        r#"
      <div style="font-family:system-ui,Arial">
        <h2>New Contact Message</h2>
        <p><b>Name:</b> {}</p>
        <p><b>Email:</b> {}</p>
        <p><b>Message:</b><br/>{}</p>
        <hr/>
        <small>BDRC website form</small>
      </div>"#,
        escape_html(name),
        escape_html(email),
        message_to_html(message)
    )
}

/// Builds the email for a validated submission. Subject and reply-to carry
/// the raw values; only the HTML body is escaped.
#[must_use]
pub fn build_email(settings: &MailSettings, name: &str, email: &str, message: &str) -> OutboundEmail {
    OutboundEmail {
        from: settings.from_address.clone(),
        to: settings.to_address.clone(),
        subject: build_subject(name),
        reply_to: email.to_string(),
        html: build_html_body(name, email, message),
    }
}
