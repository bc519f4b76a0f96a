use std::env;

use crate::errors::ContactError;

/// Origin sent in `Access-Control-Allow-Origin` when `ALLOW_ORIGIN` is unset.
/// Deployments serving a single site should override it with that site's origin.
pub const DEFAULT_ALLOW_ORIGIN: &str = "*";

pub const DEFAULT_RESEND_API_URL: &str = "https://api.resend.com";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub resend_api_key: Option<String>,
    pub to_email: Option<String>,
    pub from_email: Option<String>,
    pub allow_origin: String,
    pub resend_api_url: String,
}

/// The three values required before any email can be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailSettings {
    pub api_key: String,
    pub to_address: String,
    pub from_address: String,
}

impl AppConfig {
    /// Reads the handler configuration from the process environment.
    ///
    /// Missing values are kept as `None`; whether they are fatal is decided
    /// later by [`AppConfig::mail_settings`].
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup. Empty values
    /// count as absent.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            resend_api_key: get("RESEND_API_KEY"),
            to_email: get("TO_EMAIL"),
            from_email: get("FROM_EMAIL"),
            allow_origin: get("ALLOW_ORIGIN").unwrap_or_else(|| DEFAULT_ALLOW_ORIGIN.to_string()),
            resend_api_url: get("RESEND_API_URL")
                .unwrap_or_else(|| DEFAULT_RESEND_API_URL.to_string()),
        }
    }

    /// # Errors
    ///
    /// Returns `ContactError::NotConfigured` listing every missing key when
    /// the API key, recipient, or sender address is absent.
    pub fn mail_settings(&self) -> Result<MailSettings, ContactError> {
        match (&self.resend_api_key, &self.to_email, &self.from_email) {
            (Some(api_key), Some(to), Some(from)) => Ok(MailSettings {
                api_key: api_key.clone(),
                to_address: to.clone(),
                from_address: from.clone(),
            }),
            _ => {
                let missing: Vec<&str> = [
                    ("RESEND_API_KEY", self.resend_api_key.is_none()),
                    ("TO_EMAIL", self.to_email.is_none()),
                    ("FROM_EMAIL", self.from_email.is_none()),
                ]
                .into_iter()
                .filter_map(|(key, absent)| absent.then_some(key))
                .collect();
                Err(ContactError::NotConfigured(missing.join(", ")))
            }
        }
    }
}
