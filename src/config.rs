//! Mail-relay configuration.
//!
//! The browser has no process environment, so the WASM build bakes the
//! relay identifiers in at compile time via `option_env!`. Parsing goes
//! through a key lookup so tests can feed values directly.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::error::ConfigError;

pub const DEFAULT_EMAILJS_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

pub const SERVICE_ID_VAR: &str = "CRAFTED_EMAILJS_SERVICE_ID";
pub const TEMPLATE_ID_VAR: &str = "CRAFTED_EMAILJS_TEMPLATE_ID";
pub const PUBLIC_KEY_VAR: &str = "CRAFTED_EMAILJS_PUBLIC_KEY";
pub const ENDPOINT_VAR: &str = "CRAFTED_EMAILJS_ENDPOINT";

/// Identifiers the mail relay needs to route a contact submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    pub endpoint: String,
    pub service_id: String,
    pub template_id: String,
    /// Account identifier (EmailJS public key), sent as `user_id`.
    pub account_id: String,
}

impl RelayConfig {
    /// Build relay config from values captured at compile time.
    ///
    /// Required:
    /// - `CRAFTED_EMAILJS_SERVICE_ID`
    /// - `CRAFTED_EMAILJS_TEMPLATE_ID`
    /// - `CRAFTED_EMAILJS_PUBLIC_KEY`
    ///
    /// Optional:
    /// - `CRAFTED_EMAILJS_ENDPOINT`: defaults to the EmailJS REST send URL
    ///
    /// # Errors
    ///
    /// Returns an error if a required value was absent or blank at build time.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| {
            let value = match key {
                SERVICE_ID_VAR => option_env!("CRAFTED_EMAILJS_SERVICE_ID"),
                TEMPLATE_ID_VAR => option_env!("CRAFTED_EMAILJS_TEMPLATE_ID"),
                PUBLIC_KEY_VAR => option_env!("CRAFTED_EMAILJS_PUBLIC_KEY"),
                ENDPOINT_VAR => option_env!("CRAFTED_EMAILJS_ENDPOINT"),
                _ => None,
            };
            value.map(str::to_owned)
        })
    }

    /// Build relay config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if a required key is missing or blank.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let service_id = required(&lookup, SERVICE_ID_VAR)?;
        let template_id = required(&lookup, TEMPLATE_ID_VAR)?;
        let account_id = required(&lookup, PUBLIC_KEY_VAR)?;
        let endpoint = lookup(ENDPOINT_VAR)
            .map(|v| v.trim().to_owned())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_EMAILJS_ENDPOINT.to_owned())
            .trim_end_matches('/')
            .to_owned();

        Ok(Self { endpoint, service_id, template_id, account_id })
    }
}

fn required<F>(lookup: &F, var: &str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(var).ok_or_else(|| ConfigError::Missing { var: var.to_owned() })?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::Blank { var: var.to_owned() });
    }
    Ok(trimmed.to_owned())
}
