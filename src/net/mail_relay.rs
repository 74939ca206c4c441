//! Mail-relay boundary for contact submissions.
//!
//! Browser (`csr`): `EmailJsRelay` posts to the EmailJS REST API via
//! `gloo-net`. Elsewhere it fails every send, since the relay is only
//! reachable from the page.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures and non-2xx responses both surface as
//! [`SubmissionError`]; callers never see a panic or a silent success.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "mail_relay_test.rs"]
mod mail_relay_test;

use std::sync::Arc;

use serde::Serialize;

use crate::config::RelayConfig;
use crate::error::{ConfigError, SubmissionError};

/// Field values for one submission, keyed by relay template parameter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ContactRequest {
    pub from_name: String,
    pub reply_to: String,
    pub message: String,
}

/// External collaborator that delivers a contact submission as email.
#[async_trait::async_trait(?Send)]
pub trait MailRelay {
    /// Deliver `request`.
    ///
    /// # Errors
    ///
    /// Returns an error if the relay could not be reached or refused the message.
    async fn send(&self, request: &ContactRequest) -> Result<(), SubmissionError>;
}

/// Shareable relay handle provided through Leptos context.
#[derive(Clone)]
pub struct RelayHandle(Arc<dyn MailRelay + Send + Sync>);

impl RelayHandle {
    pub fn new<R>(relay: R) -> Self
    where
        R: MailRelay + Send + Sync + 'static,
    {
        Self(Arc::new(relay))
    }

    /// EmailJS when configured, otherwise a relay that refuses every send.
    pub fn from_config(config: Result<RelayConfig, ConfigError>) -> Self {
        match config {
            Ok(config) => {
                log::info!("mail relay configured for service {}", config.service_id);
                Self::new(EmailJsRelay::new(config))
            }
            Err(e) => {
                log::warn!("mail relay not configured, contact form disabled: {e}");
                Self::new(UnconfiguredRelay)
            }
        }
    }

    /// Deliver `request` through the wrapped relay.
    ///
    /// # Errors
    ///
    /// Propagates the wrapped relay's error.
    pub async fn send(&self, request: &ContactRequest) -> Result<(), SubmissionError> {
        self.0.send(request).await
    }
}

impl std::fmt::Debug for RelayHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RelayHandle").finish_non_exhaustive()
    }
}

/// Relay used when configuration is missing.
#[derive(Clone, Copy, Debug, Default)]
pub struct UnconfiguredRelay;

#[async_trait::async_trait(?Send)]
impl MailRelay for UnconfiguredRelay {
    async fn send(&self, _request: &ContactRequest) -> Result<(), SubmissionError> {
        Err(SubmissionError::NotConfigured)
    }
}

/// JSON body accepted by the EmailJS `email/send` endpoint.
#[derive(Debug, Serialize)]
struct EmailJsPayload<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a ContactRequest,
}

/// EmailJS REST client.
#[derive(Clone, Debug)]
pub struct EmailJsRelay {
    config: RelayConfig,
}

impl EmailJsRelay {
    #[must_use]
    pub fn new(config: RelayConfig) -> Self {
        Self { config }
    }

    fn payload<'a>(&'a self, request: &'a ContactRequest) -> EmailJsPayload<'a> {
        EmailJsPayload {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: &self.config.account_id,
            template_params: request,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl MailRelay for EmailJsRelay {
    async fn send(&self, request: &ContactRequest) -> Result<(), SubmissionError> {
        #[cfg(feature = "csr")]
        {
            let payload = self.payload(request);
            let resp = gloo_net::http::Request::post(&self.config.endpoint)
                .json(&payload)
                .map_err(|e| SubmissionError::Transport(e.to_string()))?
                .send()
                .await
                .map_err(|e| SubmissionError::Transport(e.to_string()))?;
            let status = resp.status();
            if !(200..300).contains(&status) {
                let body = resp.text().await.unwrap_or_default();
                return Err(SubmissionError::Rejected { status, body });
            }
            Ok(())
        }
        #[cfg(not(feature = "csr"))]
        {
            let payload = self.payload(request);
            log::debug!("relay service {} unreachable outside the browser", payload.service_id);
            Err(SubmissionError::Transport("not available outside the browser".to_owned()))
        }
    }
}
