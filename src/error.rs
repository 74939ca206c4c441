//! Error types for form validation, mail-relay delivery, and configuration.
//!
//! ERROR HANDLING
//! ==============
//! `Display` strings are for logs. The copy shown to visitors lives on the
//! contact store, so relay internals never leak into the page.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// A required contact-form field was left blank.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("required fields missing: {0}")]
    MissingFields(MissingFields),
}

/// Which of the three required fields were blank.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MissingFields {
    pub name: bool,
    pub email: bool,
    pub message: bool,
}

impl MissingFields {
    #[must_use]
    pub fn any(self) -> bool {
        self.name || self.email || self.message
    }
}

impl std::fmt::Display for MissingFields {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names = [(self.name, "name"), (self.email, "email"), (self.message, "message")]
            .into_iter()
            .filter_map(|(missing, label)| missing.then_some(label))
            .collect::<Vec<_>>();
        f.write_str(&names.join(", "))
    }
}

/// The mail relay did not accept the message.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SubmissionError {
    #[error("mail relay not configured")]
    NotConfigured,
    #[error("mail relay request failed: {0}")]
    Transport(String),
    #[error("mail relay rejected message: {status} {body}")]
    Rejected { status: u16, body: String },
}

/// A relay setting is absent or blank.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("missing config value: {var}")]
    Missing { var: String },
    #[error("blank config value: {var}")]
    Blank { var: String },
}

/// Why a submit click did not dispatch a relay call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SubmitBlocked {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("submission already in flight")]
    InFlight,
}
