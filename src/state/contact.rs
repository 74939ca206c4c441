//! Contact form controller: field state and the submission lifecycle.
//!
//! DESIGN
//! ======
//! `idle -> submitting -> {success, error} -> idle`. The relay call itself
//! happens outside the store: [`ContactState::begin_submit`] hands out the
//! request to send and [`ContactState::finish_submit`] folds the outcome
//! back in. Terminal statuses arm a [`DeferredSlot`]; every later status
//! change replaces or cancels it, so an old revert timer can never clobber
//! newer state.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use std::time::Duration;

use crate::error::{MissingFields, SubmissionError, SubmitBlocked, ValidationError};
use crate::net::mail_relay::ContactRequest;
use crate::util::deferred::{DeferredSlot, DeferredToken};

/// How long a success or error message stays up.
pub const REVERT_DELAY: Duration = Duration::from_millis(5000);

pub const MSG_FILL_ALL_FIELDS: &str = "Please fill in all fields";
pub const MSG_SENT: &str = "Message sent successfully!";
pub const MSG_SEND_FAILED: &str = "Failed to send message. Please try again.";

/// The three required inputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Email,
    Message,
}

impl FormField {
    pub const ALL: [FormField; 3] = [Self::Name, Self::Email, Self::Message];

    /// `name` attribute of the input, matching the relay template parameter.
    #[must_use]
    pub fn input_name(self) -> &'static str {
        match self {
            Self::Name => "from_name",
            Self::Email => "reply_to",
            Self::Message => "message",
        }
    }
}

/// Current field values as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormData {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl FormData {
    #[must_use]
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Message => &self.message,
        }
    }

    fn slot_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Message => &mut self.message,
        }
    }

    /// Fields that are empty or whitespace only.
    #[must_use]
    pub fn missing(&self) -> MissingFields {
        MissingFields {
            name: self.name.trim().is_empty(),
            email: self.email.trim().is_empty(),
            message: self.message.trim().is_empty(),
        }
    }
}

/// Submission lifecycle phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

impl FormStatus {
    /// Statuses that auto-revert to idle.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Success | Self::Error)
    }
}

/// Form store provided to components as `RwSignal<ContactState>`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactState {
    data: FormData,
    status: FormStatus,
    message: String,
    revert: DeferredSlot,
}

impl ContactState {
    #[must_use]
    pub fn data(&self) -> &FormData {
        &self.data
    }

    #[must_use]
    pub fn status(&self) -> FormStatus {
        self.status
    }

    /// User-facing status message; `None` when nothing should show.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        (!self.message.is_empty()).then_some(self.message.as_str())
    }

    /// Submit affordance is disabled while a send is in flight.
    #[must_use]
    pub fn is_submit_disabled(&self) -> bool {
        self.status == FormStatus::Submitting
    }

    #[must_use]
    pub fn submit_label(&self) -> &'static str {
        if self.is_submit_disabled() { "Sending..." } else { "Send Message" }
    }

    /// Replace one field, leaving the others as they were.
    pub fn update_field(&mut self, field: FormField, value: impl Into<String>) {
        *self.data.slot_mut(field) = value.into();
    }

    /// Check that every field has content and build the relay request.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingFields`] if any field is blank.
    pub fn validate(&self) -> Result<ContactRequest, ValidationError> {
        let missing = self.data.missing();
        if missing.any() {
            return Err(ValidationError::MissingFields(missing));
        }
        Ok(ContactRequest {
            from_name: self.data.name.clone(),
            reply_to: self.data.email.clone(),
            message: self.data.message.clone(),
        })
    }

    /// Handle a submit click.
    ///
    /// On success the store is `submitting` and the caller must deliver the
    /// returned request, then report back through [`Self::finish_submit`].
    ///
    /// # Errors
    ///
    /// - [`SubmitBlocked::InFlight`] while an earlier send is unresolved; state is untouched.
    /// - [`SubmitBlocked::Invalid`] if a field is blank; status becomes `error`.
    pub fn begin_submit(&mut self) -> Result<ContactRequest, SubmitBlocked> {
        if self.status == FormStatus::Submitting {
            return Err(SubmitBlocked::InFlight);
        }
        match self.validate() {
            Ok(request) => {
                self.set_status(FormStatus::Submitting, "");
                Ok(request)
            }
            Err(e) => {
                log::debug!("contact form rejected: {e}");
                self.set_status(FormStatus::Error, MSG_FILL_ALL_FIELDS);
                Err(e.into())
            }
        }
    }

    /// Fold the relay outcome back into the store.
    ///
    /// Success clears every field; failure keeps them so the visitor can retry.
    pub fn finish_submit(&mut self, outcome: Result<(), SubmissionError>) {
        if self.status != FormStatus::Submitting {
            log::warn!("relay outcome arrived with no submission in flight");
            return;
        }
        match outcome {
            Ok(()) => {
                log::info!("contact message delivered");
                self.data = FormData::default();
                self.set_status(FormStatus::Success, MSG_SENT);
            }
            Err(e) => {
                log::error!("contact message failed: {e}");
                self.set_status(FormStatus::Error, MSG_SEND_FAILED);
            }
        }
    }

    /// Token of the auto-revert waiting to fire, if any.
    #[must_use]
    pub fn pending_revert(&self) -> Option<DeferredToken> {
        self.revert.pending()
    }

    /// Revert to idle if `token` is still the current auto-revert.
    pub fn expire_revert(&mut self, token: DeferredToken) -> bool {
        if !self.revert.fire(token) {
            return false;
        }
        self.status = FormStatus::Idle;
        self.message.clear();
        true
    }

    fn set_status(&mut self, status: FormStatus, message: &str) {
        self.status = status;
        message.clone_into(&mut self.message);
        if status.is_terminal() {
            self.revert.arm();
        } else {
            self.revert.cancel();
        }
    }
}
