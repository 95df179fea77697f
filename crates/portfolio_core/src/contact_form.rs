//! Contact form state machine: `Idle -> Submitting -> Idle`.

use shared::{
    domain::{ContactField, ContactMessage, ContactValidationError},
    protocol::ContactReceipt,
};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::submission::SubmissionError;

pub const CONFIRMATION_NOTICE: &str = "Thank you for your message! I'll get back to you soon.";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    pub fn value_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        *self.value_mut(field) = value.into();
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        ContactField::ALL
            .into_iter()
            .all(|field| self.value(field).is_empty())
    }

    pub fn to_message(&self) -> ContactMessage {
        ContactMessage {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            subject: self.subject.trim().to_string(),
            message: self.message.trim().to_string(),
        }
    }
}

/// Identifies one submission attempt; completions carrying an older ticket are stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubmissionTicket(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Idle,
    Submitting(SubmissionTicket),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Confirmation(String),
    Failure { message: String, retryable: bool },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error(transparent)]
    Invalid(#[from] ContactValidationError),
    #[error("a submission is already in progress")]
    AlreadySubmitting,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSubmission {
    pub ticket: SubmissionTicket,
    pub message: ContactMessage,
}

#[derive(Debug, Clone)]
pub struct ContactFormController {
    form: ContactForm,
    phase: FormPhase,
    next_ticket: u64,
    notice: Option<Notice>,
    field_error: Option<ContactValidationError>,
}

impl ContactFormController {
    pub fn new() -> Self {
        Self {
            form: ContactForm::default(),
            phase: FormPhase::Idle,
            next_ticket: 1,
            notice: None,
            field_error: None,
        }
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.phase, FormPhase::Submitting(_))
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn dismiss_notice(&mut self) -> Option<Notice> {
        self.notice.take()
    }

    /// The validation failure from the last rejected submit intent, if the field
    /// has not been edited since.
    pub fn field_error(&self) -> Option<&ContactValidationError> {
        self.field_error.as_ref()
    }

    pub fn update_field(&mut self, field: ContactField, value: impl Into<String>) {
        self.form.set(field, value);
        if self
            .field_error
            .as_ref()
            .is_some_and(|err| err.field() == field)
        {
            self.field_error = None;
        }
    }

    /// Submit intent. Enters `Submitting` only when every required field passes.
    pub fn begin_submit(&mut self) -> Result<PendingSubmission, FormError> {
        if self.is_submitting() {
            return Err(FormError::AlreadySubmitting);
        }
        let message = self.form.to_message();
        if let Err(err) = message.validate() {
            debug!(field = %err.field(), "contact form blocked by validation");
            self.field_error = Some(err.clone());
            return Err(err.into());
        }

        let ticket = SubmissionTicket(self.next_ticket);
        self.next_ticket += 1;
        self.phase = FormPhase::Submitting(ticket);
        self.field_error = None;
        self.notice = None;
        info!(ticket = ticket.0, "contact form submitting");
        Ok(PendingSubmission { ticket, message })
    }

    /// Applies a completion. Returns `false` when `ticket` is not the submission in
    /// flight, in which case nothing changes.
    pub fn finish(
        &mut self,
        ticket: SubmissionTicket,
        outcome: Result<ContactReceipt, SubmissionError>,
    ) -> bool {
        if self.phase != FormPhase::Submitting(ticket) {
            debug!(ticket = ticket.0, "ignoring stale submission completion");
            return false;
        }
        self.phase = FormPhase::Idle;
        match outcome {
            Ok(receipt) => {
                info!(ticket = ticket.0, receipt_id = %receipt.receipt_id, "contact form sent");
                self.form.clear();
                self.notice = Some(Notice::Confirmation(CONFIRMATION_NOTICE.to_string()));
            }
            Err(SubmissionError::Cancelled) => {
                debug!(ticket = ticket.0, "submission cancelled");
            }
            Err(err) => {
                warn!(ticket = ticket.0, "contact form submission failed: {err}");
                self.notice = Some(Notice::Failure {
                    retryable: err.is_retryable(),
                    message: err.to_string(),
                });
            }
        }
        true
    }

    /// Drops the in-flight submission, if any, without touching the fields.
    pub fn cancel(&mut self) -> Option<SubmissionTicket> {
        match self.phase {
            FormPhase::Submitting(ticket) => {
                self.phase = FormPhase::Idle;
                Some(ticket)
            }
            FormPhase::Idle => None,
        }
    }
}

impl Default for ContactFormController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests/contact_form_tests.rs"]
mod tests;
