//! Backend-to-UI events and error modeling for the portfolio window.

use portfolio_core::{SubmissionError, SubmissionTicket};
use shared::protocol::ContactReceipt;

pub enum UiEvent {
    Info(String),
    Error(UiError),
    SubmissionFinished {
        ticket: SubmissionTicket,
        outcome: Result<ContactReceipt, SubmissionError>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    Validation,
    Rejected,
    Transport,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    BackendStartup,
    SubmitContact,
    LoadContent,
    General,
}

pub fn classify_submission_failure(err: &SubmissionError) -> String {
    match err {
        SubmissionError::Transport(_) => {
            "Contact endpoint unreachable; check your connection and retry.".to_string()
        }
        SubmissionError::Rejected { message, .. } => format!("Message was not accepted: {message}"),
        SubmissionError::Cancelled => "Submission cancelled.".to_string(),
    }
}

#[derive(Debug, Clone)]
pub struct UiError {
    category: UiErrorCategory,
    context: UiErrorContext,
    message: String,
}

impl UiError {
    pub fn from_message(context: UiErrorContext, message: impl Into<String>) -> Self {
        let message = message.into();
        let lower = message.to_ascii_lowercase();
        let category = if lower.contains("invalid")
            || lower.contains("required")
            || lower.contains("missing")
            || lower.contains("malformed")
        {
            UiErrorCategory::Validation
        } else if lower.contains("rejected") || lower.contains("not accepted") {
            UiErrorCategory::Rejected
        } else if lower.contains("timeout")
            || lower.contains("timed out")
            || lower.contains("connection")
            || lower.contains("unreachable")
            || lower.contains("disconnect")
        {
            UiErrorCategory::Transport
        } else {
            UiErrorCategory::Unknown
        };

        Self {
            category,
            context,
            message,
        }
    }

    pub fn from_submission(err: &SubmissionError) -> Self {
        let category = match err {
            SubmissionError::Rejected { .. } => UiErrorCategory::Rejected,
            SubmissionError::Transport(_) => UiErrorCategory::Transport,
            SubmissionError::Cancelled => UiErrorCategory::Unknown,
        };
        Self {
            category,
            context: UiErrorContext::SubmitContact,
            message: classify_submission_failure(err),
        }
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

pub fn err_label(category: UiErrorCategory) -> &'static str {
    match category {
        UiErrorCategory::Validation => "Validation",
        UiErrorCategory::Rejected => "Rejected",
        UiErrorCategory::Transport => "Connection",
        UiErrorCategory::Unknown => "Unexpected",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::error::ErrorCode;

    #[test]
    fn classifies_by_message_keywords() {
        let err = UiError::from_message(UiErrorContext::LoadContent, "invalid content: bad url");
        assert_eq!(err.category(), UiErrorCategory::Validation);
        assert_eq!(err.context(), UiErrorContext::LoadContent);

        let err = UiError::from_message(UiErrorContext::General, "connection refused");
        assert_eq!(err.category(), UiErrorCategory::Transport);

        let err = UiError::from_message(UiErrorContext::General, "something odd");
        assert_eq!(err.category(), UiErrorCategory::Unknown);
    }

    #[test]
    fn submission_errors_map_to_categories() {
        let rejected = UiError::from_submission(&SubmissionError::Rejected {
            code: ErrorCode::Validation,
            message: "email is required".into(),
        });
        assert_eq!(rejected.category(), UiErrorCategory::Rejected);
        assert!(rejected.message().contains("email is required"));

        let transport = UiError::from_submission(&SubmissionError::Transport("dns".into()));
        assert_eq!(transport.category(), UiErrorCategory::Transport);
        assert_eq!(transport.context(), UiErrorContext::SubmitContact);
    }
}
