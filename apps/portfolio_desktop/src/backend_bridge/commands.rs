//! Backend command definitions emitted by UI/controller actions.

use portfolio_core::{PendingSubmission, SubmissionTicket};

pub enum BackendCommand {
    SubmitContact { pending: PendingSubmission },
    CancelSubmission { ticket: SubmissionTicket },
    Shutdown,
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            BackendCommand::SubmitContact { .. } => "submit_contact",
            BackendCommand::CancelSubmission { .. } => "cancel_submission",
            BackendCommand::Shutdown => "shutdown",
        }
    }
}
