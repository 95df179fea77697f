//! The contact submission boundary.

use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use shared::{
    domain::ContactMessage,
    error::{ApiError, ErrorCode},
    protocol::{ContactReceipt, ContactSubmission},
};
use thiserror::Error;
use tokio::{runtime::Handle, task::JoinHandle};
use tracing::{info, warn};
use url::Url;

use crate::contact_form::{PendingSubmission, SubmissionTicket};

pub const SIMULATED_SUBMIT_DELAY: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    #[error("submission rejected ({code:?}): {message}")]
    Rejected { code: ErrorCode, message: String },
    #[error("contact endpoint unreachable: {0}")]
    Transport(String),
    #[error("submission cancelled")]
    Cancelled,
}

impl SubmissionError {
    /// Whether resending the same record can succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Transport(_) => true,
            Self::Rejected { code, .. } => {
                matches!(code, ErrorCode::RateLimited | ErrorCode::Internal)
            }
            Self::Cancelled => false,
        }
    }
}

#[async_trait]
pub trait ContactSubmitter: Send + Sync {
    async fn submit(&self, message: &ContactMessage) -> Result<ContactReceipt, SubmissionError>;

    fn describe(&self) -> String;
}

/// Stand-in for a real endpoint: waits a fixed delay and always succeeds.
#[derive(Debug, Clone)]
pub struct SimulatedSubmitter {
    delay: Duration,
}

impl SimulatedSubmitter {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for SimulatedSubmitter {
    fn default() -> Self {
        Self::new(SIMULATED_SUBMIT_DELAY)
    }
}

#[async_trait]
impl ContactSubmitter for SimulatedSubmitter {
    async fn submit(&self, message: &ContactMessage) -> Result<ContactReceipt, SubmissionError> {
        tokio::time::sleep(self.delay).await;
        info!(subject = %message.subject, "simulated contact submission accepted");
        Ok(ContactReceipt::simulated())
    }

    fn describe(&self) -> String {
        format!("simulated ({} ms)", self.delay.as_millis())
    }
}

pub struct HttpSubmitter {
    http: Client,
    endpoint: Url,
}

impl HttpSubmitter {
    pub fn new(endpoint: Url) -> Self {
        Self::with_client(Client::new(), endpoint)
    }

    pub fn with_client(http: Client, endpoint: Url) -> Self {
        Self { http, endpoint }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

fn code_for_status(status: StatusCode) -> ErrorCode {
    match status {
        StatusCode::PAYLOAD_TOO_LARGE => ErrorCode::PayloadTooLarge,
        StatusCode::TOO_MANY_REQUESTS => ErrorCode::RateLimited,
        s if s.is_server_error() => ErrorCode::Internal,
        _ => ErrorCode::Validation,
    }
}

#[async_trait]
impl ContactSubmitter for HttpSubmitter {
    async fn submit(&self, message: &ContactMessage) -> Result<ContactReceipt, SubmissionError> {
        let response = self
            .http
            .post(self.endpoint.clone())
            .json(&ContactSubmission {
                message: message.clone(),
            })
            .send()
            .await
            .map_err(|err| SubmissionError::Transport(err.to_string()))?;

        let status = response.status();
        if status.is_success() {
            let receipt = response
                .json::<ContactReceipt>()
                .await
                .map_err(|err| SubmissionError::Transport(format!("invalid receipt: {err}")))?;
            info!(receipt_id = %receipt.receipt_id, "contact submission accepted");
            return Ok(receipt);
        }

        let body = response.text().await.unwrap_or_default();
        let err = match serde_json::from_str::<ApiError>(&body) {
            Ok(api) => SubmissionError::Rejected {
                code: api.code,
                message: api.message,
            },
            Err(_) => SubmissionError::Rejected {
                code: code_for_status(status),
                message: format!("endpoint responded with {status}"),
            },
        };
        warn!(%status, "contact submission rejected: {err}");
        Err(err)
    }

    fn describe(&self) -> String {
        format!("http ({})", self.endpoint)
    }
}

/// A submission running on the backend runtime. Dropping the task aborts it, so a
/// torn-down view never receives a late completion.
pub struct SubmissionTask {
    ticket: SubmissionTicket,
    handle: JoinHandle<()>,
}

impl SubmissionTask {
    pub fn spawn<F>(
        runtime: &Handle,
        submitter: Arc<dyn ContactSubmitter>,
        pending: PendingSubmission,
        on_complete: F,
    ) -> Self
    where
        F: FnOnce(SubmissionTicket, Result<ContactReceipt, SubmissionError>) + Send + 'static,
    {
        let ticket = pending.ticket;
        let handle = runtime.spawn(async move {
            let outcome = submitter.submit(&pending.message).await;
            on_complete(ticket, outcome);
        });
        Self { ticket, handle }
    }

    pub fn ticket(&self) -> SubmissionTicket {
        self.ticket
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    pub fn cancel(self) {
        drop(self);
    }
}

impl Drop for SubmissionTask {
    fn drop(&mut self) {
        if !self.handle.is_finished() {
            tracing::debug!(ticket = self.ticket.0, "aborting in-flight submission");
            self.handle.abort();
        }
    }
}

#[cfg(test)]
#[path = "tests/submission_tests.rs"]
mod tests;
