use std::sync::atomic::{AtomicU64, Ordering};

use shared::{
    domain::ContactMessage,
    error::{ApiError, ErrorCode},
    protocol::ContactReceipt,
};
use tracing::info;

use crate::settings::Settings;

pub struct RelayContext {
    pub max_field_bytes: usize,
    accepted: AtomicU64,
}

impl RelayContext {
    pub fn new(settings: &Settings) -> Self {
        Self {
            max_field_bytes: settings.max_field_bytes,
            accepted: AtomicU64::new(0),
        }
    }

    pub fn accepted_count(&self) -> u64 {
        self.accepted.load(Ordering::Relaxed)
    }
}

fn trimmed(message: &ContactMessage) -> ContactMessage {
    ContactMessage {
        name: message.name.trim().to_string(),
        email: message.email.trim().to_string(),
        subject: message.subject.trim().to_string(),
        message: message.message.trim().to_string(),
    }
}

/// Validates a submission and issues a receipt. Messages are logged, not stored.
pub fn accept_contact(ctx: &RelayContext, message: &ContactMessage) -> Result<ContactReceipt, ApiError> {
    let message = trimmed(message);
    message.validate().map_err(validation)?;
    message
        .validate_lengths(ctx.max_field_bytes)
        .map_err(validation)?;

    let receipt = ContactReceipt::issue();
    let total = ctx.accepted.fetch_add(1, Ordering::Relaxed) + 1;
    info!(
        receipt_id = %receipt.receipt_id,
        from = %message.email,
        subject = %message.subject,
        message_bytes = message.message.len(),
        total,
        "contact message accepted"
    );
    Ok(receipt)
}

fn validation(err: impl std::fmt::Display) -> ApiError {
    ApiError::new(ErrorCode::Validation, err.to_string())
}

#[cfg(test)]
#[path = "tests/api_tests.rs"]
mod tests;
