use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::ContactMessage;

pub fn contact_route() -> &'static str {
    "/contact"
}

pub fn healthz_route() -> &'static str {
    "/healthz"
}

/// Body of `POST /contact`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactSubmission {
    #[serde(flatten)]
    pub message: ContactMessage,
}

/// Acknowledgement returned for an accepted submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactReceipt {
    pub receipt_id: Uuid,
    pub received_at: DateTime<Utc>,
    /// `true` when no endpoint was contacted and the receipt was produced locally.
    #[serde(default)]
    pub simulated: bool,
}

impl ContactReceipt {
    pub fn issue() -> Self {
        Self {
            receipt_id: Uuid::new_v4(),
            received_at: Utc::now(),
            simulated: false,
        }
    }

    pub fn simulated() -> Self {
        Self {
            simulated: true,
            ..Self::issue()
        }
    }
}

#[cfg(test)]
#[path = "tests/protocol_tests.rs"]
mod tests;
