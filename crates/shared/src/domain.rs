use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Anchor identifiers of the portfolio page, in declaration (top-to-bottom) order.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum SectionId {
    #[default]
    About,
    Education,
    Skills,
    Projects,
    Certifications,
    Activities,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 7] = [
        SectionId::About,
        SectionId::Education,
        SectionId::Skills,
        SectionId::Projects,
        SectionId::Certifications,
        SectionId::Activities,
        SectionId::Contact,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::About => "about",
            Self::Education => "education",
            Self::Skills => "skills",
            Self::Projects => "projects",
            Self::Certifications => "certifications",
            Self::Activities => "activities",
            Self::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::About => "About",
            Self::Education => "Education",
            Self::Skills => "Skills",
            Self::Projects => "Projects",
            Self::Certifications => "Certifications",
            Self::Activities => "Activities",
            Self::Contact => "Contact",
        }
    }

    /// Looks up an anchor name. Unknown names yield `None`; callers treat that as a no-op.
    pub fn from_anchor(anchor: &str) -> Option<Self> {
        let anchor = anchor.trim().trim_start_matches('#');
        Self::ALL
            .into_iter()
            .find(|section| section.as_str().eq_ignore_ascii_case(anchor))
    }

    pub fn position(self) -> usize {
        self as usize
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 4] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Subject,
        ContactField::Message,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Subject => "Subject",
            Self::Message => "Message",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The four-field record posted to the contact endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactValidationError {
    #[error("{field} is required")]
    MissingField { field: ContactField },
    #[error("'{value}' is not a valid email address")]
    InvalidEmail { value: String },
    #[error("{field} exceeds {limit} bytes")]
    TooLong { field: ContactField, limit: usize },
}

impl ContactValidationError {
    pub fn field(&self) -> ContactField {
        match self {
            Self::MissingField { field } | Self::TooLong { field, .. } => *field,
            Self::InvalidEmail { .. } => ContactField::Email,
        }
    }
}

impl ContactMessage {
    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    /// Required-field check: every field non-blank after trimming, email shaped like
    /// `local@domain`. Fields are checked in form order and the first failure is reported.
    pub fn validate(&self) -> Result<(), ContactValidationError> {
        for field in ContactField::ALL {
            if self.field(field).trim().is_empty() {
                return Err(ContactValidationError::MissingField { field });
            }
        }
        if !looks_like_email(self.email.trim()) {
            return Err(ContactValidationError::InvalidEmail {
                value: self.email.clone(),
            });
        }
        Ok(())
    }

    pub fn validate_lengths(&self, limit: usize) -> Result<(), ContactValidationError> {
        for field in ContactField::ALL {
            if self.field(field).len() > limit {
                return Err(ContactValidationError::TooLong { field, limit });
            }
        }
        Ok(())
    }
}

pub fn looks_like_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

#[cfg(test)]
#[path = "tests/domain_tests.rs"]
mod tests;
