//! Contact form submissions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Message sent through the contact form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    pub id: String,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    /// Reserved for manual triage; the API never changes it.
    pub read: bool,
    pub submitted_at: DateTime<Utc>,
}

/// Request body for POST /api/contact.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateContactRequest {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl Contact {
    /// `email` must already be validated and normalized.
    pub fn new(request: CreateContactRequest, email: String) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: request.name,
            email,
            subject: request.subject,
            message: request.message,
            read: false,
            submitted_at: Utc::now(),
        }
    }
}
