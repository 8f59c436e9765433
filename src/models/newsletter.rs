//! Newsletter subscriptions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One row per email address, toggled rather than duplicated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subscription {
    pub id: String,
    pub email: String,
    pub subscribed: bool,
    pub subscribed_at: DateTime<Utc>,
    pub unsubscribed_at: Option<DateTime<Utc>>,
}

/// Request body for POST /api/newsletter and /api/newsletter/unsubscribe.
#[derive(Debug, Clone, Deserialize)]
pub struct NewsletterRequest {
    pub email: String,
}

/// Result of a subscribe call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscribeOutcome {
    Subscribed,
    Resubscribed,
    AlreadySubscribed,
}

impl SubscribeOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            SubscribeOutcome::Subscribed => "Successfully subscribed to newsletter",
            SubscribeOutcome::Resubscribed => "Successfully resubscribed to newsletter",
            SubscribeOutcome::AlreadySubscribed => "Email already subscribed to newsletter",
        }
    }
}
