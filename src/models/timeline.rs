//! Work history entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::i18n::{Bilingual, Lang, Localize, ProjectionError};

/// A stored timeline entry. Higher `order` is shown first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub id: String,
    pub year: String,
    pub title: Bilingual<String>,
    pub company: Bilingual<String>,
    pub description: Bilingual<String>,
    pub order: i64,
    pub created_at: DateTime<Utc>,
}

/// Request body for POST /api/timeline.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTimelineRequest {
    pub year: String,
    pub title: Bilingual<String>,
    pub company: Bilingual<String>,
    pub description: Bilingual<String>,
    pub order: i64,
}

impl TimelineEntry {
    pub fn from_request(request: CreateTimelineRequest) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            year: request.year,
            title: request.title,
            company: request.company,
            description: request.description,
            order: request.order,
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineView {
    pub year: String,
    pub title: String,
    pub company: String,
    pub description: String,
}

impl Localize for TimelineEntry {
    type View = TimelineView;

    fn localize(&self, lang: Lang) -> Result<TimelineView, ProjectionError> {
        Ok(TimelineView {
            year: self.year.clone(),
            title: self.title.project("title", lang)?,
            company: self.company.project("company", lang)?,
            description: self.description.project("description", lang)?,
        })
    }
}
