//! Showcased projects.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::i18n::{Bilingual, Lang, Localize, ProjectionError};

/// A stored project. Lower `order` is shown first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: Bilingual<String>,
    pub description: Bilingual<String>,
    /// Technology names are not translated.
    pub technologies: Vec<String>,
    pub github: String,
    pub live_url: Option<String>,
    pub featured: bool,
    pub order: i64,
    pub created_at: DateTime<Utc>,
}

/// Request body for POST /api/projects.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProjectRequest {
    pub title: Bilingual<String>,
    pub description: Bilingual<String>,
    pub technologies: Vec<String>,
    pub github: String,
    #[serde(default)]
    pub live_url: Option<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub order: i64,
}

impl Project {
    pub fn from_request(request: CreateProjectRequest) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            title: request.title,
            description: request.description,
            technologies: request.technologies,
            github: request.github,
            live_url: request.live_url,
            featured: request.featured,
            order: request.order,
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectView {
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub github: String,
    pub live_url: Option<String>,
}

impl Localize for Project {
    type View = ProjectView;

    fn localize(&self, lang: Lang) -> Result<ProjectView, ProjectionError> {
        Ok(ProjectView {
            title: self.title.project("title", lang)?,
            description: self.description.project("description", lang)?,
            technologies: self.technologies.clone(),
            github: self.github.clone(),
            live_url: self.live_url.clone(),
        })
    }
}
