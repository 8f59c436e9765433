//! Portfolio singleton: personal details, home page copy and the about section.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::i18n::{Bilingual, Lang, Localize, ProjectionError};

/// Contact details and headline shown across the site.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub name: String,
    pub title: Bilingual<String>,
    pub email: String,
    pub linkedin: String,
    pub github: String,
    pub profile_image: String,
    pub birthdate: String,
}

/// Greeting block on the landing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomeContent {
    pub greeting: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationItem {
    pub degree: String,
    pub institution: String,
    pub period: String,
    #[serde(default)]
    pub thesis: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AboutData {
    pub education: Bilingual<Vec<EducationItem>>,
    pub skills: Bilingual<Vec<String>>,
    pub languages: Bilingual<Vec<String>>,
    pub interests: Bilingual<Vec<String>>,
}

/// The stored portfolio document. At most one exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Portfolio {
    pub id: String,
    pub personal_info: PersonalInfo,
    pub home: Bilingual<HomeContent>,
    pub about: AboutData,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request body for POST /api/portfolio.
#[derive(Debug, Clone, Deserialize)]
pub struct SavePortfolioRequest {
    pub personal_info: PersonalInfo,
    pub home: Bilingual<HomeContent>,
    pub about: AboutData,
}

/// Whether a save inserted the singleton or overwrote it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Created,
    Updated,
}

impl SaveOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            SaveOutcome::Created => "Portfolio created successfully",
            SaveOutcome::Updated => "Portfolio updated successfully",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonalView {
    pub name: String,
    pub title: String,
    pub email: String,
    pub linkedin: String,
    pub github: String,
    #[serde(rename = "profileImage")]
    pub profile_image: String,
    pub birthdate: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AboutView {
    pub education: Vec<EducationItem>,
    pub skills: Vec<String>,
    pub languages: Vec<String>,
    pub interests: Vec<String>,
}

/// Response for GET /api/portfolio.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioView {
    pub personal: PersonalView,
    pub home: HomeContent,
    pub about: AboutView,
}

impl Localize for Portfolio {
    type View = PortfolioView;

    fn localize(&self, lang: Lang) -> Result<PortfolioView, ProjectionError> {
        let info = &self.personal_info;
        Ok(PortfolioView {
            personal: PersonalView {
                name: info.name.clone(),
                title: info.title.project("personal_info.title", lang)?,
                email: info.email.clone(),
                linkedin: info.linkedin.clone(),
                github: info.github.clone(),
                profile_image: info.profile_image.clone(),
                birthdate: info.birthdate.clone(),
            },
            home: self.home.project("home", lang)?,
            about: AboutView {
                education: self.about.education.project("about.education", lang)?,
                skills: self.about.skills.project("about.skills", lang)?,
                languages: self.about.languages.project("about.languages", lang)?,
                interests: self.about.interests.project("about.interests", lang)?,
            },
        })
    }
}
