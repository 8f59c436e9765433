//! Blog posts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::i18n::{Bilingual, Lang, Localize, ProjectionError};

/// A stored blog post. Only published posts are ever served.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: String,
    pub title: Bilingual<String>,
    pub excerpt: Bilingual<String>,
    pub content: Bilingual<String>,
    /// Each language has its own URL slug.
    pub slug: Bilingual<String>,
    pub category: Bilingual<String>,
    pub read_time: String,
    pub published: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request body for POST /api/blog.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBlogPostRequest {
    pub title: Bilingual<String>,
    pub excerpt: Bilingual<String>,
    pub content: Bilingual<String>,
    pub slug: Bilingual<String>,
    pub category: Bilingual<String>,
    pub read_time: String,
    #[serde(default)]
    pub published: bool,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
}

impl BlogPost {
    /// Build a new post. A post created as published without an explicit
    /// `published_at` is stamped with its creation time.
    pub fn from_request(request: CreateBlogPostRequest) -> Self {
        let now = Utc::now();
        let published_at = match request.published_at {
            Some(at) => Some(at),
            None if request.published => Some(now),
            None => None,
        };
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            title: request.title,
            excerpt: request.excerpt,
            content: request.content,
            slug: request.slug,
            category: request.category,
            read_time: request.read_time,
            published: request.published,
            published_at,
            created_at: now,
            updated_at: now,
        }
    }

    /// Publication date as `YYYY-MM-DD`, falling back to the creation date.
    pub fn display_date(&self) -> String {
        self.published_at
            .unwrap_or(self.created_at)
            .format("%Y-%m-%d")
            .to_string()
    }

    /// Full single-language view used by GET /api/blog/{slug}.
    pub fn detail(&self, lang: Lang) -> Result<BlogPostDetail, ProjectionError> {
        Ok(BlogPostDetail {
            title: self.title.project("title", lang)?,
            content: self.content.project("content", lang)?,
            date: self.display_date(),
            category: self.category.project("category", lang)?,
            read_time: self.read_time.clone(),
        })
    }
}

/// List entry for GET /api/blog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogPostSummary {
    pub title: String,
    pub excerpt: String,
    pub date: String,
    pub slug: String,
    pub category: String,
    pub read_time: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogPostDetail {
    pub title: String,
    pub content: String,
    pub date: String,
    pub category: String,
    pub read_time: String,
}

impl Localize for BlogPost {
    type View = BlogPostSummary;

    fn localize(&self, lang: Lang) -> Result<BlogPostSummary, ProjectionError> {
        Ok(BlogPostSummary {
            title: self.title.project("title", lang)?,
            excerpt: self.excerpt.project("excerpt", lang)?,
            date: self.display_date(),
            slug: self.slug.project("slug", lang)?,
            category: self.category.project("category", lang)?,
            read_time: self.read_time.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn text(en: &str, no: &str) -> Bilingual<String> {
        Bilingual::new(en.to_string(), no.to_string())
    }

    fn request(published: bool) -> CreateBlogPostRequest {
        CreateBlogPostRequest {
            title: text("Risk", "Risiko"),
            excerpt: text("Short", "Kort"),
            content: text("Long body", "Lang tekst"),
            slug: text("risk", "risiko"),
            category: text("Finance", "Finans"),
            read_time: "5 min".to_string(),
            published,
            published_at: None,
        }
    }

    #[test]
    fn test_drafts_have_no_publication_time() {
        let post = BlogPost::from_request(request(false));
        assert!(!post.published);
        assert!(post.published_at.is_none());
        assert_eq!(post.display_date(), post.created_at.format("%Y-%m-%d").to_string());
    }

    #[test]
    fn test_published_posts_are_stamped() {
        let post = BlogPost::from_request(request(true));
        assert_eq!(post.published_at, Some(post.created_at));
    }

    #[test]
    fn test_explicit_publication_time_wins() {
        let at = Utc.with_ymd_and_hms(2024, 3, 9, 12, 0, 0).unwrap();
        let mut req = request(true);
        req.published_at = Some(at);
        let post = BlogPost::from_request(req);
        assert_eq!(post.display_date(), "2024-03-09");
    }

    #[test]
    fn test_summary_and_detail_views() {
        let post = BlogPost::from_request(request(true));
        let summary = post.localize(Lang::No).unwrap();
        assert_eq!(summary.slug, "risiko");
        assert_eq!(summary.category, "Finans");
        assert_eq!(summary.read_time, "5 min");

        let detail = post.detail(Lang::En).unwrap();
        assert_eq!(detail.title, "Risk");
        assert_eq!(detail.content, "Long body");
    }
}
