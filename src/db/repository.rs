//! Database repository for the six content collections.
//!
//! Check-then-act sequences (portfolio save, newsletter subscribe) are single
//! `INSERT ... ON CONFLICT` statements so concurrent requests cannot create duplicates.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{de::DeserializeOwned, Serialize};
use sqlx::sqlite::SqliteRow;
use sqlx::{Executor, Row, Sqlite, SqlitePool};

use super::seed::SeedContent;
use crate::errors::AppError;
use crate::i18n::Lang;
use crate::models::{
    BlogPost, Contact, PersonalInfo, Portfolio, Project, SaveOutcome, SavePortfolioRequest,
    SubscribeOutcome, Subscription, TimelineEntry,
};

/// Database repository for all data operations.
#[derive(Clone)]
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Close every pooled connection. Called once the server has stopped.
    pub async fn close(&self) {
        self.pool.close().await;
    }

    // ==================== PORTFOLIO ====================

    /// Get the portfolio document, if one has been saved.
    pub async fn get_portfolio(&self) -> Result<Option<Portfolio>, AppError> {
        let row = sqlx::query(
            "SELECT id, personal_info, home, about, created_at, updated_at FROM portfolio WHERE singleton = 1",
        )
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(portfolio_from_row).transpose()
    }

    /// Insert the portfolio or overwrite the existing one in a single statement.
    pub async fn save_portfolio(
        &self,
        request: &SavePortfolioRequest,
    ) -> Result<SaveOutcome, AppError> {
        upsert_portfolio(&self.pool, request).await
    }

    // ==================== TIMELINE ====================

    /// List timeline entries, highest `order` first.
    pub async fn list_timeline(&self, limit: i64) -> Result<Vec<TimelineEntry>, AppError> {
        let rows = sqlx::query(
            "SELECT id, year, title, company, description, sort_order, created_at FROM timeline ORDER BY sort_order DESC, created_at DESC LIMIT ?",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(timeline_from_row).collect()
    }

    pub async fn create_timeline_entry(&self, entry: &TimelineEntry) -> Result<(), AppError> {
        let affected = insert_timeline_entry(&self.pool, entry).await?;
        ensure_written(affected, "Failed to create timeline item")
    }

    // ==================== PROJECTS ====================

    /// List projects, lowest `order` first.
    pub async fn list_projects(
        &self,
        featured_only: bool,
        limit: i64,
    ) -> Result<Vec<Project>, AppError> {
        let rows = sqlx::query(
            r#"SELECT id, title, description, technologies, github, live_url, featured, sort_order, created_at
               FROM projects
               WHERE (? = 0 OR featured = 1)
               ORDER BY sort_order ASC, created_at ASC
               LIMIT ?"#,
        )
        .bind(featured_only)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(project_from_row).collect()
    }

    pub async fn create_project(&self, project: &Project) -> Result<(), AppError> {
        let affected = insert_project(&self.pool, project).await?;
        ensure_written(affected, "Failed to create project")
    }

    // ==================== BLOG ====================

    /// List published posts, newest first, skipping `skip` and returning at most `limit`.
    pub async fn list_published_posts(
        &self,
        skip: i64,
        limit: i64,
    ) -> Result<Vec<BlogPost>, AppError> {
        let rows = sqlx::query(
            r#"SELECT id, title, excerpt, content, slug, category, read_time, published, published_at, created_at, updated_at
               FROM blog_posts
               WHERE published = 1
               ORDER BY COALESCE(published_at, created_at) DESC
               LIMIT ? OFFSET ?"#,
        )
        .bind(limit)
        .bind(skip)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(blog_post_from_row).collect()
    }

    /// Find a published post whose slug in `lang` equals `slug`.
    pub async fn find_published_post(
        &self,
        lang: Lang,
        slug: &str,
    ) -> Result<Option<BlogPost>, AppError> {
        let row = sqlx::query(
            r#"SELECT id, title, excerpt, content, slug, category, read_time, published, published_at, created_at, updated_at
               FROM blog_posts
               WHERE published = 1 AND json_extract(slug, ?) = ?
               ORDER BY COALESCE(published_at, created_at) DESC
               LIMIT 1"#,
        )
        .bind(lang.json_path())
        .bind(slug)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(blog_post_from_row).transpose()
    }

    pub async fn create_post(&self, post: &BlogPost) -> Result<(), AppError> {
        let affected = insert_blog_post(&self.pool, post).await?;
        ensure_written(affected, "Failed to create blog post")
    }

    // ==================== CONTACTS ====================

    pub async fn create_contact(&self, contact: &Contact) -> Result<(), AppError> {
        let result = sqlx::query(
            "INSERT INTO contacts (id, name, email, subject, message, read, submitted_at) VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&contact.id)
        .bind(&contact.name)
        .bind(&contact.email)
        .bind(&contact.subject)
        .bind(&contact.message)
        .bind(contact.read)
        .bind(timestamp(&contact.submitted_at))
        .execute(&self.pool)
        .await?;

        ensure_written(result.rows_affected(), "Failed to submit contact form")
    }

    /// List submissions, newest first.
    pub async fn list_contacts(&self, limit: i64) -> Result<Vec<Contact>, AppError> {
        let rows = sqlx::query(
            "SELECT id, name, email, subject, message, read, submitted_at FROM contacts ORDER BY submitted_at DESC LIMIT ?",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(contact_from_row).collect()
    }

    // ==================== NEWSLETTER ====================

    /// Subscribe `email`, reactivating an existing unsubscribed row instead of
    /// inserting a second one.
    pub async fn subscribe(&self, email: &str) -> Result<SubscribeOutcome, AppError> {
        let new_id = uuid::Uuid::new_v4().to_string();
        let now = timestamp(&Utc::now());

        // The conflict branch only fires for inactive rows, so an active
        // subscription yields no RETURNING row at all.
        let row = sqlx::query(
            r#"INSERT INTO newsletter (id, email, subscribed, subscribed_at, unsubscribed_at)
               VALUES (?, ?, 1, ?, NULL)
               ON CONFLICT(email) DO UPDATE SET subscribed = 1, unsubscribed_at = NULL
               WHERE newsletter.subscribed = 0
               RETURNING id"#,
        )
        .bind(&new_id)
        .bind(email)
        .bind(&now)
        .fetch_optional(&self.pool)
        .await?;

        let outcome = match row {
            None => SubscribeOutcome::AlreadySubscribed,
            Some(row) => {
                let id: String = row.try_get("id")?;
                if id == new_id {
                    SubscribeOutcome::Subscribed
                } else {
                    SubscribeOutcome::Resubscribed
                }
            }
        };
        Ok(outcome)
    }

    /// Mark an active subscription as unsubscribed. Returns false when none exists.
    pub async fn unsubscribe(&self, email: &str) -> Result<bool, AppError> {
        let result = sqlx::query(
            "UPDATE newsletter SET subscribed = 0, unsubscribed_at = ? WHERE email = ? AND subscribed = 1",
        )
        .bind(timestamp(&Utc::now()))
        .bind(email)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// List active subscriptions, oldest first.
    pub async fn list_subscribers(&self, limit: i64) -> Result<Vec<Subscription>, AppError> {
        let rows = sqlx::query(
            "SELECT id, email, subscribed, subscribed_at, unsubscribed_at FROM newsletter WHERE subscribed = 1 ORDER BY subscribed_at ASC LIMIT ?",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(subscription_from_row).collect()
    }

    // ==================== SEEDING ====================

    /// Replace all published content with `content` in one transaction.
    /// Contacts and newsletter subscriptions are left alone.
    pub async fn replace_content(&self, content: &SeedContent) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        for statement in [
            "DELETE FROM portfolio",
            "DELETE FROM timeline",
            "DELETE FROM projects",
            "DELETE FROM blog_posts",
        ] {
            let result = sqlx::query(statement).execute(&mut *tx).await?;
            tracing::debug!("{}: {} rows removed", statement, result.rows_affected());
        }

        upsert_portfolio(&mut *tx, &content.portfolio).await?;
        for entry in &content.timeline {
            insert_timeline_entry(&mut *tx, entry).await?;
        }
        for project in &content.projects {
            insert_project(&mut *tx, project).await?;
        }
        for post in &content.posts {
            insert_blog_post(&mut *tx, post).await?;
        }

        tx.commit().await?;
        Ok(())
    }
}

// Writes shared by the request path and seeding

async fn upsert_portfolio<'e, E>(
    executor: E,
    request: &SavePortfolioRequest,
) -> Result<SaveOutcome, AppError>
where
    E: Executor<'e, Database = Sqlite>,
{
    let new_id = uuid::Uuid::new_v4().to_string();
    let now = timestamp(&Utc::now());

    let row = sqlx::query(
        r#"INSERT INTO portfolio (singleton, id, personal_info, home, about, created_at, updated_at)
           VALUES (1, ?, ?, ?, ?, ?, ?)
           ON CONFLICT(singleton) DO UPDATE SET
               personal_info = excluded.personal_info,
               home = excluded.home,
               about = excluded.about,
               updated_at = excluded.updated_at
           RETURNING id"#,
    )
    .bind(&new_id)
    .bind(to_json("personal_info", &request.personal_info)?)
    .bind(to_json("home", &request.home)?)
    .bind(to_json("about", &request.about)?)
    .bind(&now)
    .bind(&now)
    .fetch_optional(executor)
    .await?;

    let Some(row) = row else {
        return Err(AppError::BadRequest("Failed to save portfolio".to_string()));
    };
    let id: String = row.try_get("id")?;
    Ok(if id == new_id {
        SaveOutcome::Created
    } else {
        SaveOutcome::Updated
    })
}

async fn insert_timeline_entry<'e, E>(executor: E, entry: &TimelineEntry) -> Result<u64, AppError>
where
    E: Executor<'e, Database = Sqlite>,
{
    let result = sqlx::query(
        "INSERT INTO timeline (id, year, title, company, description, sort_order, created_at) VALUES (?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&entry.id)
    .bind(&entry.year)
    .bind(to_json("title", &entry.title)?)
    .bind(to_json("company", &entry.company)?)
    .bind(to_json("description", &entry.description)?)
    .bind(entry.order)
    .bind(timestamp(&entry.created_at))
    .execute(executor)
    .await?;

    Ok(result.rows_affected())
}

async fn insert_project<'e, E>(executor: E, project: &Project) -> Result<u64, AppError>
where
    E: Executor<'e, Database = Sqlite>,
{
    let result = sqlx::query(
        "INSERT INTO projects (id, title, description, technologies, github, live_url, featured, sort_order, created_at) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&project.id)
    .bind(to_json("title", &project.title)?)
    .bind(to_json("description", &project.description)?)
    .bind(to_json("technologies", &project.technologies)?)
    .bind(&project.github)
    .bind(&project.live_url)
    .bind(project.featured)
    .bind(project.order)
    .bind(timestamp(&project.created_at))
    .execute(executor)
    .await?;

    Ok(result.rows_affected())
}

async fn insert_blog_post<'e, E>(executor: E, post: &BlogPost) -> Result<u64, AppError>
where
    E: Executor<'e, Database = Sqlite>,
{
    let result = sqlx::query(
        r#"INSERT INTO blog_posts (id, title, excerpt, content, slug, category, read_time, published, published_at, created_at, updated_at)
           VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)"#,
    )
    .bind(&post.id)
    .bind(to_json("title", &post.title)?)
    .bind(to_json("excerpt", &post.excerpt)?)
    .bind(to_json("content", &post.content)?)
    .bind(to_json("slug", &post.slug)?)
    .bind(to_json("category", &post.category)?)
    .bind(&post.read_time)
    .bind(post.published)
    .bind(post.published_at.as_ref().map(timestamp))
    .bind(timestamp(&post.created_at))
    .bind(timestamp(&post.updated_at))
    .execute(executor)
    .await?;

    Ok(result.rows_affected())
}

fn ensure_written(rows_affected: u64, failure: &str) -> Result<(), AppError> {
    if rows_affected == 0 {
        return Err(AppError::BadRequest(failure.to_string()));
    }
    Ok(())
}

// Helper functions for row conversion

/// Fixed-width UTC timestamp; sorts lexicographically in time order.
fn timestamp(value: &DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn to_json<T: Serialize>(column: &str, value: &T) -> Result<String, AppError> {
    serde_json::to_string(value)
        .map_err(|e| AppError::Internal(format!("Failed to encode {}: {}", column, e)))
}

fn json_column<T: DeserializeOwned>(row: &SqliteRow, column: &str) -> Result<T, AppError> {
    let raw: String = row.try_get(column)?;
    serde_json::from_str(&raw)
        .map_err(|e| AppError::Internal(format!("Corrupt {} column: {}", column, e)))
}

fn parse_timestamp(column: &str, raw: &str) -> Result<DateTime<Utc>, AppError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| AppError::Internal(format!("Corrupt {} timestamp '{}': {}", column, raw, e)))
}

fn timestamp_column(row: &SqliteRow, column: &str) -> Result<DateTime<Utc>, AppError> {
    let raw: String = row.try_get(column)?;
    parse_timestamp(column, &raw)
}

fn optional_timestamp_column(
    row: &SqliteRow,
    column: &str,
) -> Result<Option<DateTime<Utc>>, AppError> {
    let raw: Option<String> = row.try_get(column)?;
    raw.map(|s| parse_timestamp(column, &s)).transpose()
}

fn portfolio_from_row(row: &SqliteRow) -> Result<Portfolio, AppError> {
    let personal_info: PersonalInfo = json_column(row, "personal_info")?;
    Ok(Portfolio {
        id: row.try_get("id")?,
        personal_info,
        home: json_column(row, "home")?,
        about: json_column(row, "about")?,
        created_at: timestamp_column(row, "created_at")?,
        updated_at: timestamp_column(row, "updated_at")?,
    })
}

fn timeline_from_row(row: &SqliteRow) -> Result<TimelineEntry, AppError> {
    Ok(TimelineEntry {
        id: row.try_get("id")?,
        year: row.try_get("year")?,
        title: json_column(row, "title")?,
        company: json_column(row, "company")?,
        description: json_column(row, "description")?,
        order: row.try_get("sort_order")?,
        created_at: timestamp_column(row, "created_at")?,
    })
}

fn project_from_row(row: &SqliteRow) -> Result<Project, AppError> {
    Ok(Project {
        id: row.try_get("id")?,
        title: json_column(row, "title")?,
        description: json_column(row, "description")?,
        technologies: json_column(row, "technologies")?,
        github: row.try_get("github")?,
        live_url: row.try_get("live_url")?,
        featured: row.try_get("featured")?,
        order: row.try_get("sort_order")?,
        created_at: timestamp_column(row, "created_at")?,
    })
}

fn blog_post_from_row(row: &SqliteRow) -> Result<BlogPost, AppError> {
    Ok(BlogPost {
        id: row.try_get("id")?,
        title: json_column(row, "title")?,
        excerpt: json_column(row, "excerpt")?,
        content: json_column(row, "content")?,
        slug: json_column(row, "slug")?,
        category: json_column(row, "category")?,
        read_time: row.try_get("read_time")?,
        published: row.try_get("published")?,
        published_at: optional_timestamp_column(row, "published_at")?,
        created_at: timestamp_column(row, "created_at")?,
        updated_at: timestamp_column(row, "updated_at")?,
    })
}

fn contact_from_row(row: &SqliteRow) -> Result<Contact, AppError> {
    Ok(Contact {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        email: row.try_get("email")?,
        subject: row.try_get("subject")?,
        message: row.try_get("message")?,
        read: row.try_get("read")?,
        submitted_at: timestamp_column(row, "submitted_at")?,
    })
}

fn subscription_from_row(row: &SqliteRow) -> Result<Subscription, AppError> {
    Ok(Subscription {
        id: row.try_get("id")?,
        email: row.try_get("email")?,
        subscribed: row.try_get("subscribed")?,
        subscribed_at: timestamp_column(row, "subscribed_at")?,
        unsubscribed_at: optional_timestamp_column(row, "unsubscribed_at")?,
    })
}
