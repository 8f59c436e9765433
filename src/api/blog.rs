//! Blog API endpoints.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;

use super::{
    require_text, require_translations, ApiJson, ApiQuery, ApiResult, CreatedResponse, LangQuery,
};
use crate::errors::AppError;
use crate::i18n::{localize_all, Lang};
use crate::models::{BlogPost, BlogPostDetail, BlogPostSummary, CreateBlogPostRequest};
use crate::AppState;

/// Query parameters for GET /api/blog (list)
#[derive(Debug, Deserialize)]
pub struct BlogListQuery {
    #[serde(default)]
    pub lang: Lang,
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(default)]
    pub skip: u32,
}

fn default_limit() -> u32 {
    10
}

/// GET /api/blog - Published posts, newest first, paginated by `skip` then `limit`.
pub async fn list_posts(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<BlogListQuery>,
) -> ApiResult<Vec<BlogPostSummary>> {
    let posts = state
        .repo
        .list_published_posts(i64::from(query.skip), i64::from(query.limit))
        .await?;
    Ok(Json(localize_all(&posts, query.lang)?))
}

/// GET /api/blog/{slug} - A published post by its slug in the requested language.
pub async fn get_post(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    ApiQuery(query): ApiQuery<LangQuery>,
) -> ApiResult<BlogPostDetail> {
    let post = state
        .repo
        .find_published_post(query.lang, &slug)
        .await?
        .ok_or_else(|| AppError::NotFound("Blog post not found".to_string()))?;

    Ok(Json(post.detail(query.lang)?))
}

/// POST /api/blog - Create a post. Posts are drafts unless `published` is set.
pub async fn create_post(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreateBlogPostRequest>,
) -> ApiResult<CreatedResponse> {
    require_translations("title", &request.title)?;
    require_translations("excerpt", &request.excerpt)?;
    require_translations("content", &request.content)?;
    require_translations("slug", &request.slug)?;
    require_translations("category", &request.category)?;
    for lang in Lang::ALL {
        if let Some(slug) = request.slug.get(lang) {
            require_text(&format!("slug.{}", lang), slug)?;
        }
    }

    let post = BlogPost::from_request(request);
    state.repo.create_post(&post).await?;

    Ok(Json(CreatedResponse {
        message: "Blog post created successfully".to_string(),
        id: post.id,
    }))
}
