//! Project API endpoints.

use axum::{extract::State, Json};
use serde::Deserialize;

use super::{
    require_text, require_translations, ApiJson, ApiQuery, ApiResult, CreatedResponse, LIST_LIMIT,
};
use crate::i18n::{localize_all, Lang};
use crate::models::{CreateProjectRequest, Project, ProjectView};
use crate::AppState;

/// Query parameters for GET /api/projects.
#[derive(Debug, Deserialize)]
pub struct ProjectsQuery {
    #[serde(default)]
    pub lang: Lang,
    #[serde(default)]
    pub featured_only: bool,
}

/// GET /api/projects - Projects, lowest `order` first.
pub async fn list_projects(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<ProjectsQuery>,
) -> ApiResult<Vec<ProjectView>> {
    let projects = state
        .repo
        .list_projects(query.featured_only, LIST_LIMIT)
        .await?;
    Ok(Json(localize_all(&projects, query.lang)?))
}

/// POST /api/projects - Add a project.
pub async fn create_project(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreateProjectRequest>,
) -> ApiResult<CreatedResponse> {
    require_translations("title", &request.title)?;
    require_translations("description", &request.description)?;
    require_text("github", &request.github)?;

    let project = Project::from_request(request);
    state.repo.create_project(&project).await?;

    Ok(Json(CreatedResponse {
        message: "Project created successfully".to_string(),
        id: project.id,
    }))
}
