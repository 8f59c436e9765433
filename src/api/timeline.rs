//! Timeline API endpoints.

use axum::{extract::State, Json};

use super::{
    require_text, require_translations, ApiJson, ApiQuery, ApiResult, CreatedResponse, LangQuery,
    LIST_LIMIT,
};
use crate::i18n::localize_all;
use crate::models::{CreateTimelineRequest, TimelineEntry, TimelineView};
use crate::AppState;

/// GET /api/timeline - Timeline entries, highest `order` first.
pub async fn list_timeline(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<LangQuery>,
) -> ApiResult<Vec<TimelineView>> {
    let entries = state.repo.list_timeline(LIST_LIMIT).await?;
    Ok(Json(localize_all(&entries, query.lang)?))
}

/// POST /api/timeline - Add a timeline entry. Duplicate `order` values are allowed.
pub async fn create_timeline_entry(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreateTimelineRequest>,
) -> ApiResult<CreatedResponse> {
    require_text("year", &request.year)?;
    require_translations("title", &request.title)?;
    require_translations("company", &request.company)?;
    require_translations("description", &request.description)?;

    let entry = TimelineEntry::from_request(request);
    state.repo.create_timeline_entry(&entry).await?;

    Ok(Json(CreatedResponse {
        message: "Timeline item created successfully".to_string(),
        id: entry.id,
    }))
}
