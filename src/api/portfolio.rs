//! Portfolio API endpoints.

use axum::{extract::State, Json};

use super::{require_text, require_translations, ApiJson, ApiQuery, ApiResult, LangQuery, MessageResponse};
use crate::errors::AppError;
use crate::i18n::Localize;
use crate::models::{PortfolioView, SavePortfolioRequest};
use crate::AppState;

/// GET /api/portfolio - The portfolio in one language.
pub async fn get_portfolio(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<LangQuery>,
) -> ApiResult<PortfolioView> {
    let portfolio = state
        .repo
        .get_portfolio()
        .await?
        .ok_or_else(|| AppError::NotFound("Portfolio not found".to_string()))?;

    Ok(Json(portfolio.localize(query.lang)?))
}

/// POST /api/portfolio - Create the portfolio, or overwrite it if it exists.
pub async fn save_portfolio(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<SavePortfolioRequest>,
) -> ApiResult<MessageResponse> {
    validate(&request)?;

    let outcome = state.repo.save_portfolio(&request).await?;
    tracing::info!(outcome = ?outcome, "Portfolio saved");
    Ok(Json(MessageResponse::new(outcome.message())))
}

fn validate(request: &SavePortfolioRequest) -> Result<(), AppError> {
    require_text("personal_info.name", &request.personal_info.name)?;
    require_translations("personal_info.title", &request.personal_info.title)?;
    require_translations("home", &request.home)?;
    require_translations("about.education", &request.about.education)?;
    require_translations("about.skills", &request.about.skills)?;
    require_translations("about.languages", &request.about.languages)?;
    require_translations("about.interests", &request.about.interests)?;
    Ok(())
}
