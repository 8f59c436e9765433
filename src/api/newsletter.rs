//! Newsletter subscription endpoints.

use axum::{extract::State, Json};

use super::{validate_email, ApiJson, ApiResult, MessageResponse, SUBSCRIBER_LIMIT};
use crate::errors::AppError;
use crate::models::{NewsletterRequest, SubscribeOutcome, Subscription};
use crate::AppState;

/// POST /api/newsletter - Subscribe, resubscribe, or acknowledge an existing subscription.
pub async fn subscribe(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<NewsletterRequest>,
) -> ApiResult<MessageResponse> {
    let email = validate_email(&request.email)?;

    let outcome = state.repo.subscribe(&email).await?;
    if outcome != SubscribeOutcome::AlreadySubscribed {
        tracing::info!(email = %email, outcome = ?outcome, "Newsletter subscription");
    }
    Ok(Json(MessageResponse::new(outcome.message())))
}

/// POST /api/newsletter/unsubscribe - Deactivate a subscription, keeping the row.
pub async fn unsubscribe(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<NewsletterRequest>,
) -> ApiResult<MessageResponse> {
    let email = validate_email(&request.email)?;

    if !state.repo.unsubscribe(&email).await? {
        return Err(AppError::NotFound(
            "No active newsletter subscription for this email".to_string(),
        ));
    }

    tracing::info!(email = %email, "Newsletter unsubscription");
    Ok(Json(MessageResponse::new(
        "Successfully unsubscribed from newsletter",
    )))
}

/// GET /api/newsletter - Active subscriptions.
pub async fn list_subscribers(State(state): State<AppState>) -> ApiResult<Vec<Subscription>> {
    let subscribers = state.repo.list_subscribers(SUBSCRIBER_LIMIT).await?;
    Ok(Json(subscribers))
}
