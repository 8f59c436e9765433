//! Contact form endpoints.

use axum::{extract::State, Json};

use super::{validate_email, ApiJson, ApiResult, MessageResponse, LIST_LIMIT};
use crate::models::{Contact, CreateContactRequest};
use crate::AppState;

const THANK_YOU: &str = "Thank you for your message. I'll get back to you soon!";

/// POST /api/contact - Store a contact form submission.
pub async fn submit_contact(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreateContactRequest>,
) -> ApiResult<MessageResponse> {
    let email = validate_email(&request.email)?;

    let contact = Contact::new(request, email);
    state.repo.create_contact(&contact).await?;

    tracing::info!(email = %contact.email, id = %contact.id, "New contact form submission");
    Ok(Json(MessageResponse::new(THANK_YOU)))
}

/// GET /api/contacts - All submissions, newest first.
///
/// Intended for the site owner; like the other write/admin routes it is not
/// authenticated.
pub async fn list_contacts(State(state): State<AppState>) -> ApiResult<Vec<Contact>> {
    let contacts = state.repo.list_contacts(LIST_LIMIT).await?;
    Ok(Json(contacts))
}
