//! REST API module.
//!
//! Handlers for every resource plus the extractors and checks they share. Success bodies
//! are the bare payloads the site front end reads; failures go through [`AppError`].

mod blog;
mod contact;
mod newsletter;
mod portfolio;
mod projects;
mod timeline;

pub use blog::*;
pub use contact::*;
pub use newsletter::*;
pub use portfolio::*;
pub use projects::*;
pub use timeline::*;

use axum::{
    extract::{rejection::JsonRejection, FromRequest, FromRequestParts, Query, Request},
    http::request::Parts,
    Json,
};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::errors::AppError;
use crate::i18n::{Bilingual, Lang};

/// Cap on timeline, project and contact listings.
pub const LIST_LIMIT: i64 = 100;
/// Cap on the subscriber listing.
pub const SUBSCRIBER_LIMIT: i64 = 1000;

/// Response type for every handler.
pub type ApiResult<T> = Result<Json<T>, AppError>;

/// JSON body extractor that reports malformed or incomplete bodies as validation errors.
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection: JsonRejection| AppError::Validation(rejection.body_text()))?;
        Ok(Self(value))
    }
}

/// Query string extractor that reports unknown languages and bad numbers as validation errors.
pub struct ApiQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for ApiQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::try_from_uri(&parts.uri)
            .map_err(|rejection| AppError::Validation(rejection.body_text()))?;
        Ok(Self(value))
    }
}

/// `?lang=en|no`, defaulting to English.
#[derive(Debug, Default, Deserialize)]
pub struct LangQuery {
    #[serde(default)]
    pub lang: Lang,
}

/// Plain acknowledgement.
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Acknowledgement for a newly created document.
#[derive(Debug, Serialize, Deserialize)]
pub struct CreatedResponse {
    pub message: String,
    pub id: String,
}

// ============================================================================
// Validation
// ============================================================================

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        concat!(
            // dot-atom local part
            r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*",
            r"@(?:[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?\.)+",
            // top-level label must not be numeric
            r"[A-Za-z](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?$",
        ),
    )
    .expect("email pattern is valid")
});

const MAX_EMAIL_LEN: usize = 254;

/// Check an email address and return it trimmed.
pub fn validate_email(email: &str) -> Result<String, AppError> {
    let email = email.trim();
    if email.len() > MAX_EMAIL_LEN || !EMAIL_REGEX.is_match(email) {
        return Err(AppError::Validation(
            "value is not a valid email address".to_string(),
        ));
    }
    Ok(email.to_string())
}

/// Reject a bilingual field that lacks either translation.
pub fn require_translations<T>(field: &str, value: &Bilingual<T>) -> Result<(), AppError> {
    match value.missing() {
        Some(lang) => Err(AppError::Validation(format!(
            "{} is missing the '{}' translation",
            field, lang
        ))),
        None => Ok(()),
    }
}

/// Reject an empty or whitespace-only string.
pub fn require_text(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{} is required", field)));
    }
    Ok(())
}
