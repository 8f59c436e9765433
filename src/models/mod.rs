//! Data models for the portfolio API.
//!
//! Each entity has a stored form (bilingual fields as [`Bilingual`](crate::i18n::Bilingual)),
//! a request body, and where it is publicly readable a single-language view.

mod blog;
mod contact;
mod newsletter;
mod portfolio;
mod project;
mod timeline;

pub use blog::*;
pub use contact::*;
pub use newsletter::*;
pub use portfolio::*;
pub use project::*;
pub use timeline::*;
