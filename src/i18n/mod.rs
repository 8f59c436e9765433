//! Bilingual content support.
//!
//! Stored documents keep every translatable value as a `{"en": ..., "no": ...}` pair.
//! Read endpoints never return those pairs; they project each document into a
//! single-language view through [`Localize`], which fails loudly when a translation
//! is missing instead of falling back to the other language.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Languages the site is published in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    En,
    No,
}

impl Lang {
    pub const ALL: [Lang; 2] = [Lang::En, Lang::No];

    pub fn as_str(&self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::No => "no",
        }
    }

    /// SQLite JSON path selecting this language's entry in a bilingual column.
    pub fn json_path(&self) -> &'static str {
        match self {
            Lang::En => "$.en",
            Lang::No => "$.no",
        }
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A value stored once per language.
///
/// Both keys are optional on the wire so that an incomplete document can still be
/// decoded; completeness is checked on write and enforced per language on read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bilingual<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub en: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no: Option<T>,
}

impl<T> Bilingual<T> {
    pub fn new(en: T, no: T) -> Self {
        Self {
            en: Some(en),
            no: Some(no),
        }
    }

    pub fn get(&self, lang: Lang) -> Option<&T> {
        match lang {
            Lang::En => self.en.as_ref(),
            Lang::No => self.no.as_ref(),
        }
    }

    /// First language without a value, if any.
    pub fn missing(&self) -> Option<Lang> {
        Lang::ALL.into_iter().find(|lang| self.get(*lang).is_none())
    }
}

impl<T: Clone> Bilingual<T> {
    /// Select the value for `lang`, reporting `field` when the translation is absent.
    pub fn project(&self, field: &'static str, lang: Lang) -> Result<T, ProjectionError> {
        self.get(lang)
            .cloned()
            .ok_or(ProjectionError { field, lang })
    }
}

/// A stored bilingual field lacks the requested language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectionError {
    pub field: &'static str,
    pub lang: Lang,
}

impl fmt::Display for ProjectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "stored field '{}' has no '{}' translation",
            self.field, self.lang
        )
    }
}

impl std::error::Error for ProjectionError {}

/// Produces the single-language view of a stored document.
///
/// Implementations must only read from `self`; the stored document is never altered.
pub trait Localize {
    type View: Serialize;

    fn localize(&self, lang: Lang) -> Result<Self::View, ProjectionError>;
}

/// Localize every document, stopping at the first missing translation.
pub fn localize_all<T: Localize>(
    items: &[T],
    lang: Lang,
) -> Result<Vec<T::View>, ProjectionError> {
    items.iter().map(|item| item.localize(lang)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone)]
    struct Card {
        slug: String,
        title: Bilingual<String>,
        tags: Bilingual<Vec<String>>,
    }

    #[derive(Debug, Serialize, PartialEq)]
    struct CardView {
        slug: String,
        title: String,
        tags: Vec<String>,
    }

    impl Localize for Card {
        type View = CardView;

        fn localize(&self, lang: Lang) -> Result<CardView, ProjectionError> {
            Ok(CardView {
                slug: self.slug.clone(),
                title: self.title.project("title", lang)?,
                tags: self.tags.project("tags", lang)?,
            })
        }
    }

    fn card() -> Card {
        Card {
            slug: "hello".to_string(),
            title: Bilingual::new("Engineer".to_string(), "Ingeniør".to_string()),
            tags: Bilingual::new(
                vec!["hiking".to_string()],
                vec!["friluftsliv".to_string(), "natur".to_string()],
            ),
        }
    }

    #[test]
    fn test_lang_parsing() {
        let en: Lang = serde_json::from_str("\"en\"").unwrap();
        let no: Lang = serde_json::from_str("\"no\"").unwrap();
        assert_eq!(en, Lang::En);
        assert_eq!(no, Lang::No);
        assert!(serde_json::from_str::<Lang>("\"de\"").is_err());
        assert!(serde_json::from_str::<Lang>("\"EN\"").is_err());
        assert_eq!(Lang::default(), Lang::En);
    }

    #[test]
    fn test_projection_selects_requested_language() {
        let card = card();
        let no = card.localize(Lang::No).unwrap();
        assert_eq!(no.title, "Ingeniør");
        assert_eq!(no.tags, vec!["friluftsliv", "natur"]);
        assert_eq!(no.slug, "hello");

        let en = card.localize(Lang::En).unwrap();
        assert_eq!(en.title, "Engineer");
        assert_eq!(en.tags, vec!["hiking"]);
    }

    #[test]
    fn test_projection_does_not_cross_contaminate() {
        let card = card();
        for (lang, other) in [(Lang::En, Lang::No), (Lang::No, Lang::En)] {
            let first = card.localize(lang).unwrap();
            let second = card.localize(other).unwrap();
            assert_ne!(first.title, second.title);
            assert_eq!(Some(&first.title), card.title.get(lang));
            assert_eq!(Some(&second.title), card.title.get(other));
        }
    }

    #[test]
    fn test_missing_translation_only_fails_that_language() {
        let mut card = card();
        card.title.no = None;

        assert!(card.localize(Lang::En).is_ok());
        let err = card.localize(Lang::No).unwrap_err();
        assert_eq!(
            err,
            ProjectionError {
                field: "title",
                lang: Lang::No
            }
        );
        assert_eq!(err.to_string(), "stored field 'title' has no 'no' translation");
    }

    #[test]
    fn test_missing_reports_first_absent_language() {
        let complete = Bilingual::new(1, 2);
        assert_eq!(complete.missing(), None);

        let only_no: Bilingual<i32> = serde_json::from_str(r#"{"no": 2}"#).unwrap();
        assert_eq!(only_no.missing(), Some(Lang::En));

        let empty: Bilingual<i32> = serde_json::from_str("{}").unwrap();
        assert_eq!(empty.missing(), Some(Lang::En));
    }

    #[test]
    fn test_localize_all_stops_on_first_fault() {
        let mut broken = card();
        broken.tags.en = None;
        let items = vec![card(), broken];

        assert_eq!(localize_all(&items, Lang::No).unwrap().len(), 2);
        let err = localize_all(&items, Lang::En).unwrap_err();
        assert_eq!(err.field, "tags");
    }

    #[test]
    fn test_bilingual_serializes_both_keys() {
        let value = serde_json::to_value(Bilingual::new("a", "b")).unwrap();
        assert_eq!(value, serde_json::json!({"en": "a", "no": "b"}));
    }
}
