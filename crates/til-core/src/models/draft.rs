//! Submission form fields and their validation

use serde::Serialize;
use thiserror::Error;
use url::Url;

use super::Category;

/// Longest fact text accepted by the form, in characters.
pub const MAX_FACT_LENGTH: usize = 200;

/// Payload of an insert: the only columns a client may set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewFact {
    pub text: String,
    pub source: String,
    pub category: Category,
}

/// Why a draft was not submitted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("fact text is empty")]
    EmptyText,
    #[error("fact text is {0} characters long (max 200)")]
    TextTooLong(usize),
    #[error("source is not an http(s) URL")]
    InvalidSource,
    #[error("no category chosen")]
    MissingCategory,
    #[error("unknown category '{0}'")]
    UnknownCategory(String),
}

/// Raw values of the submission form, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FactDraft {
    pub text: String,
    pub source: String,
    pub category: String,
}

impl FactDraft {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        source: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            source: source.into(),
            category: category.into(),
        }
    }

    #[must_use]
    pub fn text_length(&self) -> usize {
        self.text.chars().count()
    }

    /// Characters left before the length limit; negative once exceeded.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub fn remaining_chars(&self) -> i64 {
        MAX_FACT_LENGTH as i64 - self.text_length() as i64
    }

    /// Check every field and build the insert payload.
    pub fn validate(&self) -> Result<NewFact, DraftError> {
        if self.text.is_empty() {
            return Err(DraftError::EmptyText);
        }
        let length = self.text_length();
        if length > MAX_FACT_LENGTH {
            return Err(DraftError::TextTooLong(length));
        }
        if !is_valid_http_url(&self.source) {
            return Err(DraftError::InvalidSource);
        }
        if self.category.is_empty() {
            return Err(DraftError::MissingCategory);
        }
        let category = self
            .category
            .parse::<Category>()
            .map_err(|_| DraftError::UnknownCategory(self.category.clone()))?;

        Ok(NewFact {
            text: self.text.clone(),
            source: self.source.clone(),
            category,
        })
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.source.clear();
        self.category.clear();
    }
}

/// Whether `value` parses as an absolute URL with an `http` or `https` scheme.
#[must_use]
pub fn is_valid_http_url(value: &str) -> bool {
    Url::parse(value).is_ok_and(|url| matches!(url.scheme(), "http" | "https"))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn valid_draft() -> FactDraft {
        FactDraft::new("Water boils at 100C", "https://example.com", "science")
    }

    #[test]
    fn valid_draft_builds_payload() {
        let payload = valid_draft().validate().unwrap();
        assert_eq!(
            payload,
            NewFact {
                text: "Water boils at 100C".to_string(),
                source: "https://example.com".to_string(),
                category: Category::Science,
            }
        );
    }

    #[test]
    fn payload_serializes_exactly_three_fields() {
        let payload = valid_draft().validate().unwrap();
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "text": "Water boils at 100C",
                "source": "https://example.com",
                "category": "science",
            })
        );
    }

    #[test]
    fn text_limit_counts_characters() {
        let mut draft = valid_draft();
        draft.text = "é".repeat(MAX_FACT_LENGTH);
        assert!(draft.is_valid());
        assert_eq!(draft.remaining_chars(), 0);

        draft.text.push('!');
        assert_eq!(draft.validate(), Err(DraftError::TextTooLong(201)));
        assert_eq!(draft.remaining_chars(), -1);
    }

    #[test]
    fn emoji_counts_as_one_character() {
        let mut draft = valid_draft();
        draft.text = "💡".repeat(MAX_FACT_LENGTH);
        assert_eq!(draft.text_length(), MAX_FACT_LENGTH);
        assert!(draft.is_valid());
    }

    #[test]
    fn each_violated_constraint_is_rejected() {
        let cases = [
            (FactDraft::new("", "https://example.com", "science"), DraftError::EmptyText),
            (FactDraft::new("Fact", "example.com", "science"), DraftError::InvalidSource),
            (FactDraft::new("Fact", "ftp://example.com", "science"), DraftError::InvalidSource),
            (FactDraft::new("Fact", "https://example.com", ""), DraftError::MissingCategory),
            (
                FactDraft::new("Fact", "https://example.com", "sports"),
                DraftError::UnknownCategory("sports".to_string()),
            ),
        ];

        for (draft, expected) in cases {
            assert_eq!(draft.validate(), Err(expected));
        }
    }

    #[test]
    fn http_url_check_requires_http_scheme() {
        assert!(is_valid_http_url("http://localhost:3000/path"));
        assert!(is_valid_http_url("https://example.com"));
        assert!(!is_valid_http_url("mailto:someone@example.com"));
        assert!(!is_valid_http_url("not a url"));
        assert!(!is_valid_http_url(""));
    }

    #[test]
    fn clear_resets_every_field() {
        let mut draft = valid_draft();
        draft.clear();
        assert_eq!(draft, FactDraft::default());
    }
}
