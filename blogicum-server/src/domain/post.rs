use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::category::Category;
use super::error::DomainError;
use super::limits::{FieldLimits, truncate_chars, validate_positive_i64};
use super::location::Location;
use super::publication::Publication;
use super::user::User;

/// A post together with its prefetched author, location and category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct Post {
    pub(crate) id: i64,
    pub(crate) title: String,
    pub(crate) text: String,
    pub(crate) pub_date: DateTime<Utc>,
    pub(crate) author: User,
    pub(crate) location: Option<Location>,
    pub(crate) category: Option<Category>,
    #[serde(flatten)]
    pub(crate) publication: Publication,
}

/// Scalar post columns, before relations are attached.
#[derive(Debug, Clone)]
pub(crate) struct PostFields {
    pub(crate) id: i64,
    pub(crate) title: String,
    pub(crate) text: String,
    pub(crate) pub_date: DateTime<Utc>,
    pub(crate) publication: Publication,
}

impl Post {
    pub(crate) fn new(
        fields: PostFields,
        author: User,
        location: Option<Location>,
        category: Option<Category>,
        limits: &FieldLimits,
    ) -> Result<Self, DomainError> {
        validate_positive_i64("id", fields.id)?;
        let title = limits.normalize_bounded("title", &fields.title)?;
        let text = normalize_text(&fields.text)?;

        Ok(Self {
            id: fields.id,
            title,
            text,
            pub_date: fields.pub_date,
            author,
            location,
            category,
            publication: fields.publication,
        })
    }

    #[cfg(test)]
    pub(crate) fn is_published(&self) -> bool {
        self.publication.is_published
    }

    pub(crate) fn representation(&self, limits: &FieldLimits) -> &str {
        truncate_chars(&self.title, limits.representation_length)
    }
}

fn normalize_text(text: &str) -> Result<String, DomainError> {
    if text.trim().is_empty() {
        return Err(DomainError::Validation {
            field: "text",
            message: "must not be empty",
        });
    }
    Ok(text.to_string())
}
