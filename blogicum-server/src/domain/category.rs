use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::limits::{FieldLimits, normalize_slug, truncate_chars, validate_positive_i64};
use super::publication::Publication;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct Category {
    pub(crate) id: i64,
    pub(crate) title: String,
    pub(crate) description: String,
    pub(crate) slug: String,
    #[serde(flatten)]
    pub(crate) publication: Publication,
}

impl Category {
    pub(crate) fn new(
        id: i64,
        title: impl Into<String>,
        description: impl Into<String>,
        slug: impl Into<String>,
        publication: Publication,
        limits: &FieldLimits,
    ) -> Result<Self, DomainError> {
        validate_positive_i64("id", id)?;
        let title = limits.normalize_bounded("title", &title.into())?;
        let slug = normalize_slug(&slug.into())?;

        Ok(Self {
            id,
            title,
            description: description.into(),
            slug,
            publication,
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
