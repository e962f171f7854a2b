use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::limits::{FieldLimits, truncate_chars, validate_positive_i64};
use super::publication::Publication;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct Location {
    pub(crate) id: i64,
    pub(crate) name: String,
    #[serde(flatten)]
    pub(crate) publication: Publication,
}

impl Location {
    pub(crate) fn new(
        id: i64,
        name: impl Into<String>,
        publication: Publication,
        limits: &FieldLimits,
    ) -> Result<Self, DomainError> {
        validate_positive_i64("id", id)?;
        let name = limits.normalize_bounded("name", &name.into())?;

        Ok(Self {
            id,
            name,
            publication,
        })
    }

    pub(crate) fn representation(&self, limits: &FieldLimits) -> &str {
        truncate_chars(&self.name, limits.representation_length)
    }
}
