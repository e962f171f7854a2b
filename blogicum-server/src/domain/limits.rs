use super::error::DomainError;

pub(crate) const DEFAULT_MAX_FIELD_LENGTH: usize = 256;
pub(crate) const DEFAULT_REPRESENTATION_LENGTH: usize = 15;
pub(crate) const MAX_SLUG_LENGTH: usize = 64;

/// Length bounds shared by every entity.
///
/// `max_field_length` bounds titles and names. `representation_length` only
/// affects the short textual form used in logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldLimits {
    pub(crate) max_field_length: usize,
    pub(crate) representation_length: usize,
}

impl Default for FieldLimits {
    fn default() -> Self {
        Self {
            max_field_length: DEFAULT_MAX_FIELD_LENGTH,
            representation_length: DEFAULT_REPRESENTATION_LENGTH,
        }
    }
}

impl FieldLimits {
    pub(crate) fn normalize_bounded(
        &self,
        field: &'static str,
        value: &str,
    ) -> Result<String, DomainError> {
        let value = value.trim();
        if value.is_empty() || value.chars().count() > self.max_field_length {
            return Err(DomainError::Validation {
                field,
                message: "must be non-empty and within max field length",
            });
        }
        Ok(value.to_string())
    }
}

pub(crate) fn validate_positive_i64(field: &'static str, value: i64) -> Result<(), DomainError> {
    if value <= 0 {
        return Err(DomainError::Validation {
            field,
            message: "must be > 0",
        });
    }
    Ok(())
}

/// Slugs are URL-safe: ASCII letters, digits, hyphen and underscore.
pub(crate) fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug.len() <= MAX_SLUG_LENGTH
        && slug
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}

pub(crate) fn normalize_slug(slug: &str) -> Result<String, DomainError> {
    let slug = slug.trim();
    if !is_valid_slug(slug) {
        return Err(DomainError::Validation {
            field: "slug",
            message: "must be 1..64 chars of [A-Za-z0-9_-]",
        });
    }
    Ok(slug.to_string())
}

pub(crate) fn truncate_chars(value: &str, max_chars: usize) -> &str {
    match value.char_indices().nth(max_chars) {
        Some((idx, _)) => &value[..idx],
        None => value,
    }
}

#[cfg(test)]
mod tests {
    use super::{FieldLimits, is_valid_slug, normalize_slug, truncate_chars};
    use crate::domain::error::DomainError;

    #[test]
    fn normalize_bounded_trims_and_checks_length() {
        let limits = FieldLimits {
            max_field_length: 5,
            representation_length: 3,
        };

        assert_eq!(
            limits.normalize_bounded("title", "  abc  ").expect("must be valid"),
            "abc"
        );
        assert!(limits.normalize_bounded("title", "   ").is_err());

        let err = limits
            .normalize_bounded("title", "abcdef")
            .expect_err("too long");
        assert!(matches!(err, DomainError::Validation { field: "title", .. }));
    }

    #[test]
    fn max_field_length_counts_chars_not_bytes() {
        let limits = FieldLimits {
            max_field_length: 6,
            representation_length: 3,
        };
        assert!(limits.normalize_bounded("name", "Москва").is_ok());
    }

    #[test]
    fn slug_rules_are_applied() {
        assert!(is_valid_slug("travel-notes_2024"));
        assert!(!is_valid_slug(""));
        assert!(!is_valid_slug("with space"));
        assert!(!is_valid_slug("путешествия"));
        assert!(!is_valid_slug(&"a".repeat(65)));
        assert_eq!(normalize_slug("  news ").expect("must be valid"), "news");
    }

    #[test]
    fn truncate_chars_respects_char_boundaries() {
        assert_eq!(truncate_chars("Путешествие", 4), "Путе");
        assert_eq!(truncate_chars("short", 15), "short");
        assert_eq!(truncate_chars("", 3), "");
    }
}
