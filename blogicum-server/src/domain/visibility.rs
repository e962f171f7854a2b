//! Publication visibility rule.
//!
//! A post is visible to readers when it is published, its `pub_date` is
//! strictly before the evaluation instant, and its category, if any, is
//! published. A post without a category stays eligible.
//!
//! The Postgres repository evaluates the same rule in SQL. The in-process
//! form below backs the in-memory store and the tests.

use chrono::{DateTime, Utc};

#[cfg(test)]
use super::post::Post;

#[cfg(test)]
pub(crate) fn is_visible_at(post: &Post, now: DateTime<Utc>) -> bool {
    post.is_published()
        && post.pub_date < now
        && post
            .category
            .as_ref()
            .is_none_or(|category| category.is_published())
}

/// Read request over the visible posts, ordered by `pub_date` descending.
///
/// Every query carries the instant it is evaluated at; callers take it at
/// call time so scheduled posts appear as soon as their date passes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct VisiblePostsQuery {
    pub(crate) now: DateTime<Utc>,
    pub(crate) post_id: Option<i64>,
    pub(crate) category_slug: Option<String>,
    pub(crate) limit: Option<u32>,
}

impl VisiblePostsQuery {
    pub(crate) fn at(now: DateTime<Utc>) -> Self {
        Self {
            now,
            post_id: None,
            category_slug: None,
            limit: None,
        }
    }

    pub(crate) fn with_id(mut self, post_id: i64) -> Self {
        self.post_id = Some(post_id);
        self
    }

    pub(crate) fn in_category(mut self, slug: impl Into<String>) -> Self {
        self.category_slug = Some(slug.into());
        self
    }

    pub(crate) fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Visibility plus the optional id and category constraints.
    #[cfg(test)]
    pub(crate) fn matches(&self, post: &Post) -> bool {
        if !is_visible_at(post, self.now) {
            return false;
        }
        if let Some(id) = self.post_id
            && post.id != id
        {
            return false;
        }
        if let Some(slug) = &self.category_slug {
            return post
                .category
                .as_ref()
                .is_some_and(|category| &category.slug == slug);
        }
        true
    }
}
