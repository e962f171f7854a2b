use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Publication state shared by categories, locations and posts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct Publication {
    pub(crate) is_published: bool,
    pub(crate) created_at: DateTime<Utc>,
}

impl Publication {
    pub(crate) fn new(is_published: bool, created_at: DateTime<Utc>) -> Self {
        Self {
            is_published,
            created_at,
        }
    }

    #[cfg(test)]
    pub(crate) fn published_at(created_at: DateTime<Utc>) -> Self {
        Self::new(true, created_at)
    }
}
