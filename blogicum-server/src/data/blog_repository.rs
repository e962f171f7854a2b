use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::category::Category;
use crate::domain::error::DomainError;
use crate::domain::post::Post;
use crate::domain::visibility::VisiblePostsQuery;

/// Read access to the blog entity store.
#[async_trait]
pub(crate) trait BlogRepository: Send + Sync {
    /// Visible posts matching `query`, author/location/category attached,
    /// ordered by `pub_date` descending.
    async fn list_visible_posts(&self, query: &VisiblePostsQuery)
    -> Result<Vec<Post>, DomainError>;

    /// Category with the given slug, only when it is published.
    async fn get_published_category(&self, slug: &str) -> Result<Option<Category>, DomainError>;
}

#[async_trait]
impl<T: BlogRepository + ?Sized> BlogRepository for Arc<T> {
    async fn list_visible_posts(
        &self,
        query: &VisiblePostsQuery,
    ) -> Result<Vec<Post>, DomainError> {
        (**self).list_visible_posts(query).await
    }

    async fn get_published_category(&self, slug: &str) -> Result<Option<Category>, DomainError> {
        (**self).get_published_category(slug).await
    }
}

pub(crate) type DynBlogRepository = Arc<dyn BlogRepository>;
