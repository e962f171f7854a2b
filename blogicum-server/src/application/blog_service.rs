use chrono::Utc;
use tracing::debug;

use crate::data::blog_repository::BlogRepository;
use crate::domain::category::Category;
use crate::domain::error::DomainError;
use crate::domain::limits::FieldLimits;
use crate::domain::post::Post;
use crate::domain::visibility::VisiblePostsQuery;

#[derive(Debug, Clone)]
pub(crate) struct CategoryPosts {
    pub(crate) category: Category,
    pub(crate) posts: Vec<Post>,
}

/// Read operations behind the public pages.
///
/// Hidden content is reported as `NotFound`, the same as missing content.
pub(crate) struct BlogService<R: BlogRepository> {
    repo: R,
    limits: FieldLimits,
}

impl<R: BlogRepository> BlogService<R> {
    pub(crate) fn new(repo: R, limits: FieldLimits) -> Self {
        Self { repo, limits }
    }

    pub(crate) async fn list_recent_posts(&self, limit: u32) -> Result<Vec<Post>, DomainError> {
        let query = VisiblePostsQuery::at(Utc::now()).limit(limit);
        let posts = self.repo.list_visible_posts(&query).await?;
        debug!(limit, found = posts.len(), "listed recent posts");
        Ok(posts)
    }

    pub(crate) async fn get_post(&self, id: i64) -> Result<Post, DomainError> {
        let query = VisiblePostsQuery::at(Utc::now()).with_id(id).limit(1);
        let post = self
            .repo
            .list_visible_posts(&query)
            .await?
            .into_iter()
            .next()
            .ok_or(DomainError::NotFound(format!("post id: {id}")))?;

        debug!(
            post_id = id,
            post = post.representation(&self.limits),
            location = post
                .location
                .as_ref()
                .map(|location| location.representation(&self.limits)),
            "fetched post"
        );
        Ok(post)
    }

    pub(crate) async fn list_category_posts(
        &self,
        slug: &str,
    ) -> Result<CategoryPosts, DomainError> {
        let category = self
            .repo
            .get_published_category(slug)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("category: {slug}")))?;

        // Full visibility is re-applied here even though the category is
        // already known to be published.
        let query = VisiblePostsQuery::at(Utc::now()).in_category(slug);
        let posts = self.repo.list_visible_posts(&query).await?;

        debug!(
            category = category.representation(&self.limits),
            found = posts.len(),
            "listed category posts"
        );
        Ok(CategoryPosts { category, posts })
    }
}
