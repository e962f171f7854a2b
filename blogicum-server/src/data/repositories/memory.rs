use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::data::blog_repository::BlogRepository;
use crate::domain::category::Category;
use crate::domain::error::DomainError;
use crate::domain::limits::FieldLimits;
use crate::domain::location::Location;
use crate::domain::post::{Post, PostFields};
use crate::domain::publication::Publication;
use crate::domain::user::User;
use crate::domain::visibility::VisiblePostsQuery;

/// Store kept in memory for tests.
///
/// Deleting a category or location nulls the post references, deleting a
/// user removes their posts; the same policies the Postgres schema enforces.
#[derive(Clone, Default)]
pub(crate) struct InMemoryBlogRepository {
    inner: Arc<Mutex<Inner>>,
    limits: FieldLimits,
}

#[derive(Default)]
struct Inner {
    next_id: i64,
    users: BTreeMap<i64, User>,
    categories: BTreeMap<i64, Category>,
    locations: BTreeMap<i64, Location>,
    posts: BTreeMap<i64, PostRecord>,
}

impl Inner {
    fn allocate_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

#[derive(Clone)]
struct PostRecord {
    fields: PostFields,
    author_id: i64,
    location_id: Option<i64>,
    category_id: Option<i64>,
}

#[derive(Debug, Clone)]
pub(crate) struct NewPostRecord {
    pub(crate) title: String,
    pub(crate) pub_date: DateTime<Utc>,
    pub(crate) is_published: bool,
    pub(crate) author_id: i64,
    pub(crate) location_id: Option<i64>,
    pub(crate) category_id: Option<i64>,
}

impl NewPostRecord {
    pub(crate) fn published(title: &str, author_id: i64, pub_date: DateTime<Utc>) -> Self {
        Self {
            title: title.to_string(),
            pub_date,
            is_published: true,
            author_id,
            location_id: None,
            category_id: None,
        }
    }

    pub(crate) fn in_category(mut self, category_id: i64) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub(crate) fn at_location(mut self, location_id: i64) -> Self {
        self.location_id = Some(location_id);
        self
    }

    pub(crate) fn unpublished(mut self) -> Self {
        self.is_published = false;
        self
    }
}

impl InMemoryBlogRepository {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().expect("in-memory store mutex poisoned")
    }

    pub(crate) fn add_user(&self, username: &str) -> User {
        let mut inner = self.lock();
        let id = inner.allocate_id();
        let user = User::new(id, username, "", "").expect("user must be valid");
        inner.users.insert(id, user.clone());
        user
    }

    pub(crate) fn add_category(&self, title: &str, slug: &str, is_published: bool) -> Category {
        let mut inner = self.lock();
        assert!(
            inner.categories.values().all(|category| category.slug != slug),
            "category slug must be unique"
        );
        let id = inner.allocate_id();
        let category = Category::new(
            id,
            title,
            format!("{title} description"),
            slug,
            Publication::new(is_published, Utc::now()),
            &self.limits,
        )
        .expect("category must be valid");
        inner.categories.insert(id, category.clone());
        category
    }

    pub(crate) fn add_location(&self, name: &str, is_published: bool) -> Location {
        let mut inner = self.lock();
        let id = inner.allocate_id();
        let location = Location::new(
            id,
            name,
            Publication::new(is_published, Utc::now()),
            &self.limits,
        )
        .expect("location must be valid");
        inner.locations.insert(id, location.clone());
        location
    }

    pub(crate) fn add_post(&self, record: NewPostRecord) -> i64 {
        let mut inner = self.lock();
        assert!(inner.users.contains_key(&record.author_id), "unknown author");
        let id = inner.allocate_id();
        inner.posts.insert(
            id,
            PostRecord {
                fields: PostFields {
                    id,
                    title: record.title,
                    text: "Post text".to_string(),
                    pub_date: record.pub_date,
                    publication: Publication::new(record.is_published, Utc::now()),
                },
                author_id: record.author_id,
                location_id: record.location_id,
                category_id: record.category_id,
            },
        );
        id
    }

    pub(crate) fn set_pub_date(&self, post_id: i64, pub_date: DateTime<Utc>) {
        let mut inner = self.lock();
        if let Some(record) = inner.posts.get_mut(&post_id) {
            record.fields.pub_date = pub_date;
        }
    }

    pub(crate) fn set_category_published(&self, category_id: i64, is_published: bool) {
        let mut inner = self.lock();
        if let Some(category) = inner.categories.get_mut(&category_id) {
            category.publication.is_published = is_published;
        }
    }

    pub(crate) fn delete_category(&self, category_id: i64) {
        let mut inner = self.lock();
        inner.categories.remove(&category_id);
        for record in inner.posts.values_mut() {
            if record.category_id == Some(category_id) {
                record.category_id = None;
            }
        }
    }

    pub(crate) fn delete_location(&self, location_id: i64) {
        let mut inner = self.lock();
        inner.locations.remove(&location_id);
        for record in inner.posts.values_mut() {
            if record.location_id == Some(location_id) {
                record.location_id = None;
            }
        }
    }

    pub(crate) fn delete_user(&self, user_id: i64) {
        let mut inner = self.lock();
        inner.users.remove(&user_id);
        inner.posts.retain(|_, record| record.author_id != user_id);
    }

    pub(crate) fn post_count(&self) -> usize {
        self.lock().posts.len()
    }
}

fn join_post(
    inner: &Inner,
    record: &PostRecord,
    limits: &FieldLimits,
) -> Result<Post, DomainError> {
    let author = inner
        .users
        .get(&record.author_id)
        .cloned()
        .ok_or_else(|| DomainError::Unexpected(format!("dangling author {}", record.author_id)))?;
    let location = record
        .location_id
        .and_then(|id| inner.locations.get(&id).cloned());
    let category = record
        .category_id
        .and_then(|id| inner.categories.get(&id).cloned());

    Post::new(record.fields.clone(), author, location, category, limits)
}

#[async_trait]
impl BlogRepository for InMemoryBlogRepository {
    async fn list_visible_posts(
        &self,
        query: &VisiblePostsQuery,
    ) -> Result<Vec<Post>, DomainError> {
        let inner = self.lock();
        let mut posts = Vec::new();
        for record in inner.posts.values() {
            let post = join_post(&inner, record, &self.limits)?;
            if query.matches(&post) {
                posts.push(post);
            }
        }

        posts.sort_by(|a, b| b.pub_date.cmp(&a.pub_date).then(b.id.cmp(&a.id)));
        if let Some(limit) = query.limit {
            posts.truncate(limit as usize);
        }
        Ok(posts)
    }

    async fn get_published_category(&self, slug: &str) -> Result<Option<Category>, DomainError> {
        Ok(self
            .lock()
            .categories
            .values()
            .find(|category| category.slug == slug && category.is_published())
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};

    use super::{InMemoryBlogRepository, NewPostRecord};
    use crate::data::blog_repository::BlogRepository;
    use crate::domain::visibility::VisiblePostsQuery;

    #[tokio::test]
    async fn deleting_category_nullifies_post_reference() {
        let repo = InMemoryBlogRepository::new();
        let author = repo.add_user("author");
        let news = repo.add_category("News", "news", true);
        let post_id = repo.add_post(
            NewPostRecord::published("post", author.id, Utc::now() - Duration::hours(1))
                .in_category(news.id),
        );

        repo.delete_category(news.id);

        let posts = repo
            .list_visible_posts(&VisiblePostsQuery::at(Utc::now()).with_id(post_id))
            .await
            .expect("query must succeed");
        assert_eq!(posts.len(), 1);
        assert!(posts[0].category.is_none());
        assert_eq!(repo.post_count(), 1);
    }

    #[tokio::test]
    async fn deleting_location_nullifies_post_reference() {
        let repo = InMemoryBlogRepository::new();
        let author = repo.add_user("author");
        let place = repo.add_location("Moscow", true);
        let post_id = repo.add_post(
            NewPostRecord::published("post", author.id, Utc::now() - Duration::hours(1))
                .at_location(place.id),
        );

        let before = repo
            .list_visible_posts(&VisiblePostsQuery::at(Utc::now()).with_id(post_id))
            .await
            .expect("query must succeed");
        assert_eq!(before[0].location.as_ref().map(|l| l.name.as_str()), Some("Moscow"));

        repo.delete_location(place.id);

        let after = repo
            .list_visible_posts(&VisiblePostsQuery::at(Utc::now()).with_id(post_id))
            .await
            .expect("query must succeed");
        assert!(after[0].location.is_none());
    }

    #[tokio::test]
    async fn deleting_user_cascades_to_posts() {
        let repo = InMemoryBlogRepository::new();
        let author = repo.add_user("author");
        let other = repo.add_user("other");
        repo.add_post(NewPostRecord::published("a", author.id, Utc::now() - Duration::hours(1)));
        repo.add_post(NewPostRecord::published("b", other.id, Utc::now() - Duration::hours(1)));

        repo.delete_user(author.id);

        assert_eq!(repo.post_count(), 1);
        let posts = repo
            .list_visible_posts(&VisiblePostsQuery::at(Utc::now()))
            .await
            .expect("query must succeed");
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].author.username, "other");
    }

    #[tokio::test]
    async fn unpublished_category_is_not_returned_by_slug() {
        let repo = InMemoryBlogRepository::new();
        repo.add_category("Drafts", "drafts", false);

        let found = repo
            .get_published_category("drafts")
            .await
            .expect("query must succeed");
        assert!(found.is_none());
    }
}
