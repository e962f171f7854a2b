use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::data::blog_repository::BlogRepository;
use crate::domain::category::Category;
use crate::domain::error::DomainError;
use crate::domain::limits::{DEFAULT_REPRESENTATION_LENGTH, FieldLimits};
use crate::domain::location::Location;
use crate::domain::post::{Post, PostFields};
use crate::domain::publication::Publication;
use crate::domain::user::User;
use crate::domain::visibility::VisiblePostsQuery;

// Author, location and category are joined in so a page of posts costs one
// round trip. LEFT JOINs keep posts whose location or category was nulled.
const VISIBLE_POSTS_SELECT: &str = r#"
    SELECT
        p.id,
        p.title,
        p.text,
        p.pub_date,
        p.is_published,
        p.created_at,
        u.id AS author_id,
        u.username AS author_username,
        u.first_name AS author_first_name,
        u.last_name AS author_last_name,
        l.id AS location_id,
        l.name AS location_name,
        l.is_published AS location_is_published,
        l.created_at AS location_created_at,
        c.id AS category_id,
        c.title AS category_title,
        c.description AS category_description,
        c.slug AS category_slug,
        c.is_published AS category_is_published,
        c.created_at AS category_created_at
    FROM posts p
    JOIN users u ON u.id = p.author_id
    LEFT JOIN locations l ON l.id = p.location_id
    LEFT JOIN categories c ON c.id = p.category_id
    WHERE p.is_published = TRUE
      AND (p.category_id IS NULL OR c.is_published = TRUE)
      AND p.pub_date < "#;

// Stored titles and names are bounded by their column widths. The configured
// MAX_FIELD_LENGTH constrains new input and is not applied to existing rows.
const STORED_ROW_LIMITS: FieldLimits = FieldLimits {
    max_field_length: usize::MAX,
    representation_length: DEFAULT_REPRESENTATION_LENGTH,
};

#[derive(Debug, Clone)]
pub(crate) struct PostgresBlogRepository {
    pool: PgPool,
}

impl PostgresBlogRepository {
    pub(crate) fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct CategoryRow {
    id: i64,
    title: String,
    description: String,
    slug: String,
    is_published: bool,
    created_at: DateTime<Utc>,
}

#[derive(sqlx::FromRow)]
struct VisiblePostRow {
    id: i64,
    title: String,
    text: String,
    pub_date: DateTime<Utc>,
    is_published: bool,
    created_at: DateTime<Utc>,
    author_id: i64,
    author_username: String,
    author_first_name: String,
    author_last_name: String,
    location_id: Option<i64>,
    location_name: Option<String>,
    location_is_published: Option<bool>,
    location_created_at: Option<DateTime<Utc>>,
    category_id: Option<i64>,
    category_title: Option<String>,
    category_description: Option<String>,
    category_slug: Option<String>,
    category_is_published: Option<bool>,
    category_created_at: Option<DateTime<Utc>>,
}

#[async_trait]
impl BlogRepository for PostgresBlogRepository {
    async fn list_visible_posts(
        &self,
        query: &VisiblePostsQuery,
    ) -> Result<Vec<Post>, DomainError> {
        let mut builder = QueryBuilder::<Postgres>::new(VISIBLE_POSTS_SELECT);
        builder.push_bind(query.now);

        if let Some(post_id) = query.post_id {
            builder.push(" AND p.id = ").push_bind(post_id);
        }
        if let Some(slug) = &query.category_slug {
            builder.push(" AND c.slug = ").push_bind(slug.clone());
        }

        builder.push(" ORDER BY p.pub_date DESC, p.id DESC");

        if let Some(limit) = query.limit {
            builder.push(" LIMIT ").push_bind(i64::from(limit));
        }

        let rows = builder
            .build_query_as::<VisiblePostRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        rows.into_iter()
            .map(|row| map_row_to_post(row, &STORED_ROW_LIMITS))
            .collect()
    }

    async fn get_published_category(&self, slug: &str) -> Result<Option<Category>, DomainError> {
        let row = sqlx::query_as::<_, CategoryRow>(
            r#"
            SELECT
                id,
                title,
                description,
                slug,
                is_published,
                created_at
            FROM categories
            WHERE slug = $1 AND is_published = TRUE
            "#,
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        row.map(|row| map_row_to_category(row, &STORED_ROW_LIMITS))
            .transpose()
    }
}

fn map_row_to_category(row: CategoryRow, limits: &FieldLimits) -> Result<Category, DomainError> {
    Category::new(
        row.id,
        row.title,
        row.description,
        row.slug,
        Publication::new(row.is_published, row.created_at),
        limits,
    )
    .map_err(|err| DomainError::Unexpected(err.to_string()))
}

fn map_row_to_post(row: VisiblePostRow, limits: &FieldLimits) -> Result<Post, DomainError> {
    let author = User::new(
        row.author_id,
        row.author_username,
        row.author_first_name,
        row.author_last_name,
    )
    .map_err(|err| DomainError::Unexpected(err.to_string()))?;

    let location = match (
        row.location_id,
        row.location_name,
        row.location_is_published,
        row.location_created_at,
    ) {
        (Some(id), Some(name), Some(is_published), Some(created_at)) => Some(
            Location::new(id, name, Publication::new(is_published, created_at), limits)
                .map_err(|err| DomainError::Unexpected(err.to_string()))?,
        ),
        _ => None,
    };

    let category = match (
        row.category_id,
        row.category_title,
        row.category_description,
        row.category_slug,
        row.category_is_published,
        row.category_created_at,
    ) {
        (
            Some(id),
            Some(title),
            Some(description),
            Some(slug),
            Some(is_published),
            Some(created_at),
        ) => Some(map_row_to_category(
            CategoryRow {
                id,
                title,
                description,
                slug,
                is_published,
                created_at,
            },
            limits,
        )?),
        _ => None,
    };

    Post::new(
        PostFields {
            id: row.id,
            title: row.title,
            text: row.text,
            pub_date: row.pub_date,
            publication: Publication::new(row.is_published, row.created_at),
        },
        author,
        location,
        category,
        limits,
    )
    .map_err(|err| DomainError::Unexpected(err.to_string()))
}

fn map_db_error(err: sqlx::Error) -> DomainError {
    DomainError::Unexpected(err.to_string())
}
