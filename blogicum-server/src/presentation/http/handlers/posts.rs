use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::application::blog_service::CategoryPosts;
use crate::domain::category::Category;
use crate::domain::limits::is_valid_slug;
use crate::domain::location::Location;
use crate::domain::post::Post;
use crate::domain::user::User;
use crate::presentation::AppState;
use crate::presentation::http::app_error::{AppError, AppResult};

#[derive(Debug, Deserialize, Validate, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub(crate) struct RecentPostsQuery {
    /// Number of posts to return, defaults to the configured page size.
    #[validate(range(min = 1, max = 100))]
    pub(crate) limit: Option<u32>,
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct AuthorDto {
    pub(crate) id: i64,
    pub(crate) username: String,
    pub(crate) display_name: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct LocationDto {
    pub(crate) id: i64,
    pub(crate) name: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct CategoryDto {
    pub(crate) id: i64,
    pub(crate) title: String,
    pub(crate) description: String,
    pub(crate) slug: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct PostDto {
    pub(crate) id: i64,
    pub(crate) title: String,
    pub(crate) text: String,
    pub(crate) pub_date: DateTime<Utc>,
    pub(crate) author: AuthorDto,
    pub(crate) location: Option<LocationDto>,
    pub(crate) category: Option<CategoryDto>,
    pub(crate) created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct CategoryPostsDto {
    pub(crate) category: CategoryDto,
    pub(crate) posts: Vec<PostDto>,
}

impl From<User> for AuthorDto {
    fn from(user: User) -> Self {
        Self {
            display_name: user.display_name(),
            id: user.id,
            username: user.username,
        }
    }
}

impl From<Location> for LocationDto {
    fn from(location: Location) -> Self {
        Self {
            id: location.id,
            name: location.name,
        }
    }
}

impl From<Category> for CategoryDto {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            title: category.title,
            description: category.description,
            slug: category.slug,
        }
    }
}

impl From<Post> for PostDto {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            title: post.title,
            text: post.text,
            pub_date: post.pub_date,
            author: AuthorDto::from(post.author),
            // Unpublished locations are not shown to readers.
            location: post
                .location
                .filter(|location| location.publication.is_published)
                .map(LocationDto::from),
            category: post.category.map(CategoryDto::from),
            created_at: post.publication.created_at,
        }
    }
}

impl From<CategoryPosts> for CategoryPostsDto {
    fn from(result: CategoryPosts) -> Self {
        Self {
            category: CategoryDto::from(result.category),
            posts: result.posts.into_iter().map(PostDto::from).collect(),
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/posts",
    tag = "posts",
    params(RecentPostsQuery),
    responses(
        (status = 200, description = "Recently published posts, newest first", body = [PostDto]),
        (status = 400, description = "Validation error"),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn list_recent_posts(
    State(state): State<AppState>,
    Query(query): Query<RecentPostsQuery>,
) -> AppResult<(StatusCode, Json<Vec<PostDto>>)> {
    query.validate()?;
    let limit = query.limit.unwrap_or(state.posts_by_page);

    let posts = state.blog_service.list_recent_posts(limit).await?;
    Ok((
        StatusCode::OK,
        Json(posts.into_iter().map(PostDto::from).collect()),
    ))
}

#[utoipa::path(
    get,
    path = "/api/posts/{id}",
    tag = "posts",
    params(
        ("id" = i64, Path, description = "Post id")
    ),
    responses(
        (status = 200, description = "Post found", body = PostDto),
        (status = 404, description = "Post not found"),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<(StatusCode, Json<PostDto>)> {
    let result = state.blog_service.get_post(id).await?;

    Ok((StatusCode::OK, Json(PostDto::from(result))))
}

#[utoipa::path(
    get,
    path = "/api/categories/{slug}/posts",
    tag = "categories",
    params(
        ("slug" = String, Path, description = "Category slug")
    ),
    responses(
        (status = 200, description = "Category with its published posts", body = CategoryPostsDto),
        (status = 404, description = "Category not found"),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn list_category_posts(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<(StatusCode, Json<CategoryPostsDto>)> {
    if !is_valid_slug(&slug) {
        return Err(AppError::NotFound);
    }
    let result = state.blog_service.list_category_posts(&slug).await?;

    Ok((StatusCode::OK, Json(CategoryPostsDto::from(result))))
}
