use axum::{
    extract::{Path, State},
    response::Html,
};
use tera::Context;

use crate::domain::limits::is_valid_slug;
use crate::presentation::AppState;
use crate::presentation::http::app_error::{AppError, PageResult};
use crate::presentation::templates::{CATEGORY_TEMPLATE, DETAIL_TEMPLATE, INDEX_TEMPLATE};

pub(crate) async fn index(State(state): State<AppState>) -> PageResult<Html<String>> {
    let posts = state
        .blog_service
        .list_recent_posts(state.posts_by_page)
        .await?;

    let mut context = Context::new();
    context.insert("post_list", &posts);
    Ok(Html(state.templates.render(INDEX_TEMPLATE, &context)?))
}

pub(crate) async fn post_detail(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> PageResult<Html<String>> {
    let post_id = parse_post_id(&raw_id).ok_or(AppError::NotFound)?;
    let post = state.blog_service.get_post(post_id).await?;

    let mut context = Context::new();
    context.insert("post", &post);
    Ok(Html(state.templates.render(DETAIL_TEMPLATE, &context)?))
}

pub(crate) async fn category_posts(
    State(state): State<AppState>,
    Path(category_slug): Path<String>,
) -> PageResult<Html<String>> {
    if !is_valid_slug(&category_slug) {
        return Err(AppError::NotFound.into());
    }
    let result = state
        .blog_service
        .list_category_posts(&category_slug)
        .await?;

    let mut context = Context::new();
    context.insert("category", &result.category);
    context.insert("post_list", &result.posts);
    Ok(Html(state.templates.render(CATEGORY_TEMPLATE, &context)?))
}

/// Post ids in page URLs are plain decimal digits.
fn parse_post_id(raw: &str) -> Option<i64> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}
