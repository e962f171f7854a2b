use axum::{Router, routing::get};

use crate::presentation::AppState;
use crate::presentation::http::handlers::posts::{get_post, list_category_posts, list_recent_posts};

pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .route("/posts", get(list_recent_posts))
        .route("/posts/{id}", get(get_post))
        .route("/categories/{slug}/posts", get(list_category_posts))
}
