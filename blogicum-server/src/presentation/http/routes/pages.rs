use axum::{Router, routing::get};

use crate::presentation::AppState;
use crate::presentation::http::handlers::pages::{category_posts, index, post_detail};

pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/posts/{post_id}/", get(post_detail))
        .route("/category/{category_slug}/", get(category_posts))
}
