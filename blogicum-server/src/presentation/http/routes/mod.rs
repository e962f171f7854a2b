use axum::Router;

use crate::presentation::AppState;

pub(crate) mod api;
pub(crate) mod pages;

pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .merge(pages::router())
        .nest("/api", api::router())
}
