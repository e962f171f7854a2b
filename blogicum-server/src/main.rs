use std::sync::Arc;

use anyhow::Result;

mod application;
mod data;
mod domain;
mod infrastructure;
mod presentation;
mod server;

use application::blog_service::BlogService;
use data::blog_repository::DynBlogRepository;
use data::repositories::postgres::blog_repository::PostgresBlogRepository;
use infrastructure::database::{create_pool, run_migrations};
use infrastructure::logging::init_logging;
use infrastructure::settings::Settings;
use presentation::AppState;
use presentation::templates::Templates;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let settings = Settings::from_env()?;

    init_logging(&settings.log_level)?;

    let pool = create_pool(&settings.database_url, settings.database_max_connections).await?;
    run_migrations(&pool).await?;

    let repo: DynBlogRepository = Arc::new(PostgresBlogRepository::new(pool));
    let blog_service = Arc::new(BlogService::new(repo, settings.field_limits));
    let templates = Arc::new(Templates::load(settings.templates_dir.as_deref())?);

    let state = AppState::new(blog_service, templates, settings.posts_by_page);
    server::run_http(&settings, state).await
}
