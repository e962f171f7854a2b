use std::sync::Arc;

use crate::application::blog_service::BlogService;
use crate::data::blog_repository::DynBlogRepository;
use crate::presentation::templates::Templates;

pub(crate) mod http;
pub(crate) mod templates;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) blog_service: Arc<BlogService<DynBlogRepository>>,
    pub(crate) templates: Arc<Templates>,
    pub(crate) posts_by_page: u32,
}

impl AppState {
    pub(crate) fn new(
        blog_service: Arc<BlogService<DynBlogRepository>>,
        templates: Arc<Templates>,
        posts_by_page: u32,
    ) -> Self {
        Self {
            blog_service,
            templates,
            posts_by_page,
        }
    }
}
