pub(crate) mod blog_service;
