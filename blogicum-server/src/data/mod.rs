pub(crate) mod blog_repository;
pub(crate) mod repositories;
