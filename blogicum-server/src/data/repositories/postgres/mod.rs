pub(crate) mod blog_repository;
