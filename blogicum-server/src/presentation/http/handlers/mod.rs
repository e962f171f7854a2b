pub(crate) mod pages;
pub(crate) mod posts;
