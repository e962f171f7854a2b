pub(crate) mod category;
pub(crate) mod error;
pub(crate) mod limits;
pub(crate) mod location;
pub(crate) mod post;
pub(crate) mod publication;
pub(crate) mod user;
pub(crate) mod visibility;
