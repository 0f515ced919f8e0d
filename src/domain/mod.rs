pub(crate) mod auth;
pub(crate) mod comment;
pub(crate) mod error;
pub(crate) mod post;
pub(crate) mod user;
