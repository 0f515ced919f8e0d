use std::sync::Arc;

use async_graphql::{EmptySubscription, Error, ID, Schema};

use crate::application::auth_service::AuthService;
use crate::application::blog_service::BlogService;
use crate::application::comment_service::CommentService;
use crate::data::repositories::postgres::comment_repository::PostgresCommentRepository;
use crate::data::repositories::postgres::post_repository::PostgresPostRepository;
use crate::data::repositories::postgres::user_repository::PostgresUserRepository;
use crate::domain::error::DomainError;

pub(crate) mod mutation;
pub(crate) mod query;
pub(crate) mod types;

pub(crate) use mutation::MutationRoot;
pub(crate) use query::QueryRoot;

pub(crate) type Auth = AuthService<PostgresUserRepository>;
pub(crate) type Blog = BlogService<PostgresPostRepository>;
pub(crate) type Comments = CommentService<PostgresCommentRepository>;

pub(crate) type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub(crate) fn build_schema(
    auth_service: Arc<Auth>,
    blog_service: Arc<Blog>,
    comment_service: Arc<Comments>,
) -> AppSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(auth_service)
        .data(blog_service)
        .data(comment_service)
        .finish()
}

// Errors carry a human-readable message only; no structured codes.
pub(crate) fn domain_error(err: DomainError) -> Error {
    Error::new(err.to_string())
}

pub(crate) fn parse_id(id: &ID) -> Result<i64, Error> {
    id.as_str()
        .parse::<i64>()
        .map_err(|_| Error::new(format!("invalid id: {}", id.as_str())))
}
