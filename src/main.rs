use std::sync::Arc;

use anyhow::Result;

mod application;
mod data;
mod domain;
mod infrastructure;
mod presentation;
mod server;

use application::auth_service::AuthService;
use application::blog_service::BlogService;
use application::comment_service::CommentService;
use data::repositories::postgres::comment_repository::PostgresCommentRepository;
use data::repositories::postgres::post_repository::PostgresPostRepository;
use data::repositories::postgres::user_repository::PostgresUserRepository;
use infrastructure::database::{create_pool, ensure_schema};
use infrastructure::jwt::JwtService;
use infrastructure::logging::init_logging;
use infrastructure::settings::Settings;
use presentation::AppState;
use presentation::graphql::build_schema;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let settings = Settings::from_env()?;

    init_logging(&settings.log_level)?;

    // a store-connection failure here terminates the process
    let pool = create_pool(&settings.database_url, settings.db_max_connections).await?;
    ensure_schema(&pool).await?;

    let auth_service = Arc::new(AuthService::new(
        PostgresUserRepository::new(pool.clone()),
        JwtService::new(&settings.jwt_secret, settings.jwt_ttl_seconds),
    ));
    let blog_service = Arc::new(BlogService::new(PostgresPostRepository::new(pool.clone())));
    let comment_service = Arc::new(CommentService::new(PostgresCommentRepository::new(
        pool.clone(),
    )));

    let schema = build_schema(auth_service, blog_service, comment_service);
    let jwt = Arc::new(JwtService::new(
        &settings.jwt_secret,
        settings.jwt_ttl_seconds,
    ));
    let state = AppState::new(schema, jwt);

    server::run_http(&settings, state).await
}
