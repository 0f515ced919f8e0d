use std::sync::Arc;

use crate::infrastructure::jwt::JwtService;
use crate::presentation::graphql::AppSchema;

pub(crate) mod graphql;
pub(crate) mod http_handlers;
pub(crate) mod middleware;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) schema: AppSchema,
    pub(crate) jwt: Arc<JwtService>,
}

impl AppState {
    pub(crate) fn new(schema: AppSchema, jwt: Arc<JwtService>) -> Self {
        Self { schema, jwt }
    }
}
