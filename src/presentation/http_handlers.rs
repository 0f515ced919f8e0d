use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Json, Router,
    extract::State,
    http::HeaderMap,
    routing::{get, post},
};
use serde::Serialize;
use tracing::debug;

use super::AppState;
use super::middleware::auth::auth_context_from_headers;
use crate::domain::auth::AuthContext;

pub(crate) fn routes(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(health_handler))
        .route("/graphql", post(graphql_handler))
        .with_state(state)
}

async fn graphql_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    req: GraphQLRequest,
) -> GraphQLResponse {
    // context lives for exactly this one request
    let auth = auth_context_from_headers(&headers, &state.jwt);
    match &auth {
        AuthContext::Authenticated(identity) => {
            debug!(
                user_id = identity.user_id,
                username = %identity.username,
                email = %identity.email,
                "authenticated request"
            );
        }
        AuthContext::Rejected(reason) => {
            // public reads still work; guarded operations will fail this
            debug!(%reason, "request carried an invalid token");
        }
        AuthContext::Anonymous => {}
    }
    state.schema.execute(req.into_inner().data(auth)).await.into()
}

#[derive(Debug, Serialize)]
struct HealthzResponse {
    status: &'static str,
}

async fn health_handler() -> Json<HealthzResponse> {
    Json(HealthzResponse { status: "ok" })
}
