/**
 * Server Initialization
 *
 * This module handles the initialization and setup of the Axum HTTP
 * server: configuration loading, GraphQL schema construction, and route
 * configuration.
 *
 * # Initialization Process
 *
 * 1. Load configuration (database pool, uploads directory)
 * 2. Build the executable GraphQL schema with the pool as schema data
 * 3. Create the router (GraphQL endpoint, GraphiQL page, health check)
 *
 * # Routes
 *
 * - `POST /graphql` - GraphQL endpoint (account queries and mutations)
 * - `GET /graphql`  - GraphiQL IDE
 * - `GET /health`   - liveness check
 */

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    extract::State,
    http::{header::AUTHORIZATION, HeaderMap},
    response::{Html, IntoResponse},
    routing::get,
    Router,
};
use tower_http::trace::TraceLayer;

use crate::error::ApiError;
use crate::graphql::{build_schema, AppSchema, AuthToken};
use crate::server::config::{load_database, UploadsDir};
use crate::server::state::AppState;

/// Create and configure the Axum application
///
/// Loads configuration, builds the GraphQL schema, and assembles the
/// router. Fails fast when the database is not available.
pub async fn create_app() -> Result<Router, ApiError> {
    tracing::info!("Initializing taskdeck server");

    let pool = load_database().await?;
    let uploads_dir = UploadsDir::from_env();

    let schema = build_schema(pool.clone(), uploads_dir);
    tracing::info!("GraphQL schema built");

    let app_state = AppState { schema, pool };

    Ok(build_router(app_state))
}

/// Build the router from already-constructed state
///
/// Split out from `create_app` so tests can assemble an application
/// without touching environment configuration.
pub fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/graphql", get(graphiql).post(graphql_handler))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

/// GraphQL endpoint handler
///
/// Extracts the bearer token from the `Authorization` header (when
/// present) and attaches it to the request data so resolvers that need
/// authentication can verify it. Requests without a token still execute;
/// protected resolvers reject them individually.
async fn graphql_handler(
    State(schema): State<AppSchema>,
    headers: HeaderMap,
    req: GraphQLRequest,
) -> GraphQLResponse {
    let mut request = req.into_inner();

    if let Some(token) = bearer_token(&headers) {
        request = request.data(AuthToken(token.to_string()));
    }

    schema.execute(request).await.into()
}

/// GraphiQL IDE page
async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}

/// Liveness check
async fn health() -> &'static str {
    "ok"
}

/// Extract a bearer token from request headers
///
/// Expects the header format `Authorization: Bearer <token>`.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.strip_prefix("Bearer "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_bearer_token_present() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer abc.def.ghi"));
        assert_eq!(bearer_token(&headers), Some("abc.def.ghi"));
    }

    #[test]
    fn test_bearer_token_missing_header() {
        let headers = HeaderMap::new();
        assert_eq!(bearer_token(&headers), None);
    }

    #[test]
    fn test_bearer_token_wrong_scheme() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic dXNlcg=="));
        assert_eq!(bearer_token(&headers), None);
    }
}
