/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the necessary `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * The `AppState` struct serves as the central state container for the
 * application, holding:
 * - The executable GraphQL schema
 * - The PostgreSQL connection pool
 *
 * # Thread Safety
 *
 * Both fields are cheap handles: `Schema` and `PgPool` are internally
 * reference-counted and safe to clone per request.
 */

use axum::extract::FromRef;
use sqlx::PgPool;

use crate::graphql::AppSchema;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Executable GraphQL schema (holds the pool and uploads dir as data)
    pub schema: AppSchema,

    /// Database connection pool
    ///
    /// Also stored in the schema data; kept here for non-GraphQL
    /// handlers such as health checks.
    pub pool: PgPool,
}

/// Allow handlers to extract the schema directly from `AppState`
impl FromRef<AppState> for AppSchema {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.schema.clone()
    }
}

/// Allow handlers to extract the pool directly from `AppState`
impl FromRef<AppState> for PgPool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.pool.clone()
    }
}
