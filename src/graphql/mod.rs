//! GraphQL Module
//!
//! This module assembles the executable GraphQL schema for the account
//! API and defines the per-request authentication data.
//!
//! # Module Structure
//!
//! ```text
//! graphql/
//! ├── mod.rs    - Schema assembly, roots, request data
//! ├── types.rs  - Shared payload and input types
//! └── user/     - One resolver module per account operation
//! ```
//!
//! # Request Data
//!
//! The HTTP layer extracts the bearer token from the `Authorization`
//! header and injects it as [`AuthToken`] request data. Resolvers that
//! require authentication verify it from there; the token never appears
//! in the GraphQL schema itself.

use async_graphql::{EmptySubscription, MergedObject, Schema};
use sqlx::PgPool;

use crate::server::config::UploadsDir;

/// Shared payload and input types
pub mod types;

/// Account resolvers
pub mod user;

/// Bearer token carried as per-request GraphQL data
///
/// Present only when the request had a well-formed `Authorization` header.
pub struct AuthToken(pub String);

/// Root query object
#[derive(MergedObject, Default)]
pub struct QueryRoot(user::UserQuery);

/// Root mutation object
#[derive(MergedObject, Default)]
pub struct MutationRoot(user::UserMutation);

/// Executable schema type for the account API
pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the executable GraphQL schema
///
/// The database pool and the uploads directory are stored as schema data
/// so every resolver can reach them through the context.
pub fn build_schema(pool: PgPool, uploads_dir: UploadsDir) -> AppSchema {
    Schema::build(
        QueryRoot::default(),
        MutationRoot::default(),
        EmptySubscription,
    )
    .data(pool)
    .data(uploads_dir)
    .finish()
}
