/**
 * Server Configuration
 *
 * This module handles loading and validation of server configuration:
 * the PostgreSQL connection and the uploads directory used for avatars.
 *
 * # Configuration Sources
 *
 * Configuration is loaded from environment variables, with sensible
 * defaults for local development when possible:
 *
 * - `DATABASE_URL` - PostgreSQL connection string (required)
 * - `UPLOADS_DIR`  - directory holding uploaded avatar files
 *                    (default: "uploads")
 * - `SERVER_PORT`  - listen port (default: 3000, read in `main`)
 *
 * # Error Handling
 *
 * Every account operation needs storage, so a missing or unreachable
 * database is a startup error rather than a degraded mode.
 */

use std::path::PathBuf;

use sqlx::PgPool;

use crate::error::ApiError;

/// Directory holding uploaded avatar files
///
/// Stored as GraphQL schema data so the account-deletion resolver can
/// remove a user's avatar file.
#[derive(Debug, Clone)]
pub struct UploadsDir(pub PathBuf);

impl UploadsDir {
    /// Load the uploads directory from `UPLOADS_DIR`, defaulting to "uploads"
    pub fn from_env() -> Self {
        let dir = std::env::var("UPLOADS_DIR").unwrap_or_else(|_| "uploads".to_string());
        Self(PathBuf::from(dir))
    }
}

/// Load and initialize the database connection pool
///
/// This function:
/// 1. Reads `DATABASE_URL` from the environment
/// 2. Creates a PostgreSQL connection pool
/// 3. Runs embedded database migrations
///
/// # Returns
///
/// The connected pool, or a configuration error if `DATABASE_URL` is
/// missing, the connection fails, or migrations fail.
pub async fn load_database() -> Result<PgPool, ApiError> {
    let database_url = std::env::var("DATABASE_URL")
        .map_err(|_| ApiError::config("DATABASE_URL must be set"))?;

    tracing::info!("Connecting to database...");

    let pool = PgPool::connect(&database_url).await.map_err(|e| {
        tracing::error!("Failed to create database connection pool: {:?}", e);
        ApiError::Database(e)
    })?;

    tracing::info!("Database connection pool created successfully");

    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(&pool).await.map_err(|e| {
        tracing::error!("Failed to run database migrations: {:?}", e);
        ApiError::config(format!("database migrations failed: {}", e))
    })?;
    tracing::info!("Database migrations completed successfully");

    Ok(pool)
}
