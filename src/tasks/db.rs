/**
 * Task Model and Database Operations
 *
 * This module handles task data and database operations. Account deletion
 * removes a user's tasks before removing the user row so the API can
 * report how many tasks were deleted.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

/// Task struct representing a task in the database
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Task {
    /// Unique task ID (UUID)
    pub id: uuid::Uuid,
    /// ID of the user who authored the task
    pub author: uuid::Uuid,
    /// Task title
    pub title: String,
    /// Completion flag
    pub completed: bool,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
    /// Updated at timestamp
    pub updated_at: DateTime<Utc>,
}

/// Create a new task
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `author` - ID of the authoring user
/// * `title` - Task title
///
/// # Returns
/// Created task or error
pub async fn create_task(
    pool: &PgPool,
    author: uuid::Uuid,
    title: &str,
) -> Result<Task, sqlx::Error> {
    let id = uuid::Uuid::new_v4();
    let now = Utc::now();

    let task = sqlx::query_as::<_, Task>(
        r#"
        INSERT INTO tasks (id, author, title, completed, created_at, updated_at)
        VALUES ($1, $2, $3, FALSE, $4, $5)
        RETURNING id, author, title, completed, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(author)
    .bind(title)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(task)
}

/// Delete all tasks authored by a user
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `author` - ID of the authoring user
///
/// # Returns
/// Number of tasks deleted
pub async fn delete_tasks_for_author(
    pool: &PgPool,
    author: uuid::Uuid,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM tasks WHERE author = $1")
        .bind(author)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}

/// Count tasks authored by a user
pub async fn count_tasks_for_author(
    pool: &PgPool,
    author: uuid::Uuid,
) -> Result<i64, sqlx::Error> {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM tasks WHERE author = $1")
        .bind(author)
        .fetch_one(pool)
        .await?;

    Ok(count)
}
