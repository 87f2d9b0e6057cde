/**
 * Account Deletion Mutation
 *
 * This module implements the `deleteAccount` mutation, which removes the
 * authenticated user's account together with everything it owns.
 *
 * # Deletion Process
 *
 * 1. Resolve the authenticated user from the bearer token
 * 2. Check the supplied id against the authenticated user's id
 * 3. Remove the avatar file from the uploads directory, if any
 * 4. Delete all tasks authored by the user
 * 5. Delete the user row
 * 6. Return the per-stage deletion counts
 *
 * # Authorization
 *
 * The id argument must refer to the caller's own account; deleting
 * another user's account is rejected.
 *
 * # Avatar Cleanup
 *
 * A failure to remove the avatar file is logged and does not abort the
 * deletion; the database rows are removed regardless.
 */

use std::path::Path;

use async_graphql::{Context, Object, Result, ID};

use crate::auth::users::delete_user;
use crate::error::ApiError;
use crate::graphql::types::DeletePayload;
use crate::graphql::user::{authenticated_user, pool};
use crate::server::config::UploadsDir;
use crate::tasks::db::delete_tasks_for_author;

/// Account deletion mutation
#[derive(Default)]
pub struct DeleteAccountMutation;

#[Object]
impl DeleteAccountMutation {
    /// Delete the authenticated user's account and all of their tasks
    async fn delete_account(&self, ctx: &Context<'_>, id: ID) -> Result<DeletePayload> {
        let user = authenticated_user(ctx).await?;

        let target = uuid::Uuid::parse_str(id.as_str())
            .map_err(|_| ApiError::validation("id", "not a valid account id"))?;

        if target != user.id {
            tracing::warn!(
                "User {} attempted to delete account {}",
                user.id,
                target
            );
            return Err(
                ApiError::unauthorized("account id does not match the authenticated user").into(),
            );
        }

        if let Some(avatar_url) = &user.avatar_url {
            let uploads = ctx
                .data_opt::<UploadsDir>()
                .ok_or_else(|| ApiError::config("uploads directory missing from schema data"))?;
            if let Err(e) = remove_avatar_file(&uploads.0, avatar_url).await {
                tracing::warn!("Failed to remove avatar {}: {:?}", avatar_url, e);
            }
        }

        let pool = pool(ctx)?;

        let deleted_tasks = delete_tasks_for_author(pool, user.id).await.map_err(|e| {
            tracing::error!("Failed to delete tasks: {:?}", e);
            ApiError::from(e)
        })?;

        let deleted_users = delete_user(pool, user.id).await.map_err(|e| {
            tracing::error!("Failed to delete user: {:?}", e);
            ApiError::from(e)
        })?;

        tracing::info!(
            "User {} deleted ({} tasks removed)",
            user.email,
            deleted_tasks
        );

        Ok(DeletePayload {
            deleted_tasks: deleted_tasks as i32,
            deleted_users: deleted_users as i32,
            message: "User successfully deleted".to_string(),
        })
    }
}

/// Remove an avatar file from the uploads directory
///
/// The avatar URL stores a path like `/uploads/<file>`; only the final
/// segment is used, so the URL can never escape the uploads directory.
async fn remove_avatar_file(uploads_dir: &Path, avatar_url: &str) -> std::io::Result<()> {
    let file_name = avatar_url
        .rsplit('/')
        .next()
        .filter(|name| !name.is_empty())
        .ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "empty avatar file name")
        })?;

    tokio::fs::remove_file(uploads_dir.join(file_name)).await
}
