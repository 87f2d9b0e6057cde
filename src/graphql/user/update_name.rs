/**
 * Name Update Mutation
 *
 * This module implements the `updateName` mutation for changing the
 * authenticated user's display name.
 *
 * # Update Process
 *
 * 1. Validate the new name
 * 2. Resolve the authenticated user from the bearer token
 * 3. Reject the update when the new name matches the current one
 * 4. Persist the new name and return the updated account
 */

use async_graphql::{Context, Object, Result};

use crate::auth::users::update_user_name;
use crate::auth::validate::validate_name;
use crate::error::ApiError;
use crate::graphql::types::AccountPayload;
use crate::graphql::user::{authenticated_user, pool};

/// Name update mutation
#[derive(Default)]
pub struct UpdateNameMutation;

#[Object]
impl UpdateNameMutation {
    /// Change the authenticated user's display name
    async fn update_name(&self, ctx: &Context<'_>, name: String) -> Result<AccountPayload> {
        validate_name(&name)?;

        let user = authenticated_user(ctx).await?;

        if name == user.name {
            tracing::warn!("Name update rejected for {}: name unchanged", user.email);
            return Err(
                ApiError::validation("name", "new name matches the current name").into(),
            );
        }

        let updated = update_user_name(pool(ctx)?, user.id, &name)
            .await
            .map_err(|e| {
                tracing::error!("Failed to update name: {:?}", e);
                ApiError::from(e)
            })?;

        tracing::info!("User {} renamed to {}", updated.email, updated.name);

        let message = format!("User {} successfully updated", updated.name);
        Ok(AccountPayload {
            user: updated.into(),
            message,
        })
    }
}
