/**
 * GraphQL Payload and Input Types
 *
 * This module defines the request and response types used by the account
 * resolvers. These types are shared across register, login, me,
 * updateName, and deleteAccount.
 *
 * Password hashes never appear here: `UserAccount` exposes only the
 * public fields of a user row.
 */

use async_graphql::{InputObject, SimpleObject, ID};
use chrono::{DateTime, Utc};

use crate::auth::User;

/// Public view of a user account (no credential data)
#[derive(SimpleObject, Clone, Debug)]
pub struct UserAccount {
    /// User's unique ID (UUID)
    pub id: ID,
    /// User's email address
    pub email: String,
    /// Display name
    pub name: String,
    /// Avatar URL, if the user has uploaded one
    pub avatar_url: Option<String>,
    /// Account creation timestamp
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserAccount {
    fn from(user: User) -> Self {
        Self {
            id: ID(user.id.to_string()),
            email: user.email,
            name: user.name,
            avatar_url: user.avatar_url,
            created_at: user.created_at,
        }
    }
}

/// Registration input
///
/// Contains the email, display name, and password for a new account.
#[derive(InputObject, Debug)]
pub struct RegisterInput {
    /// User's email address (must be unique)
    pub email: String,
    /// Display name
    pub name: String,
    /// Password (hashed before storage, at least 8 characters)
    pub password: String,
}

/// Auth payload
///
/// Returned by register and login. Contains the signed session token
/// (2-day expiration) alongside the account.
#[derive(SimpleObject, Debug)]
pub struct AuthPayload {
    /// The account
    pub user: UserAccount,
    /// Signed session token
    pub token: String,
    /// Human-readable status message
    pub message: String,
}

/// Account payload
///
/// Returned by operations that act on an existing session (me,
/// updateName).
#[derive(SimpleObject, Debug)]
pub struct AccountPayload {
    /// The account
    pub user: UserAccount,
    /// Human-readable status message
    pub message: String,
}

/// Deletion payload
///
/// Reports how many rows each stage of account deletion removed.
#[derive(SimpleObject, Debug)]
pub struct DeletePayload {
    /// Number of tasks deleted with the account
    pub deleted_tasks: i32,
    /// Number of user rows deleted (0 or 1)
    pub deleted_users: i32,
    /// Human-readable status message
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_account_from_user() {
        let id = uuid::Uuid::new_v4();
        let now = Utc::now();
        let user = User {
            id,
            email: "user@example.com".to_string(),
            name: "Alice".to_string(),
            password_hash: "$2b$12$hash".to_string(),
            avatar_url: Some("/uploads/a.png".to_string()),
            created_at: now,
            updated_at: now,
        };

        let account = UserAccount::from(user);
        assert_eq!(account.id.as_str(), id.to_string());
        assert_eq!(account.email, "user@example.com");
        assert_eq!(account.name, "Alice");
        assert_eq!(account.avatar_url.as_deref(), Some("/uploads/a.png"));
        assert_eq!(account.created_at, now);
    }
}
