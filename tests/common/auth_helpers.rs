//! Authentication test helpers
//!
//! Provides utilities for creating test users, generating tokens, and
//! testing authentication flows.

use sqlx::PgPool;
use uuid::Uuid;

use taskdeck::auth::sessions::create_token;
use taskdeck::auth::users::create_user;

/// Test user credentials
pub struct TestUser {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub password: String,
    pub token: String,
}

/// Create a test user in the database
pub async fn create_test_user(
    pool: &PgPool,
    email: &str,
    name: &str,
    password: &str,
) -> Result<TestUser, Box<dyn std::error::Error>> {
    let password_hash = bcrypt::hash(password, bcrypt::DEFAULT_COST)?;

    let user = create_user(pool, email.to_string(), name.to_string(), password_hash).await?;

    let token = create_token(user.id).expect("Failed to create test token");

    Ok(TestUser {
        id: user.id,
        email: user.email,
        name: user.name,
        password: password.to_string(),
        token,
    })
}

/// Create a test user with a unique email
pub async fn create_unique_test_user(
    pool: &PgPool,
) -> Result<TestUser, Box<dyn std::error::Error>> {
    let email = format!("test_{}@example.com", Uuid::new_v4());
    create_test_user(pool, &email, "Test User", "test_password_123").await
}

/// Generate a test JWT token for an arbitrary user id
pub fn generate_test_token(user_id: Uuid) -> String {
    create_token(user_id).expect("Failed to generate test token")
}

/// Create an authorization header value
pub fn auth_header(token: &str) -> String {
    format!("Bearer {}", token)
}
