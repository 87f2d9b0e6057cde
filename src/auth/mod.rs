//! Authentication Module
//!
//! This module handles user accounts, password credentials, and session
//! tokens. Resolvers call into it for every account operation.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs       - Module exports and documentation
//! ├── users.rs     - User model and database operations
//! ├── sessions.rs  - JWT token generation and validation
//! └── validate.rs  - Input validation for account fields
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: email + name + password → user created → JWT token returned
//! 2. **Login**: email + password → credentials verified → JWT token returned
//! 3. **Me**: JWT token → token verified → user info returned
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - JWT tokens are used for stateless authentication
//! - Tokens expire after 2 days
//! - Password hashes are never exposed through the API

/// User model and database operations
pub mod users;

/// JWT token generation and validation
pub mod sessions;

/// Input validation for account fields
pub mod validate;

// Re-export commonly used types
pub use users::User;
