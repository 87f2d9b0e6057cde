//! Taskdeck - Account Service Library
//!
//! Taskdeck is the backend of a task-management application. This crate
//! implements its user account service: registration, login, token-based
//! session retrieval, display-name updates, and account deletion, exposed
//! as a GraphQL API over Axum.
//!
//! # Module Structure
//!
//! - **`server`** - HTTP server setup (config, state, router)
//! - **`auth`** - User model, JWT sessions, input validation
//! - **`tasks`** - Task persistence (cascade for account deletion)
//! - **`graphql`** - Schema assembly and resolvers
//! - **`error`** - Error types and GraphQL error conversion
//!
//! # Operations
//!
//! - Query `me` - resolve the account behind a bearer token
//! - Mutation `register` - create an account, return a session token
//! - Mutation `login` - verify credentials, return a session token
//! - Mutation `updateName` - change the display name
//! - Mutation `deleteAccount` - remove the account, its tasks, and avatar
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt before storage and never exposed
//! - Session tokens are HMAC-signed JWTs with a 2-day expiry
//! - Mutations on an account require a token for that same account

/// HTTP server setup
pub mod server;

/// Accounts, sessions, and validation
pub mod auth;

/// Task persistence
pub mod tasks;

/// GraphQL schema and resolvers
pub mod graphql;

/// Error types
pub mod error;
