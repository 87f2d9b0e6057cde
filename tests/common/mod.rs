//! Shared test fixtures
//!
//! Utilities for setting up test databases and authenticated test users.

pub mod auth_helpers;
pub mod database;
