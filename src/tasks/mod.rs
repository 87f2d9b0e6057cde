//! Tasks Module
//!
//! Task persistence for the task-management side of the application.
//! The account service only needs the cascade used by account deletion,
//! which removes every task authored by the departing user.

/// Task model and database operations
pub mod db;

// Re-export commonly used types
pub use db::Task;
