//! Server Module
//!
//! Axum HTTP server setup: configuration loading, shared application
//! state, and router/schema assembly.

/// Configuration loading (database pool, uploads directory)
pub mod config;

/// Shared application state
pub mod state;

/// Application assembly and routing
pub mod init;

// Re-export commonly used types
pub use state::AppState;
