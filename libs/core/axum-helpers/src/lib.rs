//! # Axum Helpers
//!
//! A collection of utilities and helpers shared by the Axum applications in
//! this workspace.
//!
//! ## Modules
//!
//! - **[`server`]**: router assembly with OpenAPI documentation, server
//!   startup, graceful shutdown
//! - **[`errors`]**: structured error responses and fallback handlers
//! - **[`extractors`]**: custom extractors (UUID path, validated JSON)

pub mod errors;
pub mod extractors;
pub mod server;

// Re-export server functions
pub use server::{create_app, create_router, shutdown_signal};

// Re-export error types
pub use errors::ErrorResponse;

// Re-export extractors
pub use extractors::{UuidPath, ValidatedJson};
