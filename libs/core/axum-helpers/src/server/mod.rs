//! Server infrastructure module.
//!
//! This module provides:
//! - Application setup with OpenAPI documentation
//! - Graceful shutdown on SIGINT/SIGTERM

pub mod app;
pub mod shutdown;

pub use app::{create_app, create_router};
pub use shutdown::shutdown_signal;
