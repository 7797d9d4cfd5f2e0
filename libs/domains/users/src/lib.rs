//! Users Domain
//!
//! A complete domain implementation for the user directory: entities,
//! validation rules, business logic and HTTP endpoints.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Business rules (uniqueness, existence, pagination)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ ObjectCache │  ← Keyed store (trait + in-memory implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entity, form, DTO, validation
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_users::{handlers, UserService};
//! use object_cache::InMemoryObjectCache;
//!
//! // Create store and service
//! let cache = InMemoryObjectCache::new();
//! let service = UserService::new(cache);
//!
//! // Create Axum router
//! let router = handlers::router(service);
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod service;

// Re-export commonly used types
pub use error::{UserError, UserResult};
pub use handlers::ApiDoc;
pub use models::{PageQuery, User, UserDto, UserForm};
pub use service::UserService;
