//! API routes module

pub mod health;

use axum::Router;
use domain_users::{handlers, User, UserService};
use object_cache::InMemoryObjectCache;
use uuid::Uuid;

/// Create all API routes
pub fn routes(service: UserService<InMemoryObjectCache<Uuid, User>>) -> Router {
    Router::new().nest("/users", handlers::router(service))
}
