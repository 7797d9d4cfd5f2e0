//! Users API - REST server over an in-memory user store

use axum_helpers::server::create_app;
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_users::UserService;
use object_cache::InMemoryObjectCache;
use tracing::info;

mod api;
mod config;
mod openapi;

use config::Config;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    // Single in-memory store shared by every request
    let cache = InMemoryObjectCache::new();
    let service = UserService::new(cache);

    let api_routes = api::routes(service);
    let router = axum_helpers::create_router::<openapi::ApiDoc>(api_routes);
    let app = router.merge(api::health::router());

    info!("Starting Users API on port {}", config.server.port);

    create_app(app, &config.server)
        .await
        .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Users API shutdown complete");
    Ok(())
}
