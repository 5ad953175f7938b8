use axum_helpers::server::{create_production_app, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_tasks::{InMemoryTaskRepository, TaskService};
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output
    install_color_eyre();

    // Load configuration from environment variables
    let config = Config::from_env()?;

    // Initialize tracing
    init_tracing(&config.environment);

    // Every process starts with an empty store
    let state = AppState {
        config,
        tasks: InMemoryTaskRepository::new(),
    };

    // Build router with API routes
    let api_routes = api::routes(&state);

    // Create a router with OpenAPI docs
    let router = axum_helpers::create_router::<openapi::ApiDoc>(api_routes);

    // Merge health endpoints
    let app = router.merge(health_router(state.config.app));

    info!(
        "Starting Tasks API with graceful shutdown ({:?} timeout)",
        state.config.server.shutdown_timeout
    );

    let tasks = TaskService::new(state.tasks.clone());
    create_production_app(app, &state.config.server, async move {
        match tasks.count_tasks().await {
            Ok(count) => info!(count, "Discarding in-memory tasks"),
            Err(e) => tracing::warn!("Could not count tasks during shutdown: {}", e),
        }
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Tasks API shutdown complete");
    Ok(())
}
