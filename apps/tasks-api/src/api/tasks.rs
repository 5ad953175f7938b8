//! Tasks API routes
//!
//! Wires the tasks domain to HTTP routes on top of the shared in-memory store.

use axum::Router;
use domain_tasks::{TaskService, handlers};

use crate::state::AppState;

/// Create tasks router
pub fn router(state: &AppState) -> Router {
    let service = TaskService::new(state.tasks.clone());

    // Return the domain's router
    handlers::router(service)
}
