//! API routes module
//!
//! This module defines all HTTP API routes for the Tasks API.

pub mod tasks;

use axum::Router;

use crate::state::AppState;

/// Create all API routes
/// Note: docs, fallback and middleware are added by axum_helpers::create_router
pub fn routes(state: &AppState) -> Router {
    Router::new().nest("/tasks", tasks::router(state))
}
