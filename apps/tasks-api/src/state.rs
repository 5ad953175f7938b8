//! Application state management.
//!
//! The state is built once in `main` and handed to the route builders.

use domain_tasks::InMemoryTaskRepository;

/// Shared application state.
///
/// Cloning is cheap: the task repository is an `Arc` around a single store.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// Process-wide task store, empty at startup
    pub tasks: InMemoryTaskRepository,
}
