use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{TaskError, TaskResult};
use crate::models::{CreateTask, Task, TaskId, UpdateTask};
use crate::store::TaskStore;

/// Repository trait for Task persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Validate and store a new task
    async fn create(&self, input: CreateTask) -> TaskResult<Task>;

    /// All tasks in insertion order
    async fn list(&self) -> TaskResult<Vec<Task>>;

    /// Get a task by ID
    async fn get_by_id(&self, id: TaskId) -> TaskResult<Option<Task>>;

    /// Update an existing task
    async fn update(&self, id: TaskId, input: UpdateTask) -> TaskResult<Task>;

    /// Delete a task by ID, returning whether it existed
    async fn delete(&self, id: TaskId) -> TaskResult<bool>;

    /// Number of stored tasks
    async fn count(&self) -> TaskResult<usize>;
}

/// In-memory implementation of TaskRepository
///
/// Clones share the same store, so one instance can back every request
/// handler. Contents are lost when the process exits.
#[derive(Debug, Default, Clone)]
pub struct InMemoryTaskRepository {
    store: Arc<RwLock<TaskStore>>,
}

impl InMemoryTaskRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn create(&self, input: CreateTask) -> TaskResult<Task> {
        let mut store = self.store.write().await;
        store.create(input, Utc::now())
    }

    async fn list(&self) -> TaskResult<Vec<Task>> {
        let store = self.store.read().await;
        Ok(store.list_all().to_vec())
    }

    async fn get_by_id(&self, id: TaskId) -> TaskResult<Option<Task>> {
        let store = self.store.read().await;
        Ok(store.find(id).cloned())
    }

    async fn update(&self, id: TaskId, input: UpdateTask) -> TaskResult<Task> {
        let mut store = self.store.write().await;
        store.update(id, input, Utc::now())
    }

    async fn delete(&self, id: TaskId) -> TaskResult<bool> {
        let mut store = self.store.write().await;
        match store.delete_by_id(id) {
            Ok(()) => Ok(true),
            Err(TaskError::NotFound(_)) => Ok(false),
            Err(e) => Err(e),
        }
    }

    async fn count(&self) -> TaskResult<usize> {
        let store = self.store.read().await;
        Ok(store.len())
    }
}
