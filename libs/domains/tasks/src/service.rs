use std::sync::Arc;
use tracing::instrument;

use crate::error::{TaskError, TaskResult};
use crate::models::{CreateTask, Task, TaskId, UpdateTask};
use crate::repository::TaskRepository;

/// Service layer for Task business logic
#[derive(Clone)]
pub struct TaskService<R: TaskRepository> {
    repository: Arc<R>,
}

impl<R: TaskRepository> TaskService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a new task
    #[instrument(skip(self, input), fields(task_title = input.title.as_deref().unwrap_or_default()))]
    pub async fn create_task(&self, input: CreateTask) -> TaskResult<Task> {
        let task = self.repository.create(input).await?;
        tracing::info!(task_id = task.id, "Created task");
        Ok(task)
    }

    /// List all tasks in insertion order
    pub async fn list_tasks(&self) -> TaskResult<Vec<Task>> {
        let tasks = self.repository.list().await?;
        tracing::debug!(count = tasks.len(), "Listed tasks");
        Ok(tasks)
    }

    /// Get a task by ID
    #[instrument(skip(self))]
    pub async fn get_task(&self, id: TaskId) -> TaskResult<Task> {
        let task = self
            .repository
            .get_by_id(id)
            .await?
            .ok_or(TaskError::NotFound(id))?;
        tracing::debug!("Fetched task");
        Ok(task)
    }

    /// Update a task
    #[instrument(skip(self, input))]
    pub async fn update_task(&self, id: TaskId, input: UpdateTask) -> TaskResult<Task> {
        let task = self.repository.update(id, input).await?;
        tracing::info!("Updated task");
        Ok(task)
    }

    /// Delete a task
    #[instrument(skip(self))]
    pub async fn delete_task(&self, id: TaskId) -> TaskResult<()> {
        let deleted = self.repository.delete(id).await?;

        if !deleted {
            return Err(TaskError::NotFound(id));
        }

        tracing::info!("Deleted task");
        Ok(())
    }

    /// Number of stored tasks
    pub async fn count_tasks(&self) -> TaskResult<usize> {
        self.repository.count().await
    }
}
