use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

use crate::models::TaskId;

/// Caller-input errors of the tasks domain.
///
/// The `Display` text of each variant is the exact `message` sent to clients.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskError {
    #[error("Title and due date are required")]
    MissingField,

    #[error("Invalid or past due date")]
    InvalidDueDate,

    #[error("Invalid task ID")]
    InvalidId,

    #[error("Task not found")]
    NotFound(TaskId),
}

pub type TaskResult<T> = Result<T, TaskError>;

/// Convert TaskError to AppError for standardized error responses
impl From<TaskError> for AppError {
    fn from(err: TaskError) -> Self {
        match err {
            TaskError::MissingField | TaskError::InvalidDueDate | TaskError::InvalidId => {
                AppError::BadRequest(err.to_string())
            }
            TaskError::NotFound(id) => {
                tracing::debug!(task_id = id, "Task lookup missed");
                AppError::NotFound(err.to_string())
            }
        }
    }
}

impl IntoResponse for TaskError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
