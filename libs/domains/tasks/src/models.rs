use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use utoipa::ToSchema;

use crate::error::TaskResult;
use crate::validation;

/// Task identifier, assigned by the store starting at 1
pub type TaskId = i64;

/// Status given to tasks created without one
pub const DEFAULT_STATUS: &str = "pending";

/// Task entity - represents a task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique identifier, never reused within a store
    #[ts(type = "number")]
    pub id: TaskId,
    /// Task title
    pub title: String,
    /// Task description
    pub description: String,
    /// Due date exactly as the client sent it
    pub due_date: String,
    /// Free-form status text
    pub status: String,
}

/// DTO for creating a new task
///
/// Every field is optional on the wire so a missing title or due date is
/// reported as a domain error rather than a deserialization failure.
#[derive(Debug, Clone, Default, Deserialize, ToSchema, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CreateTask {
    /// Required, must not be empty
    pub title: Option<String>,
    /// Required, must parse and lie in the future
    pub due_date: Option<String>,
    /// Defaults to an empty string
    pub description: Option<String>,
    /// Defaults to `pending`
    pub status: Option<String>,
}

/// DTO for updating an existing task
///
/// `None` leaves a field untouched; `Some("")` overwrites it with an empty string.
#[derive(Debug, Clone, Default, Deserialize, ToSchema, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTask {
    pub title: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<String>,
    pub status: Option<String>,
}

/// A checked [`UpdateTask`], ready to apply to a stored record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<String>,
    pub status: Option<String>,
}

impl UpdateTask {
    /// Require a supplied due date to parse and lie after `now`.
    ///
    /// The due date is kept in the form the client sent.
    pub fn into_changes(self, now: DateTime<Utc>) -> TaskResult<TaskChanges> {
        if let Some(raw) = self.due_date.as_deref() {
            validation::future_due_date(raw, now)?;
        }

        Ok(TaskChanges {
            title: self.title,
            description: self.description,
            due_date: self.due_date,
            status: self.status,
        })
    }
}

impl Task {
    /// Overwrite every field present in `changes`
    pub fn apply_update(&mut self, changes: TaskChanges) {
        if let Some(title) = changes.title {
            self.title = title;
        }
        if let Some(description) = changes.description {
            self.description = description;
        }
        if let Some(due_date) = changes.due_date {
            self.due_date = due_date;
        }
        if let Some(status) = changes.status {
            self.status = status;
        }
    }
}
