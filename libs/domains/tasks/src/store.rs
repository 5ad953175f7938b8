//! The task store: an ordered collection of records plus the id counter.
//!
//! All rules about creating, updating and deleting records live here. The
//! store is a plain owned value; sharing and locking are the repository's job.

use chrono::{DateTime, Utc};

use crate::error::{TaskError, TaskResult};
use crate::models::{CreateTask, DEFAULT_STATUS, Task, TaskId, UpdateTask};
use crate::validation;

/// Ordered task records and a monotonic id generator.
///
/// Ids start at 1 and are never handed out twice, even after a delete.
#[derive(Debug, Default, Clone)]
pub struct TaskStore {
    tasks: Vec<Task>,
    current_id: TaskId,
}

impl TaskStore {
    /// Empty store whose first task will get id 1
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate `input` against `now` and append a new record.
    ///
    /// # Errors
    /// - [`TaskError::MissingField`] if the title or due date is absent or empty
    /// - [`TaskError::InvalidDueDate`] if the due date does not parse or is not after `now`
    pub fn create(&mut self, input: CreateTask, now: DateTime<Utc>) -> TaskResult<Task> {
        let title = input.title.filter(|title| !title.is_empty());
        let due_date = input.due_date.filter(|due_date| !due_date.is_empty());

        let (Some(title), Some(due_date)) = (title, due_date) else {
            return Err(TaskError::MissingField);
        };
        validation::future_due_date(&due_date, now)?;

        self.current_id += 1;
        let task = Task {
            id: self.current_id,
            title,
            description: input.description.unwrap_or_default(),
            due_date,
            status: input
                .status
                .unwrap_or_else(|| DEFAULT_STATUS.to_string()),
        };

        self.tasks.push(task.clone());
        Ok(task)
    }

    /// All records in insertion order
    pub fn list_all(&self) -> &[Task] {
        &self.tasks
    }

    /// Record with `id`, if present
    pub fn find(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Record with `id`, or [`TaskError::NotFound`]
    pub fn get_by_id(&self, id: TaskId) -> TaskResult<&Task> {
        self.find(id).ok_or(TaskError::NotFound(id))
    }

    /// Overwrite the fields supplied in `input` and return the updated record.
    ///
    /// Existence is checked first. A supplied due date that is invalid at
    /// `now` rejects the whole update and leaves the record untouched.
    pub fn update(
        &mut self,
        id: TaskId,
        input: UpdateTask,
        now: DateTime<Utc>,
    ) -> TaskResult<Task> {
        let index = self.position(id)?;
        let changes = input.into_changes(now)?;

        let task = &mut self.tasks[index];
        task.apply_update(changes);
        Ok(task.clone())
    }

    /// Remove the record with `id` permanently
    pub fn delete_by_id(&mut self, id: TaskId) -> TaskResult<()> {
        let index = self.position(id)?;
        self.tasks.remove(index);
        Ok(())
    }

    /// Number of records currently held
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// True when no records are held
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    fn position(&self, id: TaskId) -> TaskResult<usize> {
        self.tasks
            .iter()
            .position(|task| task.id == id)
            .ok_or(TaskError::NotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 18, 12, 0, 0).unwrap()
    }

    fn tomorrow() -> String {
        (now() + Duration::days(1)).to_rfc3339()
    }

    fn input(title: &str) -> CreateTask {
        CreateTask {
            title: Some(title.to_string()),
            due_date: Some(tomorrow()),
            ..Default::default()
        }
    }

    #[test]
    fn test_create_applies_defaults() {
        let mut store = TaskStore::new();

        let task = store.create(input("A"), now()).unwrap();

        assert_eq!(task.id, 1);
        assert_eq!(task.title, "A");
        assert_eq!(task.description, "");
        assert_eq!(task.due_date, tomorrow());
        assert_eq!(task.status, "pending");
        assert_eq!(store.list_all(), &[task]);
    }

    #[test]
    fn test_create_stores_due_date_as_sent() {
        let mut store = TaskStore::new();

        for due in [
            "2099-01-01T10:00:00.000Z",
            "2099-01-01",
            "2099-01-01T10:00:00+02:00",
            "Thu, 01 Jan 2099 10:00:00 GMT",
        ] {
            let task = store
                .create(
                    CreateTask {
                        due_date: Some(due.to_string()),
                        ..input("A")
                    },
                    now(),
                )
                .unwrap();
            assert_eq!(task.due_date, due);
        }
    }

    #[test]
    fn test_create_keeps_supplied_optional_fields() {
        let mut store = TaskStore::new();
        let task = store
            .create(
                CreateTask {
                    description: Some("details".to_string()),
                    status: Some("blocked on review".to_string()),
                    ..input("B")
                },
                now(),
            )
            .unwrap();

        assert_eq!(task.description, "details");
        assert_eq!(task.status, "blocked on review");
    }

    #[test]
    fn test_create_requires_title_and_due_date() {
        let mut store = TaskStore::new();

        let missing_title = CreateTask {
            title: None,
            ..input("x")
        };
        let empty_title = CreateTask {
            title: Some(String::new()),
            ..input("x")
        };
        let missing_due = CreateTask {
            due_date: None,
            ..input("x")
        };
        let empty_due = CreateTask {
            due_date: Some(String::new()),
            ..input("x")
        };

        for case in [missing_title, empty_title, missing_due, empty_due] {
            assert_eq!(store.create(case, now()), Err(TaskError::MissingField));
        }
        assert!(store.is_empty());
    }

    #[test]
    fn test_missing_field_wins_over_bad_due_date() {
        let mut store = TaskStore::new();
        let result = store.create(
            CreateTask {
                title: None,
                due_date: Some("garbage".to_string()),
                ..Default::default()
            },
            now(),
        );

        assert_eq!(result, Err(TaskError::MissingField));
    }

    #[test]
    fn test_create_rejects_past_or_unparseable_due_date() {
        let mut store = TaskStore::new();

        for due in ["2026-10-17", "not a date", "2026-10-18T12:00:00Z"] {
            let result = store.create(
                CreateTask {
                    due_date: Some(due.to_string()),
                    ..input("A")
                },
                now(),
            );
            assert_eq!(result, Err(TaskError::InvalidDueDate), "due date {due}");
        }
        assert!(store.is_empty());
    }

    #[test]
    fn test_failed_create_does_not_consume_an_id() {
        let mut store = TaskStore::new();
        let _ = store.create(CreateTask::default(), now());

        let task = store.create(input("A"), now()).unwrap();
        assert_eq!(task.id, 1);
    }

    #[test]
    fn test_ids_increase_and_are_never_reused() {
        let mut store = TaskStore::new();
        let first = store.create(input("A"), now()).unwrap();
        let second = store.create(input("B"), now()).unwrap();
        store.delete_by_id(second.id).unwrap();

        let third = store.create(input("C"), now()).unwrap();

        assert_eq!((first.id, second.id, third.id), (1, 2, 3));
    }

    #[test]
    fn test_get_by_id() {
        let mut store = TaskStore::new();
        let created = store.create(input("A"), now()).unwrap();

        assert_eq!(store.get_by_id(created.id), Ok(&created));
        assert_eq!(store.get_by_id(99), Err(TaskError::NotFound(99)));
    }

    #[test]
    fn test_update_overwrites_with_empty_strings() {
        let mut store = TaskStore::new();
        let created = store
            .create(
                CreateTask {
                    description: Some("details".to_string()),
                    ..input("A")
                },
                now(),
            )
            .unwrap();

        let updated = store
            .update(
                created.id,
                UpdateTask {
                    title: Some(String::new()),
                    description: Some(String::new()),
                    ..Default::default()
                },
                now(),
            )
            .unwrap();

        assert_eq!(updated.title, "");
        assert_eq!(updated.description, "");
        assert_eq!(updated.status, "pending");
        assert_eq!(store.get_by_id(created.id), Ok(&updated));
    }

    #[test]
    fn test_update_with_no_fields_is_a_no_op() {
        let mut store = TaskStore::new();
        let created = store.create(input("A"), now()).unwrap();

        let updated = store
            .update(created.id, UpdateTask::default(), now())
            .unwrap();

        assert_eq!(updated, created);
    }

    #[test]
    fn test_update_stores_due_date_as_sent() {
        let mut store = TaskStore::new();
        let created = store.create(input("A"), now()).unwrap();

        let updated = store
            .update(
                created.id,
                UpdateTask {
                    due_date: Some("2099-06-30".to_string()),
                    ..Default::default()
                },
                now(),
            )
            .unwrap();

        assert_eq!(updated.due_date, "2099-06-30");
        assert_eq!(updated.title, "A");
    }

    #[test]
    fn test_update_accepts_any_status_text() {
        let mut store = TaskStore::new();
        let created = store.create(input("A"), now()).unwrap();

        let updated = store
            .update(
                created.id,
                UpdateTask {
                    status: Some("🦀 whatever".to_string()),
                    ..Default::default()
                },
                now(),
            )
            .unwrap();

        assert_eq!(updated.status, "🦀 whatever");
    }

    #[test]
    fn test_update_with_bad_due_date_leaves_record_untouched() {
        let mut store = TaskStore::new();
        let created = store.create(input("A"), now()).unwrap();

        let result = store.update(
            created.id,
            UpdateTask {
                title: Some("changed".to_string()),
                due_date: Some("2020-01-01".to_string()),
                ..Default::default()
            },
            now(),
        );

        assert_eq!(result, Err(TaskError::InvalidDueDate));
        assert_eq!(store.get_by_id(created.id), Ok(&created));
    }

    #[test]
    fn test_update_checks_existence_before_due_date() {
        let mut store = TaskStore::new();
        let result = store.update(
            5,
            UpdateTask {
                due_date: Some("garbage".to_string()),
                ..Default::default()
            },
            now(),
        );

        assert_eq!(result, Err(TaskError::NotFound(5)));
    }

    #[test]
    fn test_delete_is_not_idempotent() {
        let mut store = TaskStore::new();
        let created = store.create(input("A"), now()).unwrap();

        assert_eq!(store.delete_by_id(created.id), Ok(()));
        assert_eq!(
            store.delete_by_id(created.id),
            Err(TaskError::NotFound(created.id))
        );
        assert_eq!(
            store.get_by_id(created.id),
            Err(TaskError::NotFound(created.id))
        );
    }

    #[test]
    fn test_list_preserves_insertion_order_after_delete() {
        let mut store = TaskStore::new();
        let first = store.create(input("first"), now()).unwrap();
        let second = store.create(input("second"), now()).unwrap();
        let third = store.create(input("third"), now()).unwrap();

        store.delete_by_id(first.id).unwrap();

        assert_eq!(store.list_all(), &[second, third]);
        assert_eq!(store.len(), 2);
    }
}
