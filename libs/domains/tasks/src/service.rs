use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use crate::error::{TaskError, TaskResult};
use crate::models::{CreateTask, Task, TaskStatus};
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

    /// List every task, oldest first
    pub async fn list_tasks(&self) -> TaskResult<Vec<Task>> {
        self.repository.list().await
    }

    /// Create a new task with validation
    #[instrument(skip(self, input), fields(task_title = %input.title))]
    pub async fn create_task(&self, input: CreateTask) -> TaskResult<Task> {
        // Validate input before touching the store
        input
            .validate()
            .map_err(|e| TaskError::Validation(e.to_string()))?;

        self.repository.create(input).await
    }

    /// Move a task to a new status
    ///
    /// Any status may move to any other status, including itself.
    /// Fails with NotFound if the id has no record.
    #[instrument(skip(self), fields(task_id = %id, status = %status))]
    pub async fn update_status(&self, id: Uuid, status: TaskStatus) -> TaskResult<Task> {
        self.repository.update_status(id, status).await
    }

    /// Delete a task
    ///
    /// The store reports whether a row was removed; a silent miss is
    /// converted into an observable NotFound here.
    #[instrument(skip(self), fields(task_id = %id))]
    pub async fn delete_task(&self, id: Uuid) -> TaskResult<()> {
        let deleted = self.repository.delete(id).await?;

        if !deleted {
            return Err(TaskError::NotFound(id));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockTaskRepository;
    use mockall::predicate::eq;

    #[tokio::test]
    async fn test_delete_missing_task_returns_not_found() {
        let mut mock_repo = MockTaskRepository::new();
        let id = Uuid::now_v7();

        mock_repo
            .expect_delete()
            .with(eq(id))
            .returning(|_| Ok(false));

        let service = TaskService::new(mock_repo);
        let result = service.delete_task(id).await;

        assert!(matches!(result, Err(TaskError::NotFound(missing)) if missing == id));
    }

    #[tokio::test]
    async fn test_delete_existing_task_succeeds() {
        let mut mock_repo = MockTaskRepository::new();
        let id = Uuid::now_v7();

        mock_repo
            .expect_delete()
            .with(eq(id))
            .returning(|_| Ok(true));

        let service = TaskService::new(mock_repo);
        assert!(service.delete_task(id).await.is_ok());
    }

    #[tokio::test]
    async fn test_create_with_empty_title_never_reaches_store() {
        // No expectation on create: the mock panics if it is called
        let mock_repo = MockTaskRepository::new();
        let service = TaskService::new(mock_repo);

        let result = service
            .create_task(CreateTask {
                title: String::new(),
                description: "2%".to_string(),
            })
            .await;

        assert!(matches!(result, Err(TaskError::Validation(_))));
    }

    #[tokio::test]
    async fn test_create_with_empty_description_never_reaches_store() {
        let mock_repo = MockTaskRepository::new();
        let service = TaskService::new(mock_repo);

        let result = service
            .create_task(CreateTask {
                title: "Buy milk".to_string(),
                description: String::new(),
            })
            .await;

        assert!(matches!(result, Err(TaskError::Validation(_))));
    }

    #[tokio::test]
    async fn test_create_valid_task_delegates_to_store() {
        let mut mock_repo = MockTaskRepository::new();

        mock_repo
            .expect_create()
            .returning(|input| Ok(Task::new(input)));

        let service = TaskService::new(mock_repo);
        let task = service
            .create_task(CreateTask {
                title: "Buy milk".to_string(),
                description: "2%".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(task.title, "Buy milk");
        assert_eq!(task.status, TaskStatus::Pending);
    }

    #[tokio::test]
    async fn test_update_status_missing_task_returns_not_found() {
        let mut mock_repo = MockTaskRepository::new();
        let id = Uuid::now_v7();

        mock_repo
            .expect_update_status()
            .with(eq(id), eq(TaskStatus::Done))
            .returning(|missing, _| Err(TaskError::NotFound(missing)));

        let service = TaskService::new(mock_repo);
        let result = service.update_status(id, TaskStatus::Done).await;

        assert!(matches!(result, Err(TaskError::NotFound(missing)) if missing == id));
    }
}
