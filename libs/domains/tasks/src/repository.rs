use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{TaskError, TaskResult};
use crate::models::{CreateTask, Task, TaskStatus};

/// Repository trait for Task persistence
///
/// Defines the data access interface for tasks. Implementations can use
/// different storage backends (PostgreSQL, in-memory).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Create a new task with a fresh id, PENDING status, and stamps
    async fn create(&self, input: CreateTask) -> TaskResult<Task>;

    /// Get a task by ID; absence is a valid outcome, not an error
    async fn get_by_id(&self, id: Uuid) -> TaskResult<Option<Task>>;

    /// List all tasks in insertion order
    async fn list(&self) -> TaskResult<Vec<Task>>;

    /// Overwrite a task's status, refreshing its update stamp
    async fn update_status(&self, id: Uuid, status: TaskStatus) -> TaskResult<Task>;

    /// Delete a task by ID; returns whether a row was removed
    async fn delete(&self, id: Uuid) -> TaskResult<bool>;
}

/// In-memory implementation of TaskRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryTaskRepository {
    tasks: Arc<RwLock<HashMap<Uuid, Task>>>,
}

impl InMemoryTaskRepository {
    pub fn new() -> Self {
        Self {
            tasks: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn create(&self, input: CreateTask) -> TaskResult<Task> {
        let mut tasks = self.tasks.write().await;

        let task = Task::new(input);
        tasks.insert(task.id, task.clone());

        tracing::info!(task_id = %task.id, "Created task");
        Ok(task)
    }

    async fn get_by_id(&self, id: Uuid) -> TaskResult<Option<Task>> {
        let tasks = self.tasks.read().await;
        Ok(tasks.get(&id).cloned())
    }

    async fn list(&self) -> TaskResult<Vec<Task>> {
        let tasks = self.tasks.read().await;

        let mut result: Vec<Task> = tasks.values().cloned().collect();

        // Insertion order: creation stamp, then the time-ordered v7 id as
        // tiebreaker for tasks created within the same instant
        result.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.id.cmp(&b.id))
        });

        Ok(result)
    }

    async fn update_status(&self, id: Uuid, status: TaskStatus) -> TaskResult<Task> {
        let mut tasks = self.tasks.write().await;

        let task = tasks.get_mut(&id).ok_or(TaskError::NotFound(id))?;
        task.apply_status(status);
        let updated = task.clone();

        tracing::info!(task_id = %id, status = %status, "Updated task status");
        Ok(updated)
    }

    async fn delete(&self, id: Uuid) -> TaskResult<bool> {
        let mut tasks = self.tasks.write().await;

        if tasks.remove(&id).is_some() {
            tracing::info!(task_id = %id, "Deleted task");
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
