use async_trait::async_trait;
use database::BaseRepository;
use sea_orm::ActiveValue::Set;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};
use uuid::Uuid;

use crate::{
    entity,
    error::{TaskError, TaskResult},
    models::{CreateTask, Task, TaskStatus},
    repository::TaskRepository,
};

pub struct PgTaskRepository {
    base: BaseRepository<entity::Entity>,
}

impl PgTaskRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }
}

#[async_trait]
impl TaskRepository for PgTaskRepository {
    async fn create(&self, input: CreateTask) -> TaskResult<Task> {
        // Convert CreateTask to ActiveModel (assigns id, stamps, PENDING)
        let active_model: entity::ActiveModel = input.into();

        let model = self.base.insert(active_model).await?;

        tracing::info!(task_id = %model.id, "Created task");
        Ok(model.into())
    }

    async fn get_by_id(&self, id: Uuid) -> TaskResult<Option<Task>> {
        let model = self.base.find_by_id(id).await?;

        Ok(model.map(|m| m.into()))
    }

    async fn list(&self) -> TaskResult<Vec<Task>> {
        // Insertion order: creation stamp ascending, time-ordered v7 id
        // as tiebreaker
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::CreatedAt)
            .order_by_asc(entity::Column::Id)
            .all(self.base.db())
            .await?;

        Ok(models.into_iter().map(|m| m.into()).collect())
    }

    async fn update_status(&self, id: Uuid, status: TaskStatus) -> TaskResult<Task> {
        // Fetch existing task
        let model = self
            .base
            .find_by_id(id)
            .await?
            .ok_or(TaskError::NotFound(id))?;

        // Apply the status change on the domain model
        let mut task: Task = model.into();
        task.apply_status(status);

        // Convert back to ActiveModel for the full-row overwrite
        let active_model = entity::ActiveModel {
            id: Set(task.id),
            title: Set(task.title.clone()),
            description: Set(task.description.clone()),
            status: Set(task.status),
            created_at: Set(task.created_at.into()),
            updated_at: Set(task.updated_at.into()),
        };

        let updated_model = self.base.update(active_model).await?;

        tracing::info!(task_id = %id, status = %status, "Updated task status");
        Ok(updated_model.into())
    }

    async fn delete(&self, id: Uuid) -> TaskResult<bool> {
        let rows_affected = self.base.delete_by_id(id).await?;

        if rows_affected > 0 {
            tracing::info!(task_id = %id, "Deleted task");
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
