use chrono::{DateTime, Utc};
use sea_orm::{DeriveActiveEnum, EnumIter};
use serde::{Deserialize, Serialize};
use strum::Display;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Task lifecycle status
///
/// Every directed transition between the three states is permitted,
/// including self-transitions. There is no terminal state.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    Default,
    DeriveActiveEnum,
    EnumIter,
    ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "task_status")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    /// Initial status for every new task
    #[default]
    #[sea_orm(string_value = "PENDING")]
    Pending,
    /// Work has started
    #[sea_orm(string_value = "IN_PROGRESS")]
    InProgress,
    /// Work is finished
    #[sea_orm(string_value = "DONE")]
    Done,
}

/// Task entity - the persisted resource
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique identifier, assigned by the store at creation
    pub id: Uuid,
    /// Task title, immutable after creation
    pub title: String,
    /// Task description, immutable after creation
    pub description: String,
    /// Current status, the only mutable field
    pub status: TaskStatus,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Refreshed on every mutation
    pub updated_at: DateTime<Utc>,
}

/// DTO for creating a new task
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateTask {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    #[validate(length(min = 1, message = "description must not be empty"))]
    pub description: String,
}

/// DTO for moving a task to a new status
///
/// Values outside the enumeration are rejected during deserialization,
/// before any service call.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateTaskStatus {
    pub status: TaskStatus,
}

/// Generic confirmation body for operations without a resource payload
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Task {
    /// Create a new task from a CreateTask DTO
    pub fn new(input: CreateTask) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            title: input.title,
            description: input.description,
            status: TaskStatus::Pending,
            created_at: now,
            updated_at: now,
        }
    }

    /// Move to a new status, refreshing the update stamp
    pub fn apply_status(&mut self, status: TaskStatus) {
        self.status = status;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serializes_to_wire_values() {
        assert_eq!(
            serde_json::to_string(&TaskStatus::Pending).unwrap(),
            "\"PENDING\""
        );
        assert_eq!(
            serde_json::to_string(&TaskStatus::InProgress).unwrap(),
            "\"IN_PROGRESS\""
        );
        assert_eq!(serde_json::to_string(&TaskStatus::Done).unwrap(), "\"DONE\"");
    }

    #[test]
    fn test_status_rejects_unknown_values() {
        assert!(serde_json::from_str::<TaskStatus>("\"INVALID\"").is_err());
        assert!(serde_json::from_str::<TaskStatus>("\"\"").is_err());
        assert!(serde_json::from_str::<TaskStatus>("\"pending\"").is_err());
    }

    #[test]
    fn test_status_defaults_to_pending() {
        assert_eq!(TaskStatus::default(), TaskStatus::Pending);
    }

    #[test]
    fn test_new_task_starts_pending_with_equal_stamps() {
        let task = Task::new(CreateTask {
            title: "Buy milk".to_string(),
            description: "2%".to_string(),
        });

        assert_eq!(task.status, TaskStatus::Pending);
        assert_eq!(task.created_at, task.updated_at);
    }

    #[test]
    fn test_apply_status_refreshes_updated_at_only() {
        let mut task = Task::new(CreateTask {
            title: "Buy milk".to_string(),
            description: "2%".to_string(),
        });
        let created_at = task.created_at;

        task.apply_status(TaskStatus::Done);

        assert_eq!(task.status, TaskStatus::Done);
        assert_eq!(task.created_at, created_at);
        assert!(task.updated_at >= task.created_at);
    }

    #[test]
    fn test_task_serializes_timestamps_in_camel_case() {
        let task = Task::new(CreateTask {
            title: "Buy milk".to_string(),
            description: "2%".to_string(),
        });

        let value = serde_json::to_value(&task).unwrap();
        assert!(value.get("createdAt").is_some());
        assert!(value.get("updatedAt").is_some());
        assert!(value.get("created_at").is_none());
        assert_eq!(value["status"], "PENDING");
    }

    #[test]
    fn test_create_task_validation() {
        let valid = CreateTask {
            title: "Buy milk".to_string(),
            description: "2%".to_string(),
        };
        assert!(valid.validate().is_ok());

        let no_title = CreateTask {
            title: String::new(),
            description: "2%".to_string(),
        };
        assert!(no_title.validate().is_err());

        let no_description = CreateTask {
            title: "Buy milk".to_string(),
            description: String::new(),
        };
        assert!(no_description.validate().is_err());
    }
}
