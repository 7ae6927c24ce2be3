//! Integration tests for the Tasks domain
//!
//! These tests run against real PostgreSQL via testcontainers to ensure:
//! - The migration schema matches the entity
//! - Enum values round-trip through the task_status column
//! - Ordering, deletes, and status updates behave as on the wire
//!
//! They are ignored by default because they need a Docker daemon:
//! `cargo test -p domain_tasks -- --ignored`

use domain_tasks::*;
use migration::Migrator;
use test_utils::{TestDataBuilder, TestDatabase};
use uuid::Uuid;

fn input(builder: &TestDataBuilder, suffix: &str) -> CreateTask {
    CreateTask {
        title: builder.name("task", suffix),
        description: format!("description for {}", suffix),
    }
}

#[tokio::test]
#[ignore] // Requires a Docker daemon for the Postgres container
async fn test_create_and_get_task() {
    let db = TestDatabase::with_migrator::<Migrator>().await;
    let repo = PgTaskRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("create_and_get");

    let created = repo.create(input(&builder, "main")).await.unwrap();

    assert_eq!(created.title, builder.name("task", "main"));
    assert_eq!(created.status, TaskStatus::Pending);
    assert_eq!(created.created_at, created.updated_at);

    let retrieved = repo.get_by_id(created.id).await.unwrap();
    let retrieved = retrieved.expect("task should exist");

    assert_eq!(retrieved.id, created.id);
    assert_eq!(retrieved.title, created.title);
    assert_eq!(retrieved.status, TaskStatus::Pending);
}

#[tokio::test]
#[ignore] // Requires a Docker daemon for the Postgres container
async fn test_list_tasks_in_insertion_order() {
    let db = TestDatabase::with_migrator::<Migrator>().await;
    let repo = PgTaskRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("list_order");

    let mut ids = Vec::new();
    for i in 0..3 {
        let created = repo
            .create(input(&builder, &format!("task-{}", i)))
            .await
            .unwrap();
        ids.push(created.id);
    }

    let tasks = repo.list().await.unwrap();
    let listed: Vec<Uuid> = tasks.iter().map(|t| t.id).collect();

    assert_eq!(listed, ids, "list must preserve insertion order");
}

#[tokio::test]
#[ignore] // Requires a Docker daemon for the Postgres container
async fn test_update_status_round_trips_enum() {
    let db = TestDatabase::with_migrator::<Migrator>().await;
    let repo = PgTaskRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("status_roundtrip");

    let created = repo.create(input(&builder, "main")).await.unwrap();

    for status in [TaskStatus::InProgress, TaskStatus::Done, TaskStatus::Pending] {
        let updated = repo.update_status(created.id, status).await.unwrap();
        assert_eq!(updated.status, status);

        let fetched = repo.get_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(fetched.status, status);
        assert_eq!(fetched.title, created.title);
        assert_eq!(fetched.created_at, created.created_at);
        assert!(fetched.updated_at >= created.updated_at);
    }
}

#[tokio::test]
#[ignore] // Requires a Docker daemon for the Postgres container
async fn test_update_status_missing_task() {
    let db = TestDatabase::with_migrator::<Migrator>().await;
    let repo = PgTaskRepository::new(db.connection());

    let result = repo.update_status(Uuid::new_v4(), TaskStatus::Done).await;
    assert!(matches!(result, Err(TaskError::NotFound(_))));
}

#[tokio::test]
#[ignore] // Requires a Docker daemon for the Postgres container
async fn test_delete_task() {
    let db = TestDatabase::with_migrator::<Migrator>().await;
    let repo = PgTaskRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("delete");

    let created = repo.create(input(&builder, "to-delete")).await.unwrap();

    let deleted = repo.delete(created.id).await.unwrap();
    assert!(deleted, "delete should return true");

    let retrieved = repo.get_by_id(created.id).await.unwrap();
    assert!(retrieved.is_none(), "task should be deleted");

    let deleted_again = repo.delete(created.id).await.unwrap();
    assert!(!deleted_again, "second delete should return false");
}

#[tokio::test]
#[ignore] // Requires a Docker daemon for the Postgres container
async fn test_service_over_postgres() {
    let db = TestDatabase::with_migrator::<Migrator>().await;
    let service = TaskService::new(PgTaskRepository::new(db.connection()));
    let builder = TestDataBuilder::from_test_name("service_pg");

    // Validation failures never reach the store
    let result = service
        .create_task(CreateTask {
            title: String::new(),
            description: "x".to_string(),
        })
        .await;
    assert!(matches!(result, Err(TaskError::Validation(_))));
    assert!(service.list_tasks().await.unwrap().is_empty());

    // Full lifecycle through the service
    let task = service.create_task(input(&builder, "lifecycle")).await.unwrap();
    let updated = service
        .update_status(task.id, TaskStatus::Done)
        .await
        .unwrap();
    assert_eq!(updated.status, TaskStatus::Done);

    service.delete_task(task.id).await.unwrap();
    let result = service.delete_task(task.id).await;
    assert!(matches!(result, Err(TaskError::NotFound(_))));
}
