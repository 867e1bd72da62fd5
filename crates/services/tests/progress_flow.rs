use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use services::{ProgressEventSink, ProgressService, StorageOp};
use skillforge_core::model::{LessonId, SkillId, UserProgress};
use storage::{InMemoryRepository, ProgressRepository, StorageError};

#[derive(Default)]
struct RecordingSink {
    events: Mutex<Vec<StorageOp>>,
}

impl RecordingSink {
    fn events(&self) -> Vec<StorageOp> {
        self.events.lock().unwrap().clone()
    }
}

impl ProgressEventSink for RecordingSink {
    fn storage_failure(&self, op: StorageOp, _err: &StorageError) {
        self.events.lock().unwrap().push(op);
    }
}

struct FailingRepository;

#[async_trait]
impl ProgressRepository for FailingRepository {
    async fn load(&self) -> Result<Option<UserProgress>, StorageError> {
        Err(StorageError::Backend("disk offline".to_string()))
    }

    async fn save(&self, _progress: &UserProgress) -> Result<(), StorageError> {
        Err(StorageError::Backend("disk offline".to_string()))
    }

    async fn clear(&self) -> Result<(), StorageError> {
        Err(StorageError::Backend("disk offline".to_string()))
    }
}

#[tokio::test]
async fn corrupt_record_reads_as_default_and_reports_load_failure() {
    let repo = InMemoryRepository::new();
    repo.set_raw("{definitely not json");
    let sink = Arc::new(RecordingSink::default());
    let service = ProgressService::with_sink(Arc::new(repo), sink.clone() as Arc<dyn ProgressEventSink>);

    let progress = service.get_progress().await;

    assert_eq!(progress, UserProgress::default());
    assert_eq!(sink.events(), vec![StorageOp::Load]);
}

#[tokio::test]
async fn complete_lesson_on_dead_store_returns_normally() {
    let sink = Arc::new(RecordingSink::default());
    let service = ProgressService::with_sink(Arc::new(FailingRepository), sink.clone() as Arc<dyn ProgressEventSink>);

    service
        .complete_lesson(&LessonId::new("rust-1"), &SkillId::new("rust-fundamentals"))
        .await;

    // The read-modify-write cycle hits the store twice.
    assert_eq!(sink.events(), vec![StorageOp::Load, StorageOp::Save]);
}

#[tokio::test]
async fn clear_on_dead_store_returns_normally() {
    let sink = Arc::new(RecordingSink::default());
    let service = ProgressService::with_sink(Arc::new(FailingRepository), sink.clone() as Arc<dyn ProgressEventSink>);

    service.clear_progress().await;

    assert_eq!(sink.events(), vec![StorageOp::Clear]);
}

#[tokio::test]
async fn healthy_store_never_notifies_the_sink() {
    let sink = Arc::new(RecordingSink::default());
    let service = ProgressService::with_sink(
        Arc::new(InMemoryRepository::new()),
        sink.clone() as Arc<dyn ProgressEventSink>,
    );

    service
        .complete_lesson(&LessonId::new("rust-1"), &SkillId::new("rust-fundamentals"))
        .await;
    service.clear_progress().await;

    assert!(sink.events().is_empty());
}

#[tokio::test]
async fn completions_survive_a_service_restart() {
    let repo = InMemoryRepository::new();
    let lesson = LessonId::new("git-1");

    let first = ProgressService::new(Arc::new(repo.clone()));
    first
        .complete_lesson(&lesson, &SkillId::new("git-essentials"))
        .await;
    drop(first);

    let second = ProgressService::new(Arc::new(repo));
    assert!(second.is_lesson_completed(&lesson).await);
    let progress = second.get_progress().await;
    assert_eq!(progress.current_lesson(), Some(&lesson));
}
