//! Progress tracking over a [`ProgressRepository`].
//!
//! All methods are infallible from the caller's point of view: failures in
//! the backing store fall back to an empty record (reads) or are dropped
//! (writes), and every failure is reported through the configured
//! [`ProgressEventSink`]. The UI stays usable with no store at all.

use std::sync::Arc;

use skillforge_core::model::{LessonId, SkillId, UserProgress};
use storage::ProgressRepository;
use tokio::sync::Mutex;

use crate::sink::{ProgressEventSink, StorageOp, TracingSink};

/// Lesson progress operations shared by every view.
#[derive(Clone)]
pub struct ProgressService {
    repo: Arc<dyn ProgressRepository>,
    sink: Arc<dyn ProgressEventSink>,
    // Serializes read-modify-write cycles so concurrent completions from
    // different views cannot drop each other's lessons.
    write_lock: Arc<Mutex<()>>,
}

impl ProgressService {
    #[must_use]
    pub fn new(repo: Arc<dyn ProgressRepository>) -> Self {
        Self::with_sink(repo, Arc::new(TracingSink))
    }

    #[must_use]
    pub fn with_sink(repo: Arc<dyn ProgressRepository>, sink: Arc<dyn ProgressEventSink>) -> Self {
        Self {
            repo,
            sink,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Returns the stored progress record, or an empty one when the store
    /// is missing, empty, or unreadable.
    pub async fn get_progress(&self) -> UserProgress {
        self.load_or_default().await
    }

    /// Persists `progress`, swallowing and reporting any store failure.
    pub async fn save_progress(&self, progress: &UserProgress) {
        if let Err(err) = self.repo.save(progress).await {
            self.sink.storage_failure(StorageOp::Save, &err);
        }
    }

    /// Records `lesson_id` as completed under `skill_id` and persists the
    /// updated record. Completing the same lesson twice is a no-op.
    pub async fn complete_lesson(&self, lesson_id: &LessonId, skill_id: &SkillId) {
        let _guard = self.write_lock.lock().await;
        let mut progress = self.load_or_default().await;
        progress.complete_lesson(lesson_id, skill_id);
        self.save_progress(&progress).await;
    }

    /// Completion percentage for `skill_id` given the skill's lesson count.
    pub async fn skill_percent(&self, skill_id: &SkillId, total_lessons: u32) -> u8 {
        self.load_or_default()
            .await
            .skill_percent(skill_id, total_lessons)
    }

    pub async fn is_lesson_completed(&self, lesson_id: &LessonId) -> bool {
        self.load_or_default().await.is_completed(lesson_id)
    }

    /// Deletes the stored record, swallowing and reporting any store failure.
    pub async fn clear_progress(&self) {
        let _guard = self.write_lock.lock().await;
        if let Err(err) = self.repo.clear().await {
            self.sink.storage_failure(StorageOp::Clear, &err);
        }
    }

    async fn load_or_default(&self) -> UserProgress {
        match self.repo.load().await {
            Ok(Some(progress)) => progress,
            Ok(None) => UserProgress::default(),
            Err(err) => {
                self.sink.storage_failure(StorageOp::Load, &err);
                UserProgress::default()
            }
        }
    }
}
