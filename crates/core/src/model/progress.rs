use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::model::ids::{LessonId, SkillId};

/// Locally persisted completion state.
///
/// This is the single record the app stores between runs. The serialized
/// field names (`completedLessons`, `currentLesson`, `skillProgress`) are the
/// on-disk format and must not change.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProgress {
    completed_lessons: Vec<LessonId>,
    current_lesson: Option<LessonId>,
    skill_progress: HashMap<SkillId, u32>,
}

impl UserProgress {
    /// Lessons completed so far, in the order they were first completed.
    #[must_use]
    pub fn completed_lessons(&self) -> &[LessonId] {
        &self.completed_lessons
    }

    /// The lesson most recently acted upon, if any.
    #[must_use]
    pub fn current_lesson(&self) -> Option<&LessonId> {
        self.current_lesson.as_ref()
    }

    /// Per-skill completion counters. See `complete_lesson` for how these
    /// are derived.
    #[must_use]
    pub fn skill_progress(&self) -> &HashMap<SkillId, u32> {
        &self.skill_progress
    }

    /// Returns true if `lesson_id` has been completed.
    #[must_use]
    pub fn is_completed(&self, lesson_id: &LessonId) -> bool {
        self.completed_lessons.contains(lesson_id)
    }

    /// Marks `lesson_id` completed and recomputes the counter for `skill_id`.
    ///
    /// Completing the same lesson twice is safe: the lesson is recorded once,
    /// while `current_lesson` and the counter are refreshed on every call.
    ///
    /// The per-skill counter is a prefix heuristic, not an exact membership
    /// test: it counts completed lessons whose id starts with the skill id's
    /// first hyphen token. `rust-fundamentals` therefore also counts lessons
    /// of a `rust-async` sibling, while `kubernetes-operations` never matches
    /// its own `k8s-*` lessons. The heuristic is kept as-is so counters in
    /// existing progress files stay meaningful; views that need an exact
    /// figure check `is_completed` against the catalog instead.
    pub fn complete_lesson(&mut self, lesson_id: &LessonId, skill_id: &SkillId) {
        if !self.completed_lessons.contains(lesson_id) {
            self.completed_lessons.push(lesson_id.clone());
        }
        self.current_lesson = Some(lesson_id.clone());

        let prefix = skill_id.family_prefix();
        let count = self
            .completed_lessons
            .iter()
            .filter(|id| id.as_str().starts_with(prefix))
            .count() as u32;
        self.skill_progress.insert(skill_id.clone(), count);
    }

    /// Completion percentage for a skill with `total_lessons` lessons,
    /// rounded to the nearest whole number.
    ///
    /// Returns 0 for skills with no recorded counter and for
    /// `total_lessons == 0`. Because the counter is a prefix heuristic the
    /// result can exceed 100 when sibling skills share a prefix.
    #[must_use]
    pub fn skill_percent(&self, skill_id: &SkillId, total_lessons: u32) -> u8 {
        if total_lessons == 0 {
            return 0;
        }
        let completed = self.skill_progress.get(skill_id).copied().unwrap_or(0);
        let percent = (f64::from(completed) * 100.0 / f64::from(total_lessons)).round();
        percent as u8
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────
