use skillforge_core::model::{LessonId, Skill, UserProgress};

/// One row of the lesson sidebar outline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LessonOutlineVm {
    pub id: LessonId,
    pub title: String,
    pub order: u32,
    pub completed: bool,
}

#[must_use]
pub fn map_lesson_outline(skill: &Skill, progress: &UserProgress) -> Vec<LessonOutlineVm> {
    skill
        .lessons
        .iter()
        .map(|lesson| LessonOutlineVm {
            id: lesson.id.clone(),
            title: lesson.title.clone(),
            order: lesson.order,
            completed: progress.is_completed(&lesson.id),
        })
        .collect()
}

/// Exact course completion for the lesson-view header, derived from catalog
/// membership rather than the stored per-skill counter (which is a prefix
/// heuristic and can drift).
#[must_use]
pub fn course_percent(outline: &[LessonOutlineVm]) -> u8 {
    if outline.is_empty() {
        return 0;
    }
    let completed = outline.iter().filter(|row| row.completed).count();
    let percent = (completed as f64 * 100.0 / outline.len() as f64).round();
    percent as u8
}

// ─── Tests ─────────────────────────────────────────────────────────────────────
