use crate::model::ids::{LessonId, SkillId};

//
// ─── CLASSIFICATION ────────────────────────────────────────────────────────────
//

/// Broad topic area a skill belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Programming,
    Cloud,
    DevOps,
    Data,
    Design,
    Security,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 6] = [
        Category::Programming,
        Category::Cloud,
        Category::DevOps,
        Category::Data,
        Category::Design,
        Category::Security,
    ];

    /// Human-readable name.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Category::Programming => "Programming",
            Category::Cloud => "Cloud Computing",
            Category::DevOps => "DevOps",
            Category::Data => "Data Science",
            Category::Design => "Design",
            Category::Security => "Security",
        }
    }
}

/// Self-assessed difficulty of a skill.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    /// Human-readable name.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }
}

//
// ─── CATALOG ENTRIES ───────────────────────────────────────────────────────────
//

/// One unit of content within a skill.
///
/// `order` is the 1-based position in the skill's outline. `content` is raw
/// markup in the dialect understood by `crate::markup::render`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lesson {
    pub id: LessonId,
    pub title: String,
    pub content: String,
    pub order: u32,
}

/// A catalog entry: an ordered set of lessons under one topic.
///
/// Skills are immutable reference data; completion state lives in
/// `UserProgress` and is keyed by id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Skill {
    pub id: SkillId,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub difficulty: Difficulty,
    pub duration: String,
    pub icon: String,
    pub lessons: Vec<Lesson>,
}

impl Skill {
    /// Number of lessons in this skill.
    #[must_use]
    pub fn lesson_count(&self) -> u32 {
        self.lessons.len() as u32
    }

    /// Look up a lesson by id.
    #[must_use]
    pub fn lesson(&self, id: &LessonId) -> Option<&Lesson> {
        self.lessons.iter().find(|lesson| &lesson.id == id)
    }
}

/// Learner quote shown on the landing page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Testimonial {
    pub id: String,
    pub name: String,
    pub role: String,
    pub quote: String,
    pub avatar: String,
}

// ─── Tests ─────────────────────────────────────────────────────────────────────
