mod ids;
mod progress;
mod skill;

pub use ids::{LessonId, SkillId};
pub use progress::UserProgress;
pub use skill::{Category, Difficulty, Lesson, Skill, Testimonial};
