mod lesson_vm;
mod skill_vm;

pub use lesson_vm::{LessonOutlineVm, course_percent, map_lesson_outline};
pub use skill_vm::{SkillCardVm, map_skill_card};
