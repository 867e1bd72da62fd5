#![forbid(unsafe_code)]

pub mod catalog;
pub mod markup;
pub mod model;

pub use catalog::Catalog;
pub use markup::{ContentBlock, HeadingLevel, InlineRun, render};
pub use model::{
    Category, Difficulty, Lesson, LessonId, Skill, SkillId, Testimonial, UserProgress,
};
