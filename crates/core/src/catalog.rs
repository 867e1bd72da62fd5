//! The built-in skill catalog.
//!
//! Reference data only: skills, lessons, and landing-page testimonials are
//! compiled in and never mutated at runtime. Lesson content lives in
//! `content/*.md` next to this crate and is embedded with `include_str!`.

use crate::model::{Category, Difficulty, Lesson, LessonId, Skill, SkillId, Testimonial};

/// Owns the skill list and testimonials and answers lookups against them.
#[derive(Clone, Debug)]
pub struct Catalog {
    skills: Vec<Skill>,
    testimonials: Vec<Testimonial>,
}

impl Catalog {
    /// The compiled-in data set.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            skills: builtin_skills(),
            testimonials: builtin_testimonials(),
        }
    }

    /// All skills in display order.
    #[must_use]
    pub fn skills(&self) -> &[Skill] {
        &self.skills
    }

    /// Look up a skill by id.
    #[must_use]
    pub fn skill(&self, id: &SkillId) -> Option<&Skill> {
        self.skills.iter().find(|skill| &skill.id == id)
    }

    /// Landing-page testimonials.
    #[must_use]
    pub fn testimonials(&self) -> &[Testimonial] {
        &self.testimonials
    }

    /// Skills per category, in `Category::ALL` order. Categories without
    /// skills are included with a count of zero.
    #[must_use]
    pub fn category_counts(&self) -> Vec<(Category, usize)> {
        Category::ALL
            .iter()
            .map(|category| {
                let count = self
                    .skills
                    .iter()
                    .filter(|skill| skill.category == *category)
                    .count();
                (*category, count)
            })
            .collect()
    }

    /// Total number of lessons across all skills.
    #[must_use]
    pub fn total_lessons(&self) -> usize {
        self.skills.iter().map(|skill| skill.lessons.len()).sum()
    }
}

fn lesson(id: &str, title: &str, order: u32, content: &str) -> Lesson {
    Lesson {
        id: LessonId::new(id),
        title: title.to_string(),
        content: content.to_string(),
        order,
    }
}

#[allow(clippy::too_many_lines)]
fn builtin_skills() -> Vec<Skill> {
    vec![
        Skill {
            id: SkillId::new("rust-fundamentals"),
            title: "Rust Fundamentals".to_string(),
            description: "Ownership, borrowing, and the type system that makes Rust programs \
                          fast and safe"
                .to_string(),
            category: Category::Programming,
            difficulty: Difficulty::Beginner,
            duration: "2 hours".to_string(),
            icon: "code".to_string(),
            lessons: vec![
                lesson(
                    "rust-1",
                    "Getting Started with Rust",
                    1,
                    include_str!("../content/rust-1.md"),
                ),
                lesson(
                    "rust-2",
                    "Ownership and Borrowing",
                    2,
                    include_str!("../content/rust-2.md"),
                ),
                lesson(
                    "rust-3",
                    "Structs, Enums, and Pattern Matching",
                    3,
                    include_str!("../content/rust-3.md"),
                ),
            ],
        },
        Skill {
            id: SkillId::new("rust-async"),
            title: "Async Rust".to_string(),
            description: "Futures, the Tokio runtime, and the patterns that keep concurrent \
                          code correct"
                .to_string(),
            category: Category::Programming,
            difficulty: Difficulty::Advanced,
            duration: "1.5 hours".to_string(),
            icon: "bolt".to_string(),
            lessons: vec![
                lesson(
                    "rust-async-1",
                    "Futures and the Async Model",
                    1,
                    include_str!("../content/rust-async-1.md"),
                ),
                lesson(
                    "rust-async-2",
                    "Tokio Tasks and Channels",
                    2,
                    include_str!("../content/rust-async-2.md"),
                ),
            ],
        },
        Skill {
            id: SkillId::new("git-essentials"),
            title: "Git Essentials".to_string(),
            description: "Commits, branches, and the habits that keep project history useful"
                .to_string(),
            category: Category::DevOps,
            difficulty: Difficulty::Beginner,
            duration: "1 hour".to_string(),
            icon: "branch".to_string(),
            lessons: vec![
                lesson(
                    "git-1",
                    "Commits and History",
                    1,
                    include_str!("../content/git-1.md"),
                ),
                lesson(
                    "git-2",
                    "Branching and Merging",
                    2,
                    include_str!("../content/git-2.md"),
                ),
            ],
        },
        Skill {
            id: SkillId::new("sql-foundations"),
            title: "SQL Foundations".to_string(),
            description: "Queries, joins, and aggregation for answering real questions from \
                          relational data"
                .to_string(),
            category: Category::Data,
            difficulty: Difficulty::Beginner,
            duration: "1.5 hours".to_string(),
            icon: "database".to_string(),
            lessons: vec![
                lesson(
                    "sql-1",
                    "Queries and Filtering",
                    1,
                    include_str!("../content/sql-1.md"),
                ),
                lesson(
                    "sql-2",
                    "Joins and Aggregation",
                    2,
                    include_str!("../content/sql-2.md"),
                ),
            ],
        },
        Skill {
            id: SkillId::new("kubernetes-operations"),
            title: "Kubernetes Operations".to_string(),
            description: "Deployments, services, and the declarative model behind running \
                          containers in production"
                .to_string(),
            category: Category::DevOps,
            difficulty: Difficulty::Advanced,
            duration: "2.5 hours".to_string(),
            icon: "ship".to_string(),
            lessons: vec![
                lesson(
                    "k8s-1",
                    "Pods and Deployments",
                    1,
                    include_str!("../content/k8s-1.md"),
                ),
                lesson(
                    "k8s-2",
                    "Services and Ingress",
                    2,
                    include_str!("../content/k8s-2.md"),
                ),
            ],
        },
        Skill {
            id: SkillId::new("cloud-networking"),
            title: "Cloud Networking".to_string(),
            description: "VPCs, load balancers, and DNS, the plumbing every cloud deployment \
                          stands on"
                .to_string(),
            category: Category::Cloud,
            difficulty: Difficulty::Intermediate,
            duration: "2 hours".to_string(),
            icon: "cloud".to_string(),
            lessons: vec![
                lesson(
                    "cloud-1",
                    "VPCs and Subnets",
                    1,
                    include_str!("../content/cloud-1.md"),
                ),
                lesson(
                    "cloud-2",
                    "Load Balancers and DNS",
                    2,
                    include_str!("../content/cloud-2.md"),
                ),
            ],
        },
        Skill {
            id: SkillId::new("api-security"),
            title: "API Security".to_string(),
            description: "Authentication, authorization, and the hardening work that keeps \
                          HTTP APIs defensible"
                .to_string(),
            category: Category::Security,
            difficulty: Difficulty::Intermediate,
            duration: "1.5 hours".to_string(),
            icon: "shield".to_string(),
            lessons: vec![
                lesson(
                    "security-1",
                    "Authentication Basics",
                    1,
                    include_str!("../content/security-1.md"),
                ),
                lesson(
                    "security-2",
                    "Hardening HTTP APIs",
                    2,
                    include_str!("../content/security-2.md"),
                ),
            ],
        },
        Skill {
            id: SkillId::new("design-systems"),
            title: "Design Systems".to_string(),
            description: "Tokens, components, and the discipline that keeps product interfaces \
                          coherent"
                .to_string(),
            category: Category::Design,
            difficulty: Difficulty::Beginner,
            duration: "1 hour".to_string(),
            icon: "palette".to_string(),
            lessons: vec![
                lesson(
                    "design-1",
                    "Tokens and Primitives",
                    1,
                    include_str!("../content/design-1.md"),
                ),
                lesson(
                    "design-2",
                    "Component Libraries",
                    2,
                    include_str!("../content/design-2.md"),
                ),
            ],
        },
    ]
}

fn builtin_testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial {
            id: "testimonial-1".to_string(),
            name: "Sara Lindqvist".to_string(),
            role: "Backend Engineer".to_string(),
            quote: "The lessons are short enough to finish over coffee, and the progress \
                    tracking kept me honest about actually finishing the Rust track."
                .to_string(),
            avatar: "SL".to_string(),
        },
        Testimonial {
            id: "testimonial-2".to_string(),
            name: "Marcus Webb".to_string(),
            role: "Platform Engineer".to_string(),
            quote: "I used the Kubernetes course to prep for an internal migration. The \
                    examples are the exact commands I ended up running."
                .to_string(),
            avatar: "MW".to_string(),
        },
        Testimonial {
            id: "testimonial-3".to_string(),
            name: "Priya Raman".to_string(),
            role: "Engineering Manager".to_string(),
            quote: "My whole team works through a skill per sprint. Seeing completion \
                    percentages on the explore page makes it easy to nudge stragglers."
                .to_string(),
            avatar: "PR".to_string(),
        },
    ]
}

// ─── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::{ContentBlock, render};
    use std::collections::HashSet;

    #[test]
    fn skill_ids_are_unique() {
        let catalog = Catalog::builtin();
        let mut seen = HashSet::new();
        for skill in catalog.skills() {
            assert!(seen.insert(skill.id.clone()), "duplicate skill id {}", skill.id);
        }
    }

    #[test]
    fn lesson_ids_are_unique_across_catalog() {
        let catalog = Catalog::builtin();
        let mut seen = HashSet::new();
        for skill in catalog.skills() {
            for lesson in &skill.lessons {
                assert!(
                    seen.insert(lesson.id.clone()),
                    "duplicate lesson id {}",
                    lesson.id
                );
            }
        }
    }

    #[test]
    fn lesson_orders_are_one_based_and_contiguous() {
        let catalog = Catalog::builtin();
        for skill in catalog.skills() {
            for (index, lesson) in skill.lessons.iter().enumerate() {
                assert_eq!(
                    lesson.order,
                    index as u32 + 1,
                    "order gap in {}",
                    skill.id
                );
            }
        }
    }

    #[test]
    fn category_counts_cover_the_skill_list() {
        let catalog = Catalog::builtin();
        let counts = catalog.category_counts();
        assert_eq!(counts.len(), Category::ALL.len());
        let total: usize = counts.iter().map(|(_, count)| count).sum();
        assert_eq!(total, catalog.skills().len());
    }

    #[test]
    fn lookup_finds_known_skill() {
        let catalog = Catalog::builtin();
        let skill = catalog.skill(&SkillId::new("rust-fundamentals")).unwrap();
        assert_eq!(skill.lesson_count(), 3);
        assert!(catalog.skill(&SkillId::new("no-such-skill")).is_none());
    }

    #[test]
    fn catalog_contains_prefix_matching_and_mismatching_families() {
        // The progress counter keys off id prefixes, so the data set keeps
        // one overlapping pair and one mismatched pair to make that
        // behavior observable.
        let catalog = Catalog::builtin();

        let rust = catalog.skill(&SkillId::new("rust-fundamentals")).unwrap();
        assert!(rust.lessons.iter().all(|l| l.id.as_str().starts_with("rust")));
        let sibling = catalog.skill(&SkillId::new("rust-async")).unwrap();
        assert!(sibling.lessons.iter().all(|l| l.id.as_str().starts_with("rust")));

        let k8s = catalog.skill(&SkillId::new("kubernetes-operations")).unwrap();
        assert!(k8s.lessons.iter().all(|l| l.id.as_str().starts_with("k8s")));
    }

    #[test]
    fn every_lesson_renders_without_dropped_code_blocks() {
        // A fence left open swallows the rest of the lesson, so catalog
        // text must close every fence it opens.
        let catalog = Catalog::builtin();
        for skill in catalog.skills() {
            for lesson in &skill.lessons {
                let fence_lines = lesson
                    .content
                    .split('\n')
                    .filter(|line| line.starts_with("```"))
                    .count();
                assert_eq!(fence_lines % 2, 0, "unbalanced fence in {}", lesson.id);
                assert!(!render(&lesson.content).is_empty());
            }
        }
    }

    #[test]
    fn catalog_exercises_every_block_kind() {
        let catalog = Catalog::builtin();
        let mut kinds = HashSet::new();
        for skill in catalog.skills() {
            for lesson in &skill.lessons {
                for block in render(&lesson.content) {
                    kinds.insert(match block {
                        ContentBlock::Heading { .. } => "heading",
                        ContentBlock::Paragraph(_) => "paragraph",
                        ContentBlock::BoldLabel { .. } => "bold-label",
                        ContentBlock::ListItem(_) => "list-item",
                        ContentBlock::CodeBlock { .. } => "code-block",
                        ContentBlock::Spacer => "spacer",
                    });
                }
            }
        }
        for kind in [
            "heading",
            "paragraph",
            "bold-label",
            "list-item",
            "code-block",
            "spacer",
        ] {
            assert!(kinds.contains(kind), "no lesson exercises {kind}");
        }
    }

    #[test]
    fn total_lessons_matches_data_set() {
        assert_eq!(Catalog::builtin().total_lessons(), 17);
    }

    #[test]
    fn testimonials_have_display_fields() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.testimonials().len(), 3);
        for testimonial in catalog.testimonials() {
            assert!(!testimonial.name.is_empty());
            assert!(!testimonial.quote.is_empty());
            assert!(!testimonial.avatar.is_empty());
        }
    }
}
