use skillforge_core::model::{Category, Difficulty, Skill, SkillId};

/// Everything the explorer needs to draw one skill card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkillCardVm {
    pub id: SkillId,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub category_label: &'static str,
    pub category_badge_class: &'static str,
    pub difficulty_label: &'static str,
    pub difficulty_badge_class: &'static str,
    pub duration: String,
    pub glyph: &'static str,
    pub lesson_count: u32,
    pub percent: u8,
}

#[must_use]
pub fn map_skill_card(skill: &Skill, percent: u8) -> SkillCardVm {
    SkillCardVm {
        id: skill.id.clone(),
        title: skill.title.clone(),
        description: skill.description.clone(),
        category: skill.category,
        category_label: skill.category.label(),
        category_badge_class: category_badge_class(skill.category),
        difficulty_label: skill.difficulty.label(),
        difficulty_badge_class: difficulty_badge_class(skill.difficulty),
        duration: skill.duration.clone(),
        glyph: icon_glyph(&skill.icon),
        lesson_count: skill.lesson_count(),
        percent,
    }
}

impl SkillCardVm {
    /// Case-insensitive match against title and description. An empty query
    /// matches everything.
    #[must_use]
    pub fn matches_query(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        self.title.to_lowercase().contains(query)
            || self.description.to_lowercase().contains(query)
    }

    /// `None` means the "All" pill is selected.
    #[must_use]
    pub fn matches_category(&self, filter: Option<Category>) -> bool {
        filter.is_none_or(|category| self.category == category)
    }
}

fn category_badge_class(category: Category) -> &'static str {
    match category {
        Category::Programming => "badge badge-programming",
        Category::Cloud => "badge badge-cloud",
        Category::DevOps => "badge badge-devops",
        Category::Data => "badge badge-data",
        Category::Design => "badge badge-design",
        Category::Security => "badge badge-security",
    }
}

fn difficulty_badge_class(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Beginner => "badge badge-beginner",
        Difficulty::Intermediate => "badge badge-intermediate",
        Difficulty::Advanced => "badge badge-advanced",
    }
}

/// Catalog icon names are free-form strings; unknown names fall back to the
/// book glyph so a typo in catalog data never blanks a card.
#[must_use]
pub fn icon_glyph(name: &str) -> &'static str {
    match name {
        "code" => "\u{1F4BB}",     // laptop
        "bolt" => "\u{26A1}",      // high voltage
        "branch" => "\u{1F33F}",   // herb
        "database" => "\u{1F5C3}", // card file box
        "ship" => "\u{1F6A2}",     // ship
        "cloud" => "\u{2601}",     // cloud
        "shield" => "\u{1F6E1}",   // shield
        "palette" => "\u{1F3A8}",  // artist palette
        _ => "\u{1F4D8}",          // blue book
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use skillforge_core::model::{Lesson, LessonId};

    use super::*;

    fn sample_skill() -> Skill {
        Skill {
            id: SkillId::new("rust-fundamentals"),
            title: "Rust Fundamentals".to_string(),
            description: "Ownership and borrowing".to_string(),
            category: Category::Programming,
            difficulty: Difficulty::Beginner,
            duration: "2 hours".to_string(),
            icon: "code".to_string(),
            lessons: vec![Lesson {
                id: LessonId::new("rust-1"),
                title: "Getting Started".to_string(),
                content: "# Getting Started".to_string(),
                order: 1,
            }],
        }
    }

    #[test]
    fn maps_labels_and_counts() {
        let vm = map_skill_card(&sample_skill(), 33);
        assert_eq!(vm.title, "Rust Fundamentals");
        assert_eq!(vm.category_label, "Programming");
        assert_eq!(vm.difficulty_label, "Beginner");
        assert_eq!(vm.lesson_count, 1);
        assert_eq!(vm.percent, 33);
    }

    #[test]
    fn query_matches_title_and_description() {
        let vm = map_skill_card(&sample_skill(), 0);
        assert!(vm.matches_query(""));
        assert!(vm.matches_query("rust"));
        assert!(vm.matches_query("borrowing"));
        assert!(!vm.matches_query("kubernetes"));
    }

    #[test]
    fn category_filter_respects_selection() {
        let vm = map_skill_card(&sample_skill(), 0);
        assert!(vm.matches_category(None));
        assert!(vm.matches_category(Some(Category::Programming)));
        assert!(!vm.matches_category(Some(Category::Security)));
    }

    #[test]
    fn unknown_icon_falls_back_to_book() {
        assert_eq!(icon_glyph("code"), "\u{1F4BB}");
        assert_eq!(icon_glyph("no-such-icon"), "\u{1F4D8}");
    }
}
