use dioxus::prelude::*;
use dioxus_router::Link;
use skillforge_core::model::Category;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{SkillCardVm, map_skill_card};

/// Skill browser: search box, category pills, and the card grid. Filtering
/// is client-side over the mapped view-models.
#[component]
pub fn ExplorerView() -> Element {
    let ctx = use_context::<AppContext>();
    let catalog = ctx.catalog();
    let progress = ctx.progress();
    let mut search = use_signal(String::new);
    let mut category_filter = use_signal(|| None::<Category>);

    let resource = use_resource(move || {
        let catalog = catalog.clone();
        let progress = progress.clone();
        async move {
            let record = progress.get_progress().await;
            let cards = catalog
                .skills()
                .iter()
                .map(|skill| {
                    let percent = record.skill_percent(&skill.id, skill.lesson_count());
                    map_skill_card(skill, percent)
                })
                .collect::<Vec<_>>();
            Ok::<_, ViewError>(cards)
        }
    });

    let state = view_state_from_resource(resource);
    let query = search().trim().to_lowercase();
    let selected_category = category_filter();

    let category_pills = std::iter::once((None, "All"))
        .chain(Category::ALL.iter().map(|c| (Some(*c), c.label())))
        .map(|(value, label)| {
            let active = selected_category == value;
            let class = if active {
                "filter-pill filter-pill--active"
            } else {
                "filter-pill"
            };
            rsx! {
                button {
                    class: "{class}",
                    r#type: "button",
                    onclick: move |_| category_filter.set(value),
                    "{label}"
                }
            }
        });

    rsx! {
        div { class: "page explorer-page",
            header { class: "view-header",
                h2 { class: "view-title", "Explore Skills" }
                p { class: "view-subtitle", "Pick a skill and work through its lessons in order." }
            }

            div { class: "explorer-search",
                input {
                    class: "explorer-search-input",
                    r#type: "text",
                    placeholder: "Search skills...",
                    value: "{search()}",
                    oninput: move |evt| search.set(evt.value()),
                }
                if !search().is_empty() {
                    button {
                        class: "explorer-search-clear",
                        r#type: "button",
                        onclick: move |_| search.set(String::new()),
                        "×"
                    }
                }
            }
            div { class: "filter-pills", {category_pills} }

            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Error(err) => rsx! {
                    p { "{err.message()}" }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| {
                            let mut resource = resource;
                            resource.restart();
                        },
                        "Retry"
                    }
                },
                ViewState::Ready(cards) => {
                    let visible = cards
                        .iter()
                        .filter(|card| {
                            card.matches_query(&query) && card.matches_category(selected_category)
                        })
                        .cloned()
                        .collect::<Vec<_>>();
                    let skill_cards = visible.iter().map(skill_card);
                    rsx! {
                        if visible.is_empty() {
                            p { class: "explorer-empty", "No skills found. Try a different search or category." }
                        } else {
                            div { class: "skill-grid", {skill_cards} }
                        }
                    }
                }
            }
        }
    }
}

fn skill_card(card: &SkillCardVm) -> Element {
    let skill_id = card.id.to_string();
    let title = card.title.clone();
    let description = card.description.clone();
    let duration = card.duration.clone();
    let glyph = card.glyph;
    let category_label = card.category_label;
    let category_class = card.category_badge_class;
    let difficulty_label = card.difficulty_label;
    let difficulty_class = card.difficulty_badge_class;
    let lesson_count = card.lesson_count;
    let percent = card.percent;
    // The heuristic counter can exceed the lesson total; keep the bar sane.
    let bar_width = percent.min(100);

    rsx! {
        Link { class: "skill-card", to: Route::Lesson { skill_id },
            div { class: "skill-card-header",
                span { class: "skill-icon", "{glyph}" }
                div { class: "skill-badges",
                    span { class: "{category_class}", "{category_label}" }
                    span { class: "{difficulty_class}", "{difficulty_label}" }
                }
            }
            h3 { class: "skill-title", "{title}" }
            p { class: "skill-description", "{description}" }
            div { class: "skill-meta",
                span { class: "skill-duration", "{duration}" }
                span { class: "skill-lessons",
                    if lesson_count == 1 { "1 lesson" } else { "{lesson_count} lessons" }
                }
            }
            if percent > 0 {
                div { class: "progress-row",
                    div { class: "progress-track",
                        div {
                            class: "progress-fill",
                            style: "width: {bar_width}%",
                        }
                    }
                    span { class: "progress-label", "{percent}%" }
                }
            }
        }
    }
}
