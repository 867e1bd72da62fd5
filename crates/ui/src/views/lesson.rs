use dioxus::prelude::*;
use dioxus_router::Link;
use skillforge_core::markup::{ContentBlock, HeadingLevel, InlineRun, render};
use skillforge_core::model::{LessonId, Skill, SkillId};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{LessonOutlineVm, course_percent, map_lesson_outline};

#[derive(Clone, Debug, PartialEq)]
struct LessonData {
    skill: Skill,
    outline: Vec<LessonOutlineVm>,
    percent: u8,
}

/// Lesson viewer: sidebar outline on the left, rendered lesson content and
/// the mark-complete action on the right.
#[component]
pub fn LessonView(skill_id: String) -> Element {
    let ctx = use_context::<AppContext>();
    let catalog = ctx.catalog();
    let progress = ctx.progress();
    let skill_id = SkillId::new(skill_id);
    // None until the user picks a lesson; the first lesson is shown by default.
    let mut selected = use_signal(|| None::<LessonId>);

    let skill_id_for_resource = skill_id.clone();
    let resource = use_resource(move || {
        let catalog = catalog.clone();
        let progress = progress.clone();
        let skill_id = skill_id_for_resource.clone();
        async move {
            let skill = catalog
                .skill(&skill_id)
                .cloned()
                .ok_or(ViewError::SkillNotFound)?;
            let record = progress.get_progress().await;
            let outline = map_lesson_outline(&skill, &record);
            let percent = course_percent(&outline);
            Ok::<_, ViewError>(LessonData {
                skill,
                outline,
                percent,
            })
        }
    });

    let state = view_state_from_resource(resource);
    rsx! {
        div { class: "page lesson-page",
            Link { class: "back-link", to: Route::Explore {}, "← Back to Explore" }
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
                ViewState::Ready(data) => {
                    let current = selected()
                        .and_then(|id| data.skill.lesson(&id).cloned())
                        .or_else(|| data.skill.lessons.first().cloned());
                    let outline_rows = data.outline.iter().map(|row| {
                        let row_id = row.id.clone();
                        let is_current = current.as_ref().is_some_and(|l| l.id == row.id);
                        let class = if is_current {
                            "outline-row outline-row--current"
                        } else {
                            "outline-row"
                        };
                        let title = row.title.clone();
                        let order = row.order;
                        let completed = row.completed;
                        let mut selected = selected;
                        rsx! {
                            button {
                                class: "{class}",
                                r#type: "button",
                                onclick: move |_| selected.set(Some(row_id.clone())),
                                span { class: "outline-order", "{order}" }
                                span { class: "outline-title", "{title}" }
                                if completed {
                                    span { class: "outline-check", "✓" }
                                }
                            }
                        }
                    });
                    let skill_title = data.skill.title.clone();
                    let percent = data.percent;
                    let lesson_pane = current.as_ref().map(|lesson| {
                        let completed = data
                            .outline
                            .iter()
                            .any(|row| row.id == lesson.id && row.completed);
                        let blocks = render(&lesson.content);
                        let block_views = blocks.iter().map(block_view);
                        let lesson_title = lesson.title.clone();
                        let lesson_id = lesson.id.clone();
                        let next_id = data
                            .outline
                            .iter()
                            .skip_while(|row| row.id != lesson.id)
                            .nth(1)
                            .map(|row| row.id.clone());
                        let ctx = ctx.clone();
                        let skill_id = skill_id.clone();
                        let mut selected = selected;
                        rsx! {
                            article { class: "lesson-pane",
                                h3 { class: "lesson-title", "{lesson_title}" }
                                div { class: "lesson-content", {block_views} }
                                button {
                                    class: "btn btn-primary lesson-complete",
                                    r#type: "button",
                                    disabled: completed,
                                    onclick: move |_| {
                                        let progress = ctx.progress();
                                        let lesson_id = lesson_id.clone();
                                        let skill_id = skill_id.clone();
                                        let next_id = next_id.clone();
                                        let mut resource = resource;
                                        let mut selected = selected;
                                        spawn(async move {
                                            progress.complete_lesson(&lesson_id, &skill_id).await;
                                            if let Some(next) = next_id {
                                                selected.set(Some(next));
                                            }
                                            resource.restart();
                                        });
                                    },
                                    if completed { "Completed ✓" } else { "Mark as Complete" }
                                }
                            }
                        }
                    });
                    rsx! {
                        header { class: "skill-header",
                            h2 { class: "skill-header-title", "{skill_title}" }
                            div { class: "progress-row",
                                div { class: "progress-track",
                                    div { class: "progress-fill", style: "width: {percent}%" }
                                }
                                span { class: "progress-label", "{percent}% complete" }
                            }
                        }
                        div { class: "lesson-layout",
                            aside { class: "lesson-outline", {outline_rows} }
                            if let Some(pane) = lesson_pane {
                                {pane}
                            } else {
                                p { class: "lesson-empty", "This skill has no lessons yet." }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Display rule for one rendered block. List items are emitted bare and
/// styled as rows; the dialect has no nested lists to group.
fn block_view(block: &ContentBlock) -> Element {
    match block {
        ContentBlock::Heading { level, text } => match level {
            HeadingLevel::H1 => rsx! {
                h1 { class: "content-h1", "{text}" }
            },
            HeadingLevel::H2 => rsx! {
                h2 { class: "content-h2", "{text}" }
            },
            HeadingLevel::H3 => rsx! {
                h3 { class: "content-h3", "{text}" }
            },
        },
        ContentBlock::Paragraph(runs) => {
            let run_views = runs.iter().map(|run| match run {
                InlineRun::Text(text) => rsx! { "{text}" },
                InlineRun::Code(text) => rsx! {
                    code { class: "inline-code", "{text}" }
                },
            });
            rsx! {
                p { class: "content-paragraph", {run_views} }
            }
        }
        ContentBlock::BoldLabel { label, rest } => rsx! {
            p { class: "content-bold-label",
                strong {
                    if rest.is_some() { "{label}:" } else { "{label}" }
                }
                if let Some(rest) = rest {
                    "{rest}"
                }
            }
        },
        ContentBlock::ListItem(text) => rsx! {
            li { class: "content-list-item", "{text}" }
        },
        ContentBlock::CodeBlock { language, body } => rsx! {
            pre { class: "content-code",
                code { class: "language-{language}", "{body}" }
            }
        },
        ContentBlock::Spacer => rsx! {
            div { class: "content-spacer" }
        },
    }
}
