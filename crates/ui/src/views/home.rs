use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::routes::Route;

/// Landing page: static hero, feature and category overviews, testimonials.
/// Everything here comes straight from the catalog, so no async loading.
#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let catalog = ctx.catalog();

    let skill_count = catalog.skills().len();
    let lesson_count = catalog.total_lessons();
    let category_cards = catalog
        .category_counts()
        .into_iter()
        .map(|(category, count)| {
            rsx! {
                div { class: "category-card",
                    h4 { class: "category-name", "{category.label()}" }
                    p { class: "category-count",
                        if count == 1 { "1 skill" } else { "{count} skills" }
                    }
                }
            }
        });
    let testimonials = catalog.testimonials().iter().map(|t| {
        let name = t.name.clone();
        let role = t.role.clone();
        let quote = t.quote.clone();
        let avatar = t.avatar.clone();
        rsx! {
            figure { class: "testimonial-card",
                blockquote { class: "testimonial-quote", "{quote}" }
                figcaption { class: "testimonial-author",
                    span { class: "testimonial-avatar", "{avatar}" }
                    div {
                        span { class: "testimonial-name", "{name}" }
                        span { class: "testimonial-role", "{role}" }
                    }
                }
            }
        }
    });

    rsx! {
        div { class: "page home-page",
            section { class: "hero",
                h2 { class: "hero-title", "Learn a skill, one lesson at a time" }
                p { class: "hero-subtitle",
                    "Short, focused lessons you can finish over coffee. Your progress stays \
                     on this machine."
                }
                div { class: "hero-stats",
                    div { class: "stat-card",
                        span { class: "stat-value", "{skill_count}" }
                        span { class: "stat-label", "Skills" }
                    }
                    div { class: "stat-card",
                        span { class: "stat-value", "{lesson_count}" }
                        span { class: "stat-label", "Lessons" }
                    }
                    div { class: "stat-card",
                        span { class: "stat-value", "100%" }
                        span { class: "stat-label", "Free" }
                    }
                }
                Link { class: "btn btn-primary hero-cta", to: Route::Explore {}, "Start Exploring" }
            }

            section { class: "features",
                h3 { class: "section-title", "Why SkillForge" }
                div { class: "feature-grid",
                    div { class: "feature-card",
                        h4 { "Bite-sized lessons" }
                        p { "Every lesson is a single sitting, with runnable examples." }
                    }
                    div { class: "feature-card",
                        h4 { "Progress that sticks" }
                        p { "Completion is saved locally and survives restarts. No account needed." }
                    }
                    div { class: "feature-card",
                        h4 { "Works offline" }
                        p { "The whole catalog ships with the app. No network, ever." }
                    }
                }
            }

            section { class: "categories",
                h3 { class: "section-title", "Browse by category" }
                div { class: "category-grid", {category_cards} }
            }

            section { class: "testimonials",
                h3 { class: "section-title", "What learners say" }
                div { class: "testimonial-grid", {testimonials} }
            }

            section { class: "cta",
                h3 { "Ready to start?" }
                Link { class: "btn btn-primary", to: Route::Explore {}, "Explore Skills" }
            }
        }
    }
}
