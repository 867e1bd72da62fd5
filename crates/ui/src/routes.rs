use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::{ExplorerView, HomeView, LessonView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/explore", ExplorerView)] Explore {},
        #[route("/skill/:skill_id", LessonView)] Lesson { skill_id: String },
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            Navigation {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Navigation() -> Element {
    rsx! {
        nav { class: "topbar",
            Link { class: "brand", to: Route::Home {}, "SkillForge" }
            ul { class: "nav-links",
                li { Link { to: Route::Home {}, "Home" } }
                li { Link { to: Route::Explore {}, "Explore" } }
            }
        }
    }
}
