//! Top navigation bar.

use dioxus::prelude::*;

use crate::routes::Route;

/// Class for a nav link, highlighted only when its destination equals the
/// current route. Enum equality keeps the match exact; `/upload` never
/// highlights `/`.
fn link_class(current: &Route, target: Route) -> &'static str {
    if *current == target {
        "at-nav-link at-nav-link--active"
    } else {
        "at-nav-link"
    }
}

#[component]
pub fn NavBar() -> Element {
    let route = use_route::<Route>();

    rsx! {
        header { class: "at-navbar",
            Link { to: Route::Home {}, class: "at-brand",
                span { class: "at-brand-mark", "🛡" }
                span { class: "at-brand-word", "Attest" }
                span { class: "at-brand-word at-brand-word--accent", "ra" }
            }
            nav { class: "at-navbar-links",
                Link {
                    to: Route::Home {},
                    class: link_class(&route, Route::Home {}),
                    "Home"
                }
                Link {
                    to: Route::Upload {},
                    class: link_class(&route, Route::Upload {}),
                    "Upload"
                }
                Link {
                    to: Route::Verify {},
                    class: link_class(&route, Route::Verify {}),
                    "Verify ID"
                }
                Link {
                    to: Route::Admin {},
                    class: link_class(&route, Route::Admin {}),
                    "Admin"
                }
            }
        }
    }
}
