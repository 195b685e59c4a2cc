use dioxus::prelude::*;

use crate::components::app_shell::{Footer, NavBar};
use crate::components::ToastHost;
use crate::routes::Route;

/// Layout wrapped around every routed page: nav bar on top, footer below,
/// toast stack floating above everything.
#[component]
pub fn Shell() -> Element {
    rsx! {
        div { class: "at-app",
            NavBar {}
            main { class: "at-main",
                Outlet::<Route> {}
            }
            Footer {}
            ToastHost {}
        }
    }
}
