use dioxus::prelude::*;

/// Footer with the demo disclaimer.
#[component]
pub fn Footer() -> Element {
    rsx! {
        footer { class: "at-footer",
            span { class: "at-footer-text",
                "Demonstration only • Verification results are simulated."
            }
        }
    }
}
