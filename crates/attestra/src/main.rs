use attestra::components::App;
use dioxus::prelude::*;

const MAIN_CSS: Asset = asset!("/assets/attestra.css");

fn main() {
    // Cross-platform logger (web console + desktop stdout); DEBUG for
    // development builds, INFO for release builds.
    #[cfg(debug_assertions)]
    dioxus::logger::init(dioxus::logger::tracing::Level::DEBUG).expect("logger failed to init");
    #[cfg(not(debug_assertions))]
    dioxus::logger::init(dioxus::logger::tracing::Level::INFO).expect("logger failed to init");

    #[cfg(feature = "desktop")]
    {
        use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

        let config = Config::default().with_window(
            WindowBuilder::new()
                .with_title("Attestra")
                .with_resizable(true)
                .with_inner_size(LogicalSize::new(1200.0, 900.0))
                .with_min_inner_size(LogicalSize::new(800.0, 600.0)),
        );

        dioxus::LaunchBuilder::desktop().with_cfg(config).launch(Root);
    }

    #[cfg(feature = "mobile")]
    {
        dioxus::LaunchBuilder::mobile().launch(Root);
    }

    #[cfg(feature = "web")]
    {
        dioxus::launch(Root);
    }
}

#[allow(dead_code)] // unused when building without a platform feature
#[component]
fn Root() -> Element {
    rsx! {
        // CSS loading: asset! resolution is unreliable on desktop, fall back
        // to inlining the stylesheet there.
        if cfg!(target_arch = "wasm32") {
            document::Stylesheet { href: MAIN_CSS }
        } else {
            style { {include_str!("../assets/attestra.css")} }
        }

        body { class: "at-body",
            App {}
        }
    }
}
