//! UI components for the Attestra application.
//!
//! - `app_shell`: NavBar, Footer, and the Shell layout around routed pages
//! - `toast`: the transient notification surface and its context hooks
//! - `workflow`: the `use_workflow` hook every page drives its submission with
//! - `file_picker`: the shared dropzone-styled file input

pub mod app_shell;
pub mod file_picker;
pub mod toast;
pub mod workflow;

pub use file_picker::FilePickerCard;
pub use toast::{provide_toasts, use_toasts, ToastHost, Toasts};
pub use workflow::{use_workflow, WorkflowHandle};

use dioxus::prelude::*;

use crate::routes::Route;

/// Root component: provides the toast context and mounts the router.
#[component]
pub fn App() -> Element {
    provide_toasts();

    rsx! {
        Router::<Route> {}
    }
}
