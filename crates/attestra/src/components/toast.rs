//! Transient notification surface.
//!
//! Workflows push a [`Notification`] here on every validation failure and
//! every resolution. The stack renders top-right, each entry dismisses itself
//! after [`TOAST_LIFETIME_MS`] or on click, and nothing ever reads a
//! notification back out.

use attestra_core::config::TOAST_LIFETIME_MS;
use attestra_core::notify::Notification;
use dioxus::prelude::*;

use crate::utils::{spawn_after, SignalExt};

/// One notification currently on screen.
#[derive(Clone, Debug, PartialEq)]
pub struct ActiveToast {
    pub id: u64,
    pub notice: Notification,
}

/// Context handle for pushing notifications from anywhere in the tree.
#[derive(Clone, Copy)]
pub struct Toasts {
    entries: Signal<Vec<ActiveToast>>,
    next_id: Signal<u64>,
}

impl Toasts {
    /// Show a notification and schedule its auto-dismissal.
    pub fn push(self, notice: Notification) {
        let mut entries = self.entries;
        let mut next_id = self.next_id;

        let id = *next_id.peek();
        next_id.set(id + 1);
        entries.mutate(|list| list.push(ActiveToast { id, notice }));

        // Fire-and-forget: the host outlives every page, so the handle is
        // never cancelled.
        spawn_after(TOAST_LIFETIME_MS, move || {
            let mut entries = entries;
            entries.mutate(|list| list.retain(|toast| toast.id != id));
        });
    }

    /// Remove a notification immediately.
    pub fn dismiss(self, id: u64) {
        let mut entries = self.entries;
        entries.mutate(|list| list.retain(|toast| toast.id != id));
    }

    pub fn entries(self) -> Signal<Vec<ActiveToast>> {
        self.entries
    }
}

/// Install the toast context. Called once, at the application root.
pub fn provide_toasts() -> Toasts {
    let entries = use_signal(Vec::new);
    let next_id = use_signal(|| 0u64);
    use_context_provider(|| Toasts { entries, next_id })
}

/// Access the toast context from any component below the root.
pub fn use_toasts() -> Toasts {
    use_context::<Toasts>()
}

/// Renders the active notification stack.
#[component]
pub fn ToastHost() -> Element {
    let toasts = use_toasts();
    let entries = toasts.entries();

    rsx! {
        div { class: "at-toast-stack",
            for toast in entries() {
                ToastCard { key: "{toast.id}", toast }
            }
        }
    }
}

/// One entry in the stack. Clicking dismisses it early.
#[component]
fn ToastCard(toast: ActiveToast) -> Element {
    let toasts = use_toasts();
    let id = toast.id;
    let class = format!(
        "at-toast at-toast--{}",
        toast.notice.severity.css_modifier()
    );
    let title = toast.notice.title;
    let description = toast.notice.description;

    rsx! {
        div {
            class: class,
            onclick: move |_| toasts.dismiss(id),
            p { class: "at-toast-title", "{title}" }
            p { class: "at-toast-description", "{description}" }
        }
    }
}
