//! Dropzone-styled file input shared by the upload and admin pages.
//!
//! The hidden input carries the gate's accept filter; the visible label is
//! the click target. Only the picked file's name leaves this component — the
//! demo never reads contents, so the gate downstream works from the name's
//! guessed media type.

use dioxus::prelude::*;

#[component]
pub fn FilePickerCard(
    input_id: &'static str,
    accept: &'static str,
    icon: &'static str,
    headline: &'static str,
    hint: &'static str,
    on_pick: EventHandler<String>,
) -> Element {
    rsx! {
        div { class: "at-dropzone",
            input {
                id: input_id,
                r#type: "file",
                class: "at-hidden-input",
                accept: accept,
                onchange: move |evt: FormEvent| {
                    if let Some(file) = evt.files().first() {
                        on_pick.call(file.name().to_string());
                    }
                },
            }
            label { r#for: input_id, class: "at-dropzone-label",
                div { class: "at-dropzone-icon", "{icon}" }
                p { class: "at-dropzone-title", "{headline}" }
                p { class: "at-dropzone-hint", "{hint}" }
            }
        }
    }
}
