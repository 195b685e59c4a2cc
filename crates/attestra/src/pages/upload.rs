//! Certificate upload and verification page.
//!
//! Flow: pick a file through the certificate gate, press verify, wait out the
//! simulated extraction, render the extracted record and the verdict.
//! Accepting a new file clears both result cards so a stale verdict is never
//! shown beside an unverified selection.

use attestra_core::config::DOCUMENT_VERIFY_DELAY_MS;
use attestra_core::error::ValidationError;
use attestra_core::gate::FileGate;
use attestra_core::model::{ExtractedData, SelectedFile};
use attestra_core::policy::resolve_document;
use attestra_core::roll::EntropyRoll;
use dioxus::logger::tracing::info;
use dioxus::prelude::*;

use crate::components::{use_toasts, use_workflow, FilePickerCard};
use crate::utils::SignalExt;

#[component]
pub fn Upload() -> Element {
    let selected = use_signal(|| None::<SelectedFile>);
    let extracted = use_signal(|| None::<ExtractedData>);
    let workflow = use_workflow::<ExtractedData>();
    let toasts = use_toasts();

    let handle_pick = move |name: String| {
        let candidate = SelectedFile::from_name(&name);
        let mut selected = selected;
        match selected.try_mutate(|slot| FileGate::Certificate.select(slot, candidate)) {
            Ok(()) => {
                info!("certificate file selected: {name}");
                let mut extracted = extracted;
                extracted.set(None);
                workflow.reset();
            }
            Err(err) => toasts.push(err.notice()),
        }
    };

    let handle_verify = move |_| {
        if selected.read().is_none() {
            workflow.reject(ValidationError::NoFileSelected);
            return;
        }
        workflow.submit(DOCUMENT_VERIFY_DELAY_MS, move || {
            let mut roll = EntropyRoll::new();
            let resolution = resolve_document(&mut roll);
            let mut extracted = extracted;
            extracted.set(resolution.payload.clone());
            resolution
        });
    };

    let resolution = workflow.resolution();

    rsx! {
        section { class: "at-page",
            div { class: "at-page-header",
                h1 { class: "at-page-title", "Upload Certificate" }
                p { class: "at-page-subtitle", "Upload a certificate to verify its authenticity" }
            }

            div { class: "at-card",
                h2 { class: "at-card-heading", "📄 Upload Certificate File" }
                FilePickerCard {
                    input_id: "certificate-upload",
                    accept: FileGate::Certificate.accept_filter(),
                    icon: "📄",
                    headline: "Click to upload",
                    hint: "PDF or image files only",
                    on_pick: handle_pick,
                }

                if let Some(file) = selected() {
                    div { class: "at-file-row",
                        span { class: "at-file-name", "📎 {file.name}" }
                        button {
                            class: "at-btn at-btn--primary",
                            disabled: workflow.is_submitting(),
                            onclick: handle_verify,
                            if workflow.is_submitting() { "Verifying…" } else { "Verify Certificate" }
                        }
                    }
                }
            }

            if let Some(data) = extracted() {
                div { class: "at-card",
                    h2 { class: "at-card-heading", "Extracted Information" }
                    div { class: "at-detail-grid",
                        div { class: "at-detail",
                            span { class: "at-detail-label", "Name" }
                            span { class: "at-detail-value", "{data.name}" }
                        }
                        div { class: "at-detail",
                            span { class: "at-detail-label", "Roll Number" }
                            span { class: "at-detail-value", "{data.roll_no}" }
                        }
                        div { class: "at-detail",
                            span { class: "at-detail-label", "Certificate ID" }
                            span { class: "at-detail-value", "{data.certificate_id}" }
                        }
                    }
                }
            }

            if let Some(resolution) = resolution {
                div {
                    class: if resolution.is_success() {
                        "at-card at-result at-result--valid"
                    } else {
                        "at-card at-result at-result--invalid"
                    },
                    div { class: "at-result-header",
                        span { class: "at-result-icon",
                            if resolution.is_success() { "✅" } else { "❌" }
                        }
                        div {
                            h3 { class: "at-result-title",
                                if resolution.is_success() { "Valid Certificate" } else { "Invalid Certificate" }
                            }
                            p { class: "at-result-message", "{resolution.message}" }
                        }
                    }
                }
            }
        }
    }
}
