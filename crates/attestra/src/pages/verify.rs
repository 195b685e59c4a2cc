//! Certificate-ID lookup page.
//!
//! The id field validates on submit, not on edit; a stale result stays on
//! screen until a new attempt overwrites it or the reset button clears it.

use attestra_core::config::LOOKUP_DELAY_MS;
use attestra_core::model::CertificateInfo;
use attestra_core::policy::{resolve_lookup, validate_certificate_id};
use attestra_core::roll::EntropyRoll;
use dioxus::prelude::*;

use crate::components::use_workflow;

#[component]
pub fn Verify() -> Element {
    let mut certificate_id = use_signal(String::new);
    let workflow = use_workflow::<CertificateInfo>();

    let handle_verify = move |_| {
        let id = match validate_certificate_id(&certificate_id.read()) {
            Ok(id) => id,
            Err(err) => {
                workflow.reject(err);
                return;
            }
        };
        workflow.submit(LOOKUP_DELAY_MS, move || {
            let mut roll = EntropyRoll::new();
            resolve_lookup(&id, &mut roll)
        });
    };

    let handle_reset = move |_| {
        certificate_id.set(String::new());
        workflow.reset();
    };

    let blank = certificate_id.read().trim().is_empty();
    let resolution = workflow.resolution();

    rsx! {
        section { class: "at-page at-page--narrow",
            div { class: "at-page-header",
                h1 { class: "at-page-title", "Verify by Certificate ID" }
                p { class: "at-page-subtitle", "Enter a certificate ID to check its authenticity" }
            }

            div { class: "at-card",
                h2 { class: "at-card-heading", "🔍 Certificate Lookup" }
                label { class: "at-field-label", r#for: "certificate-id", "Certificate ID" }
                input {
                    id: "certificate-id",
                    class: "at-input",
                    r#type: "text",
                    placeholder: "Enter certificate ID (e.g., CERT-2024-001)",
                    value: "{certificate_id}",
                    oninput: move |evt| certificate_id.set(evt.value()),
                    onkeypress: move |evt: KeyboardEvent| {
                        if evt.key() == Key::Enter {
                            handle_verify(());
                        }
                    },
                }
                div { class: "at-btn-row",
                    button {
                        class: "at-btn at-btn--primary at-btn--grow",
                        disabled: workflow.is_submitting() || blank,
                        onclick: move |_| handle_verify(()),
                        if workflow.is_submitting() { "Checking…" } else { "Check Certificate" }
                    }
                    if resolution.is_some() {
                        button {
                            class: "at-btn at-btn--outline",
                            onclick: handle_reset,
                            "Reset"
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
                                if resolution.is_success() { "Certificate Verified" } else { "Certificate Not Found" }
                            }
                            p { class: "at-result-message", "{resolution.message}" }
                        }
                    }

                    if let Some(ref info) = resolution.payload {
                        div { class: "at-result-details",
                            h4 { class: "at-result-details-title", "Certificate Details" }
                            div { class: "at-detail-grid",
                                div { class: "at-detail",
                                    span { class: "at-detail-label", "Student Name" }
                                    span { class: "at-detail-value", "{info.name}" }
                                }
                                div { class: "at-detail",
                                    span { class: "at-detail-label", "Roll Number" }
                                    span { class: "at-detail-value", "{info.roll_no}" }
                                }
                                div { class: "at-detail",
                                    span { class: "at-detail-label", "Certificate ID" }
                                    span { class: "at-detail-value", "{info.certificate_id}" }
                                }
                                div { class: "at-detail",
                                    span { class: "at-detail-label", "Course" }
                                    span { class: "at-detail-value", "{info.course}" }
                                }
                                div { class: "at-detail",
                                    span { class: "at-detail-label", "Grade" }
                                    span { class: "at-detail-value", "{info.grade}" }
                                }
                                div { class: "at-detail",
                                    span { class: "at-detail-label", "Issue Date" }
                                    span { class: "at-detail-value", "{info.issue_date}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
