//! Administrator dashboard: login gate, roster import, records table.
//!
//! Everything hangs off one [`AdminSession`] signal. The login workflow opens
//! the gate, the import workflow fills the record table, and logout resets
//! the session and both workflows to their initial state.

use attestra_core::config::{ROSTER_IMPORT_DELAY_MS, SIGN_IN_DELAY_MS};
use attestra_core::gate::FileGate;
use attestra_core::model::{SelectedFile, StudentRecord};
use attestra_core::policy::{resolve_roster_import, resolve_sign_in, validate_credentials};
use attestra_core::session::AdminSession;
use dioxus::logger::tracing::info;
use dioxus::prelude::*;

use crate::components::{use_toasts, use_workflow, FilePickerCard};
use crate::utils::SignalExt;

#[component]
pub fn Admin() -> Element {
    let session = use_signal(AdminSession::default);
    let sign_in = use_workflow::<()>();
    let import = use_workflow::<Vec<StudentRecord>>();
    let toasts = use_toasts();

    let handle_login = move |_| {
        let credentials = session.read().credentials.clone();
        if let Err(err) = validate_credentials(&credentials) {
            sign_in.reject(err);
            return;
        }
        sign_in.submit(SIGN_IN_DELAY_MS, move || {
            let resolution = resolve_sign_in(&credentials);
            if resolution.is_success() {
                let mut session = session;
                session.mutate(|s| s.authenticated = true);
            }
            resolution
        });
    };

    let handle_roster_pick = move |name: String| {
        let candidate = SelectedFile::from_name(&name);
        let mut session = session;
        match session.try_mutate(|s| s.select_roster(candidate)) {
            Ok(()) => {
                info!("roster file selected: {name}");
                import.reset();
            }
            Err(err) => toasts.push(err.notice()),
        }
    };

    let handle_import = move |_| {
        if session.read().roster_file.is_none() {
            return;
        }
        import.submit(ROSTER_IMPORT_DELAY_MS, move || {
            let resolution = resolve_roster_import();
            if let Some(records) = resolution.payload.clone() {
                let mut session = session;
                session.mutate(|s| s.apply_import(records));
            }
            resolution
        });
    };

    let handle_logout = move |_| {
        let mut session = session;
        session.mutate(|s| s.sign_out());
        sign_in.reset();
        import.reset();
    };

    if !session.read().authenticated {
        let credentials = session.read().credentials.clone();
        return rsx! {
            section { class: "at-page at-page--narrow",
                div { class: "at-card at-login-card",
                    div { class: "at-card-icon", "🔐" }
                    h1 { class: "at-card-title", "Admin Login" }
                    p { class: "at-card-text", "Access the administrative dashboard" }

                    label { class: "at-field-label", r#for: "username", "Username" }
                    input {
                        id: "username",
                        class: "at-input",
                        r#type: "text",
                        placeholder: "Enter username",
                        value: "{credentials.username}",
                        oninput: move |evt| {
                            let mut session = session;
                            session.mutate(|s| s.credentials.username = evt.value());
                        },
                    }

                    label { class: "at-field-label", r#for: "password", "Password" }
                    input {
                        id: "password",
                        class: "at-input",
                        r#type: "password",
                        placeholder: "Enter password",
                        value: "{credentials.password}",
                        oninput: move |evt| {
                            let mut session = session;
                            session.mutate(|s| s.credentials.password = evt.value());
                        },
                        onkeypress: move |evt: KeyboardEvent| {
                            if evt.key() == Key::Enter {
                                handle_login(());
                            }
                        },
                    }

                    button {
                        class: "at-btn at-btn--primary at-btn--block",
                        disabled: sign_in.is_submitting(),
                        onclick: move |_| handle_login(()),
                        if sign_in.is_submitting() { "Logging in…" } else { "Login" }
                    }

                    p { class: "at-login-hint", "Demo credentials: admin / password" }
                }
            }
        };
    }

    let record_count = session.read().records.len();

    rsx! {
        section { class: "at-page",
            div { class: "at-page-header at-page-header--split",
                div {
                    h1 { class: "at-page-title", "Admin Dashboard" }
                    p { class: "at-page-subtitle", "Manage student records and certificates" }
                }
                button { class: "at-btn at-btn--outline", onclick: handle_logout, "Logout" }
            }

            div { class: "at-stat-grid",
                div { class: "at-card at-stat",
                    span { class: "at-stat-icon", "👥" }
                    div {
                        p { class: "at-stat-value", "{record_count}" }
                        p { class: "at-stat-label", "Total Records" }
                    }
                }
                div { class: "at-card at-stat",
                    span { class: "at-stat-icon", "🗄" }
                    div {
                        p { class: "at-stat-value", "{record_count}" }
                        p { class: "at-stat-label", "Valid Certificates" }
                    }
                }
                div { class: "at-card at-stat",
                    span { class: "at-stat-icon", "📊" }
                    div {
                        p { class: "at-stat-value", "CSV" }
                        p { class: "at-stat-label", "Import Format" }
                    }
                }
            }

            div { class: "at-card",
                h2 { class: "at-card-heading", "📤 Upload Student Records" }
                FilePickerCard {
                    input_id: "roster-upload",
                    accept: FileGate::Roster.accept_filter(),
                    icon: "📊",
                    headline: "Click to upload CSV file",
                    hint: "Format: Name, Roll No, Certificate ID, Course, Issue Date",
                    on_pick: handle_roster_pick,
                }

                if let Some(file) = session.read().roster_file.clone() {
                    div { class: "at-file-row",
                        span { class: "at-file-name", "📊 {file.name}" }
                        button {
                            class: "at-btn at-btn--primary",
                            disabled: import.is_submitting(),
                            onclick: handle_import,
                            if import.is_submitting() { "Processing…" } else { "Process CSV" }
                        }
                    }
                }
            }

            if !session.read().records.is_empty() {
                div { class: "at-card",
                    h2 { class: "at-card-heading", "🗄 Student Records" }
                    table { class: "at-table",
                        thead {
                            tr {
                                th { "Name" }
                                th { "Roll No" }
                                th { "Certificate ID" }
                                th { "Course" }
                                th { "Issue Date" }
                            }
                        }
                        tbody {
                            for record in session.read().records.clone() {
                                tr { key: "{record.id}",
                                    td { class: "at-table-strong", "{record.name}" }
                                    td { "{record.roll_no}" }
                                    td { "{record.certificate_id}" }
                                    td { "{record.course}" }
                                    td { "{record.issue_date}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
