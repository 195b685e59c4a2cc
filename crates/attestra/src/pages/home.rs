//! Landing page: hero, the two primary actions, and the feature blurbs.

use dioxus::prelude::*;

use crate::routes::Route;

#[component]
pub fn Home() -> Element {
    rsx! {
        section { class: "at-hero",
            div { class: "at-hero-badge", "🛡" }
            h1 { class: "at-hero-title", "Authenticity Validator for Academia" }
            p { class: "at-hero-subtitle",
                "Secure, reliable certificate verification for educational institutions. "
                "Verify academic credentials instantly with advanced document authentication."
            }
        }

        section { class: "at-action-grid",
            div { class: "at-card at-card--action",
                div { class: "at-card-icon", "📄" }
                h2 { class: "at-card-title", "Upload Certificate" }
                p { class: "at-card-text",
                    "Upload your certificate file (PDF or image) for instant verification."
                }
                Link { to: Route::Upload {}, class: "at-btn at-btn--primary at-btn--block",
                    "Upload & Verify"
                }
            }
            div { class: "at-card at-card--action",
                div { class: "at-card-icon", "🔍" }
                h2 { class: "at-card-title", "Verify by ID" }
                p { class: "at-card-text",
                    "Enter a certificate ID to quickly check its authenticity."
                }
                Link { to: Route::Verify {}, class: "at-btn at-btn--secondary at-btn--block",
                    "Verify by ID"
                }
            }
        }

        section { class: "at-features",
            h2 { class: "at-section-title", "Why Choose Our Platform?" }
            div { class: "at-feature-grid",
                div { class: "at-card at-card--feature",
                    div { class: "at-card-icon", "⚡" }
                    h3 { class: "at-card-title", "Instant Verification" }
                    p { class: "at-card-text",
                        "Immediate results with advanced OCR and database matching technology."
                    }
                }
                div { class: "at-card at-card--feature",
                    div { class: "at-card-icon", "🗄" }
                    h3 { class: "at-card-title", "Comprehensive Database" }
                    p { class: "at-card-text",
                        "Extensive academic records from multiple institutions and programs."
                    }
                }
                div { class: "at-card at-card--feature",
                    div { class: "at-card-icon", "🔒" }
                    h3 { class: "at-card-title", "Secure & Reliable" }
                    p { class: "at-card-text",
                        "Encrypted data handling with audit trails at every step."
                    }
                }
            }
        }

        section { class: "at-admin-access",
            div { class: "at-card at-card--muted",
                div { class: "at-card-icon", "🔐" }
                h3 { class: "at-card-title", "Administrative Access" }
                p { class: "at-card-text",
                    "Institutional administrators can manage student records."
                }
                Link { to: Route::Admin {}, class: "at-btn at-btn--outline",
                    "Admin Dashboard"
                }
            }
        }
    }
}
