//! Notification values for the transient toast surface.
//!
//! Workflows push one of these on every validation failure and every
//! resolution. The surface is fire-and-forget: nothing reads a notification
//! back after it is shown.

use serde::{Deserialize, Serialize};

/// Visual weight of a notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    /// Neutral or positive outcome.
    Info,
    /// Validation failure or negative outcome.
    Error,
}

impl Severity {
    /// CSS modifier suffix used by the toast host.
    pub fn css_modifier(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Error => "error",
        }
    }
}

/// A transient user-facing message: title, one-line description, severity.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

impl Notification {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: Severity::Info,
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: Severity::Error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_set_severity() {
        let ok = Notification::info("Login Successful", "Welcome!");
        assert_eq!(ok.severity, Severity::Info);

        let bad = Notification::error("Login Failed", "Invalid username or password.");
        assert_eq!(bad.severity, Severity::Error);
        assert_eq!(bad.title, "Login Failed");
    }

    #[test]
    fn css_modifiers() {
        assert_eq!(Severity::Info.css_modifier(), "info");
        assert_eq!(Severity::Error.css_modifier(), "error");
    }
}
