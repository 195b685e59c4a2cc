//! Validation error types.
//!
//! These cover the only synchronous failure mode in the demo: a submission
//! rejected before any deferred work is scheduled. A negatively resolved
//! operation is not an error; it is an [`Outcome::Failure`] value.
//!
//! [`Outcome::Failure`]: crate::workflow::Outcome::Failure

use thiserror::Error;

use crate::notify::Notification;

/// A submission precondition that was not met.
///
/// Each variant maps to exactly one user-visible notification; surfacing that
/// notification and leaving state untouched is the entire recovery story.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Lookup submitted with an empty or whitespace-only certificate id.
    #[error("certificate id is required")]
    MissingCertificateId,
    /// Sign-in submitted with an empty username or password.
    #[error("username and password are required")]
    MissingCredentials,
    /// Verification requested with no file selected.
    #[error("no file selected")]
    NoFileSelected,
    /// A candidate file's media type is outside the certificate gate.
    #[error("unsupported certificate file type: {0}")]
    UnsupportedCertificateFile(String),
    /// A candidate file's media type is outside the roster gate.
    #[error("unsupported roster file type: {0}")]
    UnsupportedRosterFile(String),
}

impl ValidationError {
    /// The notification raised for this rejection.
    pub fn notice(&self) -> Notification {
        match self {
            ValidationError::MissingCertificateId => Notification::error(
                "Certificate ID Required",
                "Please enter a certificate ID to verify.",
            ),
            ValidationError::MissingCredentials => Notification::error(
                "Missing Credentials",
                "Please enter both username and password.",
            ),
            ValidationError::NoFileSelected => Notification::error(
                "No File Selected",
                "Please choose a certificate file to verify.",
            ),
            ValidationError::UnsupportedCertificateFile(_) => {
                Notification::error("Invalid file type", "Please select a PDF or image file.")
            }
            ValidationError::UnsupportedRosterFile(_) => {
                Notification::error("Invalid File", "Please select a CSV file.")
            }
        }
    }
}
