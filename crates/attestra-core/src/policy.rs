//! Resolution policies and local input validation.
//!
//! Each policy computes the value a deferred task hands back when the
//! simulated delay elapses. None of them inspect real file content or talk to
//! a backend; validity comes from a literal comparison, a substring check, or
//! a weighted coin flip through [`Roll`].
//!
//! Validators run synchronously before any work is scheduled. A failed
//! validation raises one notification and changes nothing else.

use tracing::debug;

use crate::config::{
    ADMIN_PASSWORD, ADMIN_USERNAME, DOCUMENT_VALID_PROBABILITY, LOOKUP_FALLBACK_PROBABILITY,
    LOOKUP_MATCH_FRAGMENT,
};
use crate::error::ValidationError;
use crate::model::{CertificateInfo, Credentials, ExtractedData, StudentRecord};
use crate::notify::Notification;
use crate::roll::Roll;
use crate::workflow::Resolution;

// =============================================================================
// Local validation
// =============================================================================

/// A lookup id must be non-empty after trimming. Returns the trimmed id.
pub fn validate_certificate_id(raw: &str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingCertificateId);
    }
    Ok(trimmed.to_string())
}

/// Both credential fields must be non-empty before a sign-in is scheduled.
pub fn validate_credentials(credentials: &Credentials) -> Result<(), ValidationError> {
    if credentials.username.is_empty() || credentials.password.is_empty() {
        return Err(ValidationError::MissingCredentials);
    }
    Ok(())
}

// =============================================================================
// Resolution policies
// =============================================================================

/// Sign-in: success iff the pair equals the fixed demo credentials.
pub fn resolve_sign_in(credentials: &Credentials) -> Resolution<()> {
    let accepted =
        credentials.username == ADMIN_USERNAME && credentials.password == ADMIN_PASSWORD;
    debug!(username = %credentials.username, accepted, "sign-in resolved");

    if accepted {
        Resolution::success(
            "Signed in as administrator.",
            None,
            Notification::info("Login Successful", "Welcome to the admin dashboard!"),
        )
    } else {
        Resolution::failure(
            "Invalid username or password.",
            None,
            Notification::error("Login Failed", "Invalid username or password."),
        )
    }
}

/// Document verification: always "extracts" the fixed sample record, then
/// flags it valid with probability [`DOCUMENT_VALID_PROBABILITY`].
///
/// The extracted record rides along on failure too; the upload page shows the
/// extraction card regardless of the verdict.
pub fn resolve_document(roll: &mut dyn Roll) -> Resolution<ExtractedData> {
    let extracted = ExtractedData::sample();
    let valid = roll.chance(DOCUMENT_VALID_PROBABILITY);
    debug!(valid, "document verification resolved");

    if valid {
        Resolution::success(
            "Certificate verified successfully. This is a genuine certificate.",
            Some(extracted),
            Notification::info("Certificate Valid", "The certificate has been verified."),
        )
    } else {
        Resolution::failure(
            "Invalid certificate. This certificate could not be verified in our database.",
            Some(extracted),
            Notification::error(
                "Certificate Invalid",
                "The certificate could not be verified.",
            ),
        )
    }
}

/// ID lookup: deterministic success when the id contains
/// [`LOOKUP_MATCH_FRAGMENT`] case-insensitively; otherwise a
/// [`LOOKUP_FALLBACK_PROBABILITY`] draw. The draw is short-circuited away on
/// a substring match.
pub fn resolve_lookup(certificate_id: &str, roll: &mut dyn Roll) -> Resolution<CertificateInfo> {
    let valid = certificate_id
        .to_lowercase()
        .contains(LOOKUP_MATCH_FRAGMENT)
        || roll.chance(LOOKUP_FALLBACK_PROBABILITY);
    debug!(certificate_id, valid, "lookup resolved");

    if valid {
        Resolution::success(
            "Certificate found and verified successfully.",
            Some(CertificateInfo::for_id(certificate_id)),
            Notification::info("Certificate Found", "The certificate has been verified."),
        )
    } else {
        Resolution::failure(
            "Certificate not found in our database. Please check the ID and try again.",
            None,
            Notification::error("Certificate Not Found", "No certificate found with this ID."),
        )
    }
}

/// Roster import: unconditionally replaces the table with the fixed roster.
pub fn resolve_roster_import() -> Resolution<Vec<StudentRecord>> {
    let roster = StudentRecord::roster();
    let count = roster.len();
    debug!(count, "roster import resolved");

    Resolution::success(
        format!("Loaded {count} student records."),
        Some(roster),
        Notification::info(
            "CSV Processed",
            format!("Successfully loaded {count} student records."),
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roll::EntropyRoll;
    use crate::workflow::Outcome;

    /// A roll that panics if consulted. Used to prove short-circuits.
    struct Untouchable;

    impl Roll for Untouchable {
        fn chance(&mut self, _probability: f64) -> bool {
            panic!("random source must not be consulted");
        }
    }

    /// A roll pinned to one answer.
    struct Always(bool);

    impl Roll for Always {
        fn chance(&mut self, _probability: f64) -> bool {
            self.0
        }
    }

    #[test]
    fn certificate_id_trimming() {
        assert_eq!(validate_certificate_id("  CERT-1  ").unwrap(), "CERT-1");
        assert_eq!(
            validate_certificate_id("   "),
            Err(ValidationError::MissingCertificateId)
        );
        assert_eq!(
            validate_certificate_id(""),
            Err(ValidationError::MissingCertificateId)
        );
    }

    #[test]
    fn credentials_must_both_be_present() {
        let mut credentials = Credentials::default();
        assert!(validate_credentials(&credentials).is_err());

        credentials.username = "admin".into();
        assert!(validate_credentials(&credentials).is_err());

        credentials.password = "anything".into();
        assert!(validate_credentials(&credentials).is_ok());
    }

    #[test]
    fn sign_in_exact_pair_only() {
        let good = Credentials {
            username: "admin".into(),
            password: "password".into(),
        };
        assert_eq!(resolve_sign_in(&good).outcome, Outcome::Success);

        for (username, password) in [
            ("admin", "wrong"),
            ("root", "password"),
            ("Admin", "password"),
            ("admin", "Password"),
        ] {
            let attempt = Credentials {
                username: username.into(),
                password: password.into(),
            };
            assert_eq!(resolve_sign_in(&attempt).outcome, Outcome::Failure, "{username}/{password}");
        }
    }

    #[test]
    fn document_verification_always_extracts_sample() {
        for valid in [true, false] {
            let resolution = resolve_document(&mut Always(valid));
            assert_eq!(resolution.payload, Some(ExtractedData::sample()));
            assert_eq!(resolution.is_success(), valid);
        }
    }

    #[test]
    fn document_validity_rate_converges() {
        let mut roll = EntropyRoll::seeded(42);
        let successes = (0..1000)
            .filter(|_| resolve_document(&mut roll).is_success())
            .count();
        assert!((650..=750).contains(&successes), "successes = {successes}");
    }

    #[test]
    fn lookup_matching_fragment_never_rolls() {
        for id in ["CERT-2024-001", "cert", "my-Certificate"] {
            let resolution = resolve_lookup(id, &mut Untouchable);
            assert!(resolution.is_success());
            assert_eq!(resolution.payload.unwrap().certificate_id, id);
        }
    }

    #[test]
    fn lookup_fallback_branches() {
        let found = resolve_lookup("ABC-123", &mut Always(true));
        assert!(found.is_success());
        assert_eq!(found.payload.unwrap().certificate_id, "ABC-123");

        let missing = resolve_lookup("ABC-123", &mut Always(false));
        assert!(!missing.is_success());
        assert!(missing.payload.is_none());
        assert_eq!(missing.notice.title, "Certificate Not Found");
    }

    #[test]
    fn roster_import_fixed_table() {
        let resolution = resolve_roster_import();
        assert!(resolution.is_success());
        let roster = resolution.payload.unwrap();
        assert_eq!(roster.len(), 4);
        assert_eq!(resolution.notice.description, "Successfully loaded 4 student records.");
    }
}
