//! Demo configuration constants.
//!
//! Every simulated delay, probability, and fixed literal lives here so the
//! pages and the tests agree on a single source of truth.

// =============================================================================
// Administrator credentials
// =============================================================================

/// Username accepted by the simulated sign-in. An identity provider is out of
/// scope for the demo; the comparison is a plain equality check.
pub const ADMIN_USERNAME: &str = "admin";

/// Password accepted by the simulated sign-in.
pub const ADMIN_PASSWORD: &str = "password";

// =============================================================================
// Simulated operation delays
// =============================================================================

/// Delay before a sign-in attempt resolves, in milliseconds.
pub const SIGN_IN_DELAY_MS: u64 = 1000;

/// Delay before a certificate-ID lookup resolves, in milliseconds.
pub const LOOKUP_DELAY_MS: u64 = 1500;

/// Delay before an uploaded document "verifies", in milliseconds.
pub const DOCUMENT_VERIFY_DELAY_MS: u64 = 2000;

/// Delay before a roster import "processes", in milliseconds.
pub const ROSTER_IMPORT_DELAY_MS: u64 = 2000;

// =============================================================================
// Outcome probabilities
// =============================================================================

/// Probability that an uploaded document is flagged valid.
pub const DOCUMENT_VALID_PROBABILITY: f64 = 0.7;

/// Probability that a lookup succeeds when the id does not contain
/// [`LOOKUP_MATCH_FRAGMENT`]. Only drawn in that case.
pub const LOOKUP_FALLBACK_PROBABILITY: f64 = 0.6;

/// Substring that makes a lookup succeed deterministically. Matched
/// case-insensitively against the submitted id.
pub const LOOKUP_MATCH_FRAGMENT: &str = "cert";

// =============================================================================
// Toast surface
// =============================================================================

/// How long a notification stays on screen before auto-dismissal, in
/// milliseconds.
pub const TOAST_LIFETIME_MS: u64 = 4000;
