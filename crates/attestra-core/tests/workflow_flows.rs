//! End-to-end exercises of the four workflow instantiations.
//!
//! Each test drives a `Phase` the way its page does: validate, begin, run the
//! resolution policy in place of the deferred task, and inspect the resolved
//! state. No event loop is involved; the delay between begin and resolve is
//! irrelevant to the state machine.

use attestra_core::error::ValidationError;
use attestra_core::gate::FileGate;
use attestra_core::model::{Credentials, ExtractedData, SelectedFile, StudentRecord};
use attestra_core::policy::{
    resolve_document, resolve_lookup, resolve_roster_import, resolve_sign_in,
    validate_certificate_id, validate_credentials,
};
use attestra_core::roll::EntropyRoll;
use attestra_core::session::AdminSession;
use attestra_core::workflow::Phase;

#[test]
fn lookup_flow_rejects_blank_ids_without_transition() {
    let phase = Phase::<()>::Idle;

    for raw in ["", "   ", "\t\n"] {
        let err = validate_certificate_id(raw).unwrap_err();
        assert_eq!(err, ValidationError::MissingCertificateId);
        // No deferred work is scheduled, so the phase never moves.
        assert_eq!(phase, Phase::Idle);
    }
}

#[test]
fn lookup_flow_happy_path() {
    let mut phase = Phase::default();
    let id = validate_certificate_id("  CERT-2024-001  ").unwrap();

    phase.begin();
    assert!(phase.is_submitting());

    let mut roll = EntropyRoll::seeded(9);
    phase.resolve(resolve_lookup(&id, &mut roll));

    let resolution = phase.resolution().unwrap();
    assert!(resolution.is_success());
    assert_eq!(
        resolution.payload.as_ref().unwrap().certificate_id,
        "CERT-2024-001"
    );

    // The reset button clears both the input and the result.
    phase.reset();
    assert_eq!(phase, Phase::Idle);
}

#[test]
fn upload_flow_extracts_the_same_record_for_any_file() {
    let mut selected = None;
    FileGate::Certificate
        .select(&mut selected, SelectedFile::from_name("degree.pdf"))
        .unwrap();

    let mut roll = EntropyRoll::seeded(3);
    for _ in 0..20 {
        let mut phase = Phase::default();
        phase.begin();
        phase.resolve(resolve_document(&mut roll));

        // Validity varies per attempt; the extracted record never does.
        let resolution = phase.resolution().unwrap();
        assert_eq!(resolution.payload, Some(ExtractedData::sample()));
    }
}

#[test]
fn admin_flow_login_import_logout() {
    let mut session = AdminSession::default();
    let mut sign_in = Phase::default();
    let mut import = Phase::default();

    // Empty form never schedules work.
    assert_eq!(
        validate_credentials(&session.credentials),
        Err(ValidationError::MissingCredentials)
    );

    // Wrong password resolves to failure and leaves the gate closed.
    session.credentials = Credentials {
        username: "admin".into(),
        password: "letmein".into(),
    };
    sign_in.begin();
    sign_in.resolve(resolve_sign_in(&session.credentials));
    assert!(!sign_in.resolution().unwrap().is_success());
    assert!(!session.authenticated);

    // Correct pair opens the dashboard.
    session.credentials.password = "password".into();
    sign_in.begin();
    sign_in.resolve(resolve_sign_in(&session.credentials));
    assert!(sign_in.resolution().unwrap().is_success());
    session.authenticated = true;

    // CSV import replaces the table with the fixed roster.
    session
        .select_roster(SelectedFile::from_name("graduates.csv"))
        .unwrap();
    import.begin();
    import.resolve(resolve_roster_import());
    let roster = import.resolution().unwrap().payload.clone().unwrap();
    session.apply_import(roster);
    assert_eq!(session.records, StudentRecord::roster());

    // Logout restores the login-gated initial state.
    session.sign_out();
    import.reset();
    sign_in.reset();
    assert_eq!(session, AdminSession::default());
    assert_eq!(sign_in, Phase::Idle);
    assert_eq!(import, Phase::Idle);
}

#[test]
fn stale_resolution_is_overwritten_not_merged() {
    let mut phase = Phase::default();
    let mut roll = EntropyRoll::seeded(11);

    phase.begin();
    phase.resolve(resolve_lookup("zzz", &mut roll));
    let first = phase.resolution().unwrap().clone();

    phase.begin();
    phase.resolve(resolve_lookup("CERT-42", &mut roll));
    let second = phase.resolution().unwrap();

    // Whatever the first attempt said, only the latest resolution remains.
    assert!(second.is_success());
    assert_eq!(second.payload.as_ref().unwrap().certificate_id, "CERT-42");
    assert_ne!(
        first.payload.as_ref().map(|p| p.certificate_id.as_str()),
        second.payload.as_ref().map(|p| p.certificate_id.as_str()),
    );
}
