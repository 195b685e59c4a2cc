//! Admin dashboard session state.
//!
//! The whole admin page hangs off this one value: the login gate, the roster
//! selection, and the imported record table. It lives in page-local UI state
//! and never persists; signing out is a reset to `Default`.

use tracing::info;

use crate::error::ValidationError;
use crate::gate::FileGate;
use crate::model::{Credentials, SelectedFile, StudentRecord};

/// In-memory state for the administrator dashboard.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AdminSession {
    /// Whether the sign-in workflow has resolved successfully this session.
    pub authenticated: bool,
    /// The login form's working credentials.
    pub credentials: Credentials,
    /// Roster file picked for import, if any.
    pub roster_file: Option<SelectedFile>,
    /// Records loaded by the last import.
    pub records: Vec<StudentRecord>,
}

impl AdminSession {
    /// Run a roster candidate through the CSV gate.
    ///
    /// Acceptance replaces the selection and drops previously imported
    /// records, so a stale table is never shown beside a new, unprocessed
    /// file. Rejection leaves both untouched.
    pub fn select_roster(&mut self, candidate: SelectedFile) -> Result<(), ValidationError> {
        FileGate::Roster.select(&mut self.roster_file, candidate)?;
        self.records.clear();
        Ok(())
    }

    /// Replace the record table with an import's payload.
    pub fn apply_import(&mut self, records: Vec<StudentRecord>) {
        self.records = records;
    }

    /// Sign out: clear credentials, selection, and records, returning the
    /// page to its login-gated initial state.
    pub fn sign_out(&mut self) {
        info!("admin signed out");
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signed_in_session() -> AdminSession {
        AdminSession {
            authenticated: true,
            credentials: Credentials {
                username: "admin".into(),
                password: "password".into(),
            },
            roster_file: Some(SelectedFile::new("roster.csv", "text/csv")),
            records: StudentRecord::roster(),
        }
    }

    #[test]
    fn rejected_roster_leaves_table_unchanged() {
        let mut session = signed_in_session();
        let err = session
            .select_roster(SelectedFile::new("notes.txt", "text/plain"))
            .unwrap_err();

        assert_eq!(err.notice().title, "Invalid File");
        assert_eq!(session.records.len(), 4);
        assert_eq!(session.roster_file.as_ref().unwrap().name, "roster.csv");
    }

    #[test]
    fn accepted_roster_clears_stale_records() {
        let mut session = signed_in_session();
        session
            .select_roster(SelectedFile::new("fresh.csv", "text/csv"))
            .unwrap();

        assert!(session.records.is_empty());
        assert_eq!(session.roster_file.unwrap().name, "fresh.csv");
    }

    #[test]
    fn sign_out_resets_everything() {
        let mut session = signed_in_session();
        session.sign_out();
        assert_eq!(session, AdminSession::default());
        assert!(!session.authenticated);
        assert!(session.credentials.username.is_empty());
        assert!(session.roster_file.is_none());
        assert!(session.records.is_empty());
    }
}
