//! Media-type gate for the file pickers.
//!
//! Two pickers exist: certificate upload (PDF or any image) and roster import
//! (CSV only). Both re-validate on selection even though the picker already
//! carries an accept filter. A rejected candidate leaves the previous
//! selection untouched; an accepted one replaces it.

use tracing::debug;

use crate::error::ValidationError;
use crate::model::SelectedFile;

/// Which picker a candidate file is passing through.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileGate {
    /// Certificate upload: `application/pdf` or `image/*`.
    Certificate,
    /// Roster import: exactly `text/csv`.
    Roster,
}

impl FileGate {
    /// Accept filter declared on the picker input.
    pub fn accept_filter(self) -> &'static str {
        match self {
            FileGate::Certificate => ".pdf,image/*",
            FileGate::Roster => ".csv",
        }
    }

    /// Whether a declared media type passes this gate.
    pub fn admits(self, media_type: &str) -> bool {
        match self {
            FileGate::Certificate => {
                media_type == "application/pdf" || media_type.starts_with("image/")
            }
            FileGate::Roster => media_type == "text/csv",
        }
    }

    /// Run a candidate through the gate.
    ///
    /// On acceptance the candidate replaces whatever `slot` held. On rejection
    /// `slot` is left exactly as it was and the matching validation error is
    /// returned for the caller to surface.
    pub fn select(
        self,
        slot: &mut Option<SelectedFile>,
        candidate: SelectedFile,
    ) -> Result<(), ValidationError> {
        if self.admits(&candidate.media_type) {
            debug!(name = %candidate.name, media_type = %candidate.media_type, "file accepted");
            *slot = Some(candidate);
            Ok(())
        } else {
            debug!(name = %candidate.name, media_type = %candidate.media_type, "file rejected");
            Err(match self {
                FileGate::Certificate => {
                    ValidationError::UnsupportedCertificateFile(candidate.media_type)
                }
                FileGate::Roster => ValidationError::UnsupportedRosterFile(candidate.media_type),
            })
        }
    }
}

/// Guess a media type from a file name, the way a browser fills `File.type`.
///
/// The demo never opens the file, so the extension is all there is to go on.
pub fn media_type_for(name: &str) -> &'static str {
    let extension = name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "pdf" => "application/pdf",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        "svg" => "image/svg+xml",
        "csv" => "text/csv",
        "txt" => "text/plain",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn certificate_gate_admits_pdf_and_images() {
        assert!(FileGate::Certificate.admits("application/pdf"));
        assert!(FileGate::Certificate.admits("image/png"));
        assert!(FileGate::Certificate.admits("image/svg+xml"));
        assert!(!FileGate::Certificate.admits("text/csv"));
        assert!(!FileGate::Certificate.admits("text/plain"));
    }

    #[test]
    fn roster_gate_admits_only_csv() {
        assert!(FileGate::Roster.admits("text/csv"));
        assert!(!FileGate::Roster.admits("application/pdf"));
        assert!(!FileGate::Roster.admits("text/plain"));
    }

    #[test]
    fn rejection_preserves_previous_selection() {
        let mut slot = Some(SelectedFile::new("old.csv", "text/csv"));
        let err = FileGate::Roster
            .select(&mut slot, SelectedFile::new("notes.txt", "text/plain"))
            .unwrap_err();

        assert_eq!(err, ValidationError::UnsupportedRosterFile("text/plain".into()));
        assert_eq!(slot.unwrap().name, "old.csv");
    }

    #[test]
    fn acceptance_replaces_previous_selection() {
        let mut slot = Some(SelectedFile::new("old.pdf", "application/pdf"));
        FileGate::Certificate
            .select(&mut slot, SelectedFile::new("new.png", "image/png"))
            .unwrap();
        assert_eq!(slot.unwrap().name, "new.png");
    }

    #[test]
    fn media_type_guesses() {
        assert_eq!(media_type_for("transcript.PDF"), "application/pdf");
        assert_eq!(media_type_for("records.csv"), "text/csv");
        assert_eq!(media_type_for("photo.JPG"), "image/jpeg");
        assert_eq!(media_type_for("no-extension"), "application/octet-stream");
    }
}
