//! Transient record types and their fabricated fixtures.
//!
//! Every record in the demo is fabricated: the extraction step never reads
//! the uploaded file and the lookup never queries a registry. The fixtures
//! below are the single source for those fabricated values, so the pages and
//! the tests render and assert the same data.

use serde::{Deserialize, Serialize};

/// Username/password pair held in the admin login form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Fields "extracted" from an uploaded certificate document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedData {
    pub name: String,
    pub roll_no: String,
    pub certificate_id: String,
}

impl ExtractedData {
    /// The one record every document "contains".
    pub fn sample() -> Self {
        Self {
            name: "John Doe".into(),
            roll_no: "CS2021001".into(),
            certificate_id: "CERT-2024-001".into(),
        }
    }
}

/// Registry entry returned by a successful certificate-ID lookup.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificateInfo {
    pub name: String,
    pub roll_no: String,
    pub certificate_id: String,
    pub issue_date: String,
    pub course: String,
    pub grade: String,
}

impl CertificateInfo {
    /// Fabricated registry entry, stamped with the submitted id rather than a
    /// looked-up one.
    pub fn for_id(certificate_id: impl Into<String>) -> Self {
        Self {
            name: "Jane Smith".into(),
            roll_no: "CS2021002".into(),
            certificate_id: certificate_id.into(),
            issue_date: "June 15, 2024".into(),
            course: "Bachelor of Computer Science".into(),
            grade: "A+".into(),
        }
    }
}

/// One row of the imported student roster.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub id: u32,
    pub name: String,
    pub roll_no: String,
    pub certificate_id: String,
    pub course: String,
    pub issue_date: String,
}

impl StudentRecord {
    /// The fixed four-row roster every import produces.
    pub fn roster() -> Vec<Self> {
        vec![
            Self {
                id: 1,
                name: "Alice Johnson".into(),
                roll_no: "CS2021001".into(),
                certificate_id: "CERT-2024-001".into(),
                course: "Computer Science".into(),
                issue_date: "2024-06-15".into(),
            },
            Self {
                id: 2,
                name: "Bob Smith".into(),
                roll_no: "CS2021002".into(),
                certificate_id: "CERT-2024-002".into(),
                course: "Computer Science".into(),
                issue_date: "2024-06-15".into(),
            },
            Self {
                id: 3,
                name: "Carol Davis".into(),
                roll_no: "EE2021001".into(),
                certificate_id: "CERT-2024-003".into(),
                course: "Electrical Engineering".into(),
                issue_date: "2024-06-15".into(),
            },
            Self {
                id: 4,
                name: "David Wilson".into(),
                roll_no: "ME2021001".into(),
                certificate_id: "CERT-2024-004".into(),
                course: "Mechanical Engineering".into(),
                issue_date: "2024-06-15".into(),
            },
        ]
    }
}

/// A file the user picked, reduced to what the demo actually inspects: the
/// name and the declared media type. The contents are never opened.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedFile {
    pub name: String,
    pub media_type: String,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, media_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            media_type: media_type.into(),
        }
    }

    /// Build a selection from a bare file name, guessing the media type from
    /// the extension the way a browser populates `File.type`.
    pub fn from_name(name: impl Into<String>) -> Self {
        let name = name.into();
        let media_type = crate::gate::media_type_for(&name).to_string();
        Self { name, media_type }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_extraction_is_fixed() {
        let data = ExtractedData::sample();
        assert_eq!(data.name, "John Doe");
        assert_eq!(data.roll_no, "CS2021001");
        assert_eq!(data.certificate_id, "CERT-2024-001");
    }

    #[test]
    fn certificate_info_stamps_submitted_id() {
        let info = CertificateInfo::for_id("anything-goes-here");
        assert_eq!(info.certificate_id, "anything-goes-here");
        assert_eq!(info.grade, "A+");
    }

    #[test]
    fn roster_shape() {
        let roster = StudentRecord::roster();
        assert_eq!(roster.len(), 4);
        let ids: Vec<u32> = roster.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
        let rolls: Vec<&str> = roster.iter().map(|r| r.roll_no.as_str()).collect();
        assert_eq!(rolls, vec!["CS2021001", "CS2021002", "EE2021001", "ME2021001"]);
        assert!(roster.iter().all(|r| r.issue_date == "2024-06-15"));
    }

    #[test]
    fn selection_from_name_guesses_type() {
        assert_eq!(SelectedFile::from_name("degree.pdf").media_type, "application/pdf");
        assert_eq!(SelectedFile::from_name("roster.csv").media_type, "text/csv");
        assert_eq!(SelectedFile::from_name("scan.jpeg").media_type, "image/jpeg");
    }
}
