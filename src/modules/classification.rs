//! Subject taxonomy and Dewey class derivation
//!
//! Only the ten first-level Dewey classes are modelled. A table is built once,
//! never mutated, and shared read-only behind an `Arc`.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use strsim::jaro_winkler;
use utoipa::ToSchema;

use crate::domain::DomainError;

/// Code assigned when a main subject is not in the table (general works)
pub const DEFAULT_CODE: &str = "000";

/// Minimum similarity for an unknown subject to get a "did you mean" hint
const SUGGESTION_THRESHOLD: f64 = 0.8;

/// One entry of the taxonomy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Subject {
    pub main_subject: String,
    pub code: String,
    pub secondary_subjects: Vec<String>,
}

impl Subject {
    pub fn new(main_subject: &str, code: &str, secondary_subjects: &[&str]) -> Self {
        Self {
            main_subject: main_subject.to_string(),
            code: code.to_string(),
            secondary_subjects: secondary_subjects.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Immutable main-subject -> code mapping.
///
/// Matching is by exact label everywhere: "Science" matches, "science" and
/// "Sci" do not.
#[derive(Debug, Clone)]
pub struct ClassificationTable {
    subjects: Vec<Subject>,
    index: HashMap<String, usize>,
}

impl ClassificationTable {
    /// Build a table, rejecting malformed codes and duplicate labels or codes.
    pub fn new(subjects: Vec<Subject>) -> Result<Self, DomainError> {
        if subjects.is_empty() {
            return Err(DomainError::Validation(
                "classification table must declare at least one subject".to_string(),
            ));
        }

        let mut subjects = subjects;
        subjects.sort_by(|a, b| a.code.cmp(&b.code));

        let mut index = HashMap::with_capacity(subjects.len());
        for (pos, subject) in subjects.iter().enumerate() {
            if subject.code.len() != 3 || !subject.code.chars().all(|c| c.is_ascii_digit()) {
                return Err(DomainError::Validation(format!(
                    "subject '{}' has invalid code '{}' (expected three digits)",
                    subject.main_subject, subject.code
                )));
            }
            if pos > 0 && subjects[pos - 1].code == subject.code {
                return Err(DomainError::Validation(format!(
                    "code '{}' is assigned to more than one subject",
                    subject.code
                )));
            }
            if index.insert(subject.main_subject.clone(), pos).is_some() {
                return Err(DomainError::Validation(format!(
                    "subject '{}' is declared more than once",
                    subject.main_subject
                )));
            }
        }

        Ok(Self { subjects, index })
    }

    /// Parse a JSON array of subjects, as written by `serde_json::to_string(table.subjects())`.
    pub fn from_json(json: &str) -> Result<Self, DomainError> {
        let subjects: Vec<Subject> = serde_json::from_str(json)
            .map_err(|e| DomainError::Validation(format!("invalid taxonomy JSON: {}", e)))?;
        Self::new(subjects)
    }

    /// The ten first-level Dewey classes with their divisions as secondary subjects.
    pub fn dewey() -> Self {
        let subjects = vec![
            Subject::new(
                "General works",
                "000",
                &[
                    "Computer science",
                    "Bibliographies",
                    "Library & information sciences",
                    "Encyclopedias & books of facts",
                    "Magazines & journals",
                    "Associations & museums",
                    "News media & journalism",
                    "Quotations",
                    "Manuscripts & rare books",
                ],
            ),
            Subject::new(
                "Philosophy & psychology",
                "100",
                &[
                    "Metaphysics",
                    "Epistemology",
                    "Parapsychology & occultism",
                    "Philosophical schools of thought",
                    "Psychology",
                    "Logic",
                    "Ethics",
                    "Ancient, medieval & eastern philosophy",
                    "Modern western philosophy",
                ],
            ),
            Subject::new(
                "Religion",
                "200",
                &[
                    "Philosophy & theory of religion",
                    "The Bible",
                    "Christianity",
                    "Christian practice & observance",
                    "Christian pastoral practice",
                    "Christian organization",
                    "History of Christianity",
                    "Christian denominations",
                    "Other religions",
                ],
            ),
            Subject::new(
                "Social sciences",
                "300",
                &[
                    "Statistics",
                    "Political science",
                    "Economics",
                    "Law",
                    "Public administration & military science",
                    "Social problems & social services",
                    "Education",
                    "Commerce, communications & transportation",
                    "Customs, etiquette & folklore",
                ],
            ),
            Subject::new(
                "Language",
                "400",
                &[
                    "Linguistics",
                    "English & Old English",
                    "German & related languages",
                    "French & related languages",
                    "Italian, Romanian & related languages",
                    "Spanish & Portuguese",
                    "Latin & Italic languages",
                    "Classical & modern Greek",
                    "Other languages",
                ],
            ),
            Subject::new(
                "Science",
                "500",
                &[
                    "Mathematics",
                    "Astronomy",
                    "Physics",
                    "Chemistry",
                    "Earth sciences & geology",
                    "Fossils & prehistoric life",
                    "Biology",
                    "Plants",
                    "Animals",
                ],
            ),
            Subject::new(
                "Technology",
                "600",
                &[
                    "Medicine & health",
                    "Engineering",
                    "Agriculture",
                    "Home & family management",
                    "Management & public relations",
                    "Chemical engineering",
                    "Manufacturing",
                    "Manufacture for specific uses",
                    "Building & construction",
                ],
            ),
            Subject::new(
                "Arts & recreation",
                "700",
                &[
                    "Area planning & landscaping",
                    "Architecture",
                    "Sculpture, ceramics & metalwork",
                    "Drawing & decorative arts",
                    "Painting",
                    "Graphic arts",
                    "Photography & computer art",
                    "Music",
                    "Sports, games & entertainment",
                ],
            ),
            Subject::new(
                "Literature",
                "800",
                &[
                    "American literature in English",
                    "English & Old English literatures",
                    "German & related literatures",
                    "French & related literatures",
                    "Italian, Romanian & related literatures",
                    "Spanish & Portuguese literatures",
                    "Latin & Italic literatures",
                    "Classical & modern Greek literatures",
                    "Other literatures",
                ],
            ),
            Subject::new(
                "History & geography",
                "900",
                &[
                    "Geography & travel",
                    "Biography & genealogy",
                    "History of ancient world",
                    "History of Europe",
                    "History of Asia",
                    "History of Africa",
                    "History of North America",
                    "History of South America",
                    "History of other areas",
                ],
            ),
        ];

        // The built-in table satisfies every constructor check.
        let mut index = HashMap::with_capacity(subjects.len());
        for (pos, subject) in subjects.iter().enumerate() {
            index.insert(subject.main_subject.clone(), pos);
        }
        Self { subjects, index }
    }

    /// All subjects, ordered by code
    pub fn subjects(&self) -> &[Subject] {
        &self.subjects
    }

    /// Strict lookup by exact label.
    pub fn lookup(&self, main_subject: &str) -> Result<&Subject, DomainError> {
        self.index
            .get(main_subject)
            .map(|&pos| &self.subjects[pos])
            .ok_or_else(|| DomainError::UnknownSubject {
                subject: main_subject.to_string(),
                suggestion: self.closest_label(main_subject),
            })
    }

    /// Code for `main_subject`, falling back to `DEFAULT_CODE` for unknown labels.
    pub fn code_for(&self, main_subject: &str) -> &str {
        self.index
            .get(main_subject)
            .map(|&pos| self.subjects[pos].code.as_str())
            .unwrap_or(DEFAULT_CODE)
    }

    /// Secondary subjects declared for `main_subject`.
    pub fn secondary_subjects_for(&self, main_subject: &str) -> Result<&[String], DomainError> {
        self.lookup(main_subject)
            .map(|subject| subject.secondary_subjects.as_slice())
    }

    fn closest_label(&self, input: &str) -> Option<String> {
        let needle = input.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }

        self.subjects
            .iter()
            .map(|s| (jaro_winkler(&needle, &s.main_subject.to_lowercase()), s))
            .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
            .max_by(|a, b| a.0.total_cmp(&b.0))
            .map(|(_, s)| s.main_subject.clone())
    }
}

impl Default for ClassificationTable {
    fn default() -> Self {
        Self::dewey()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_for_every_dewey_class() {
        let table = ClassificationTable::dewey();
        let expected = [
            ("General works", "000"),
            ("Philosophy & psychology", "100"),
            ("Religion", "200"),
            ("Social sciences", "300"),
            ("Language", "400"),
            ("Science", "500"),
            ("Technology", "600"),
            ("Arts & recreation", "700"),
            ("Literature", "800"),
            ("History & geography", "900"),
        ];
        for (subject, code) in expected {
            assert_eq!(table.code_for(subject), code, "wrong code for {}", subject);
        }
        assert_eq!(table.subjects().len(), 10);
    }

    #[test]
    fn test_unknown_subject_defaults_to_general_works() {
        let table = ClassificationTable::dewey();
        assert_eq!(table.code_for("Nonexistent Topic"), "000");
        assert_eq!(table.code_for(""), "000");
    }

    #[test]
    fn test_matching_is_exact() {
        let table = ClassificationTable::dewey();
        assert_eq!(table.code_for("science"), "000");
        assert_eq!(table.code_for("Sci"), "000");
        assert!(table.secondary_subjects_for("science").is_err());
    }

    #[test]
    fn test_secondary_subjects_for_known_subject() {
        let table = ClassificationTable::dewey();
        let secondary = table.secondary_subjects_for("Science").unwrap();
        assert_eq!(secondary.first().map(String::as_str), Some("Mathematics"));
        assert!(secondary.iter().any(|s| s == "Physics"));
    }

    #[test]
    fn test_secondary_subjects_for_unknown_subject_suggests_label() {
        let table = ClassificationTable::dewey();
        match table.secondary_subjects_for("Literatur") {
            Err(DomainError::UnknownSubject { subject, suggestion }) => {
                assert_eq!(subject, "Literatur");
                assert_eq!(suggestion.as_deref(), Some("Literature"));
            }
            other => panic!("expected UnknownSubject, got {:?}", other),
        }

        match table.lookup("zzzz") {
            Err(DomainError::UnknownSubject { suggestion, .. }) => assert!(suggestion.is_none()),
            other => panic!("expected UnknownSubject, got {:?}", other),
        }
    }

    #[test]
    fn test_custom_table_validation() {
        let bad_code = vec![Subject::new("Poetry", "81", &[])];
        assert!(matches!(
            ClassificationTable::new(bad_code),
            Err(DomainError::Validation(_))
        ));

        let duplicate_code = vec![
            Subject::new("Poetry", "800", &[]),
            Subject::new("Drama", "800", &[]),
        ];
        assert!(ClassificationTable::new(duplicate_code).is_err());

        assert!(ClassificationTable::new(Vec::new()).is_err());
    }

    #[test]
    fn test_custom_table_from_json() {
        let json = r#"[
            {"main_subject": "Poetry", "code": "810", "secondary_subjects": ["Sonnets"]},
            {"main_subject": "Drama", "code": "820", "secondary_subjects": []}
        ]"#;
        let table = ClassificationTable::from_json(json).unwrap();
        assert_eq!(table.code_for("Drama"), "820");
        assert_eq!(table.code_for("Science"), DEFAULT_CODE);
        assert_eq!(table.secondary_subjects_for("Poetry").unwrap(), ["Sonnets"]);
    }

    #[test]
    fn test_dewey_round_trips_through_constructor() {
        let table = ClassificationTable::dewey();
        let rebuilt = ClassificationTable::new(table.subjects().to_vec()).unwrap();
        assert_eq!(rebuilt.subjects(), table.subjects());
    }
}
