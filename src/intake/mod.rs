//! Assessment provider CSV intake.
//!
//! Parses the provider's candidate export into roster entries the evaluation
//! service can score. Rows are trimmed, score columns read leniently, and
//! duplicate candidate ids keep their first row.

mod parser;

use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use crate::evaluation::domain::{Assessment, Candidate};

/// One imported row: the candidate identity plus the provider assessment.
#[derive(Debug, Clone)]
pub struct RosterEntry {
    pub candidate: Candidate,
    pub assessment: Assessment,
}

#[derive(Debug)]
pub enum AssessmentImportError {
    Io(std::io::Error),
    Csv(csv::Error),
}

impl std::fmt::Display for AssessmentImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssessmentImportError::Io(err) => {
                write!(f, "failed to read assessment export: {}", err)
            }
            AssessmentImportError::Csv(err) => write!(f, "invalid assessment CSV data: {}", err),
        }
    }
}

impl std::error::Error for AssessmentImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AssessmentImportError::Io(err) => Some(err),
            AssessmentImportError::Csv(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for AssessmentImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for AssessmentImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

pub struct AssessmentImporter;

impl AssessmentImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<RosterEntry>, AssessmentImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<RosterEntry>, AssessmentImportError> {
        let mut seen = HashSet::new();
        let mut roster = Vec::new();

        for entry in parser::parse_records(reader)? {
            // Re-exported rows appear in provider files; the first row wins.
            if !seen.insert(entry.candidate.id.clone()) {
                continue;
            }
            roster.push(entry);
        }

        Ok(roster)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const HEADER: &str =
        "Candidate ID,Full Name,Position,Technical Skills,Experience Match,Education,Skills,Insights\n";

    #[test]
    fn from_reader_parses_full_rows() {
        let csv = format!(
            "{HEADER}cand-1,Ada Alvarez,Data Engineer,82,74,68,\"Python, SQL, Docker\",Strong pipeline background\n"
        );
        let roster =
            AssessmentImporter::from_reader(Cursor::new(csv)).expect("import succeeds");

        assert_eq!(roster.len(), 1);
        let entry = &roster[0];
        assert_eq!(entry.candidate.id.0, "cand-1");
        assert_eq!(entry.candidate.full_name, "Ada Alvarez");
        assert_eq!(entry.candidate.position, "Data Engineer");
        assert_eq!(entry.assessment.technical_skills, 82);
        assert_eq!(entry.assessment.experience_match, 74);
        assert_eq!(entry.assessment.education, 68);
        assert_eq!(entry.assessment.skills_text, "Python, SQL, Docker");
        assert_eq!(
            entry.assessment.insights_text.as_deref(),
            Some("Strong pipeline background")
        );
    }

    #[test]
    fn duplicate_candidate_ids_keep_the_first_row() {
        let csv = format!(
            "{HEADER}cand-1,Ada Alvarez,Data Engineer,82,74,68,Python,First\n\
             cand-1,Ada Alvarez,Data Engineer,10,10,10,Basic,Second\n"
        );
        let roster =
            AssessmentImporter::from_reader(Cursor::new(csv)).expect("import succeeds");

        assert_eq!(roster.len(), 1);
        assert_eq!(roster[0].assessment.experience_match, 74);
        assert_eq!(roster[0].assessment.insights_text.as_deref(), Some("First"));
    }

    #[test]
    fn rows_without_candidate_ids_are_dropped() {
        let csv = format!(
            "{HEADER},Nameless Person,Data Engineer,50,50,50,Python,\n\
             cand-2,Bo Lindgren,Data Engineer,60,60,60,SQL,\n"
        );
        let roster =
            AssessmentImporter::from_reader(Cursor::new(csv)).expect("import succeeds");

        assert_eq!(roster.len(), 1);
        assert_eq!(roster[0].candidate.id.0, "cand-2");
    }

    #[test]
    fn blank_optional_columns_read_as_absent() {
        let csv = format!("{HEADER}cand-3,Caz Okafor,Data Engineer,,,,,\n");
        let roster =
            AssessmentImporter::from_reader(Cursor::new(csv)).expect("import succeeds");

        let assessment = &roster[0].assessment;
        assert_eq!(assessment.technical_skills, 0);
        assert_eq!(assessment.experience_match, 0);
        assert_eq!(assessment.education, 0);
        assert!(assessment.skills_text.is_empty());
        assert!(assessment.insights_text.is_none());
    }

    #[test]
    fn score_columns_parse_leniently() {
        assert_eq!(parser::parse_score_for_tests(Some("88.6")), 89);
        assert_eq!(parser::parse_score_for_tests(Some(" 72 ")), 72);
        assert_eq!(parser::parse_score_for_tests(Some("n/a")), 0);
        assert_eq!(parser::parse_score_for_tests(None), 0);
    }

    #[test]
    fn from_path_propagates_io_errors() {
        let error = AssessmentImporter::from_path("./does-not-exist.csv")
            .expect_err("expected io error");

        match error {
            AssessmentImportError::Io(_) => {}
            other => panic!("expected io error, got {other:?}"),
        }
    }
}
