use serde::{Deserialize, Deserializer};
use std::io::Read;

use super::RosterEntry;
use crate::evaluation::domain::{Assessment, Candidate, CandidateId};

pub(crate) fn parse_records<R: Read>(reader: R) -> Result<Vec<RosterEntry>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut entries = Vec::new();

    for record in csv_reader.deserialize::<AssessmentRow>() {
        let row = record?;
        if row.candidate_id.is_empty() {
            continue;
        }
        entries.push(row.into_entry());
    }

    Ok(entries)
}

#[derive(Debug, Deserialize)]
struct AssessmentRow {
    #[serde(rename = "Candidate ID")]
    candidate_id: String,
    #[serde(rename = "Full Name", default)]
    full_name: String,
    #[serde(rename = "Position", default)]
    position: String,
    #[serde(
        rename = "Technical Skills",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    technical_skills: Option<String>,
    #[serde(
        rename = "Experience Match",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    experience_match: Option<String>,
    #[serde(rename = "Education", default, deserialize_with = "empty_string_as_none")]
    education: Option<String>,
    #[serde(rename = "Skills", default)]
    skills: String,
    #[serde(rename = "Insights", default, deserialize_with = "empty_string_as_none")]
    insights: Option<String>,
}

impl AssessmentRow {
    fn into_entry(self) -> RosterEntry {
        let candidate_id = CandidateId(self.candidate_id);
        RosterEntry {
            candidate: Candidate {
                id: candidate_id.clone(),
                full_name: self.full_name,
                position: self.position,
            },
            assessment: Assessment {
                candidate_id,
                technical_skills: parse_score(self.technical_skills.as_deref()),
                experience_match: parse_score(self.experience_match.as_deref()),
                education: parse_score(self.education.as_deref()),
                skills_text: self.skills,
                insights_text: self.insights,
            },
        }
    }
}

/// Provider exports mix integers, decimals, and junk in the score columns.
/// Anything unreadable lands at zero; range clamping happens at scoring time.
fn parse_score(raw: Option<&str>) -> i16 {
    raw.and_then(|value| value.trim().parse::<f64>().ok())
        .map(|value| value.round() as i16)
        .unwrap_or(0)
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

#[cfg(test)]
pub(crate) fn parse_score_for_tests(raw: Option<&str>) -> i16 {
    parse_score(raw)
}
