//! Batch ranking: fans candidate scoring out across tasks, then orders the
//! cohort and assigns contiguous rankings.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::warn;

use super::domain::{Assessment, Candidate, CandidateId, Evaluation, JobDescription};
use super::engine::FitEngine;

/// Which candidates a batch considers for a job description.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CandidateScope {
    /// Only candidates whose position matches the job's (case-insensitive).
    #[default]
    JobPosition,
    /// Every candidate in the directory, regardless of position.
    AllPositions,
}

/// One directory entry heading into a batch. The assessment is optional
/// because candidates can be registered before a provider scores them.
#[derive(Debug, Clone)]
pub struct CohortMember {
    pub candidate: Candidate,
    pub assessment: Option<Assessment>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    MissingAssessment,
}

impl SkipReason {
    pub const fn label(self) -> &'static str {
        match self {
            SkipReason::MissingAssessment => "missing assessment",
        }
    }
}

/// A candidate the batch could not score, recorded so the roster stays
/// auditable instead of silently shrinking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedCandidate {
    pub candidate_id: CandidateId,
    pub reason: SkipReason,
}

/// Outcome of one batch: evaluations in rank order plus the skipped roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedCohort {
    pub evaluations: Vec<Evaluation>,
    pub skipped: Vec<SkippedCandidate>,
}

/// Scores every eligible cohort member against the job concurrently and
/// returns the cohort ordered and ranked.
///
/// A missing assessment skips the candidate rather than failing the batch,
/// and a scoring task that dies is logged and dropped the same way. The
/// caller supplies `evaluated_at` so every record in the batch carries one
/// timestamp.
pub async fn run_batch(
    engine: Arc<FitEngine>,
    job: &JobDescription,
    roster: Vec<CohortMember>,
    scope: CandidateScope,
    evaluated_at: DateTime<Utc>,
) -> RankedCohort {
    let profile = Arc::new(engine.job_profile(job));
    let mut skipped = Vec::new();
    let mut handles = Vec::new();

    for member in eligible(roster, scope, &job.position) {
        let CohortMember {
            candidate,
            assessment,
        } = member;
        let assessment = match assessment {
            Some(assessment) => assessment,
            None => {
                warn!(
                    candidate_id = %candidate.id,
                    "skipping candidate without an assessment"
                );
                skipped.push(SkippedCandidate {
                    candidate_id: candidate.id,
                    reason: SkipReason::MissingAssessment,
                });
                continue;
            }
        };

        let engine = Arc::clone(&engine);
        let profile = Arc::clone(&profile);
        let job_description_id = job.id.clone();
        handles.push(tokio::spawn(async move {
            let breakdown = engine.evaluate(&assessment, &profile);
            let Assessment { insights_text, .. } = assessment;
            Evaluation {
                candidate_id: candidate.id,
                job_description_id,
                fit_score: breakdown.fit_score,
                experience_match: breakdown.dimensions.experience,
                education_match: breakdown.dimensions.education,
                matching_skills: breakdown.matching_skills,
                missing_skills: breakdown.missing_skills,
                tier: breakdown.tier,
                recommendation: breakdown.recommendation,
                insight: insights_text,
                // Placeholder until the whole cohort is ordered below.
                ranking: 0,
                evaluated_at,
            }
        }));
    }

    let mut evaluations = Vec::with_capacity(handles.len());
    for handle in handles {
        match handle.await {
            Ok(evaluation) => evaluations.push(evaluation),
            Err(err) => warn!(%err, "cohort scoring task failed"),
        }
    }

    order_cohort(&mut evaluations);
    assign_rankings(&mut evaluations);

    RankedCohort {
        evaluations,
        skipped,
    }
}

fn eligible(
    roster: Vec<CohortMember>,
    scope: CandidateScope,
    position: &str,
) -> Vec<CohortMember> {
    match scope {
        CandidateScope::AllPositions => roster,
        CandidateScope::JobPosition => roster
            .into_iter()
            .filter(|member| {
                member
                    .candidate
                    .position
                    .trim()
                    .eq_ignore_ascii_case(position.trim())
            })
            .collect(),
    }
}

/// Fit score descending, experience descending, candidate id ascending. The
/// id leg makes the order total, so reruns over an unchanged cohort rank
/// identically.
fn order_cohort(evaluations: &mut [Evaluation]) {
    evaluations.sort_by(|a, b| {
        b.fit_score
            .cmp(&a.fit_score)
            .then_with(|| b.experience_match.cmp(&a.experience_match))
            .then_with(|| a.candidate_id.cmp(&b.candidate_id))
    });
}

fn assign_rankings(evaluations: &mut [Evaluation]) {
    for (index, evaluation) in evaluations.iter_mut().enumerate() {
        evaluation.ranking = (index + 1) as u32;
    }
}
