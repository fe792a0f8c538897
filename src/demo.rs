use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;

use crate::error::AppError;
use crate::evaluation::{
    render_skill_list, CandidateScope, EvaluationBatchResult, EvaluationService, FitWeights,
    JobDescription, JobDescriptionId,
};
use crate::infra::{
    load_directory, sample_jobs, InMemoryEvaluationRepository, InMemoryJobDescriptionStore,
};

#[derive(Args, Debug, Default)]
pub(crate) struct RankArgs {
    /// Job description id from the built-in postings (defaults to the first)
    #[arg(long)]
    pub(crate) job: Option<String>,
    /// Ad hoc position title used instead of a stored job description
    #[arg(long, conflicts_with = "job")]
    pub(crate) position: Option<String>,
    /// Required skill listing for the ad hoc position
    #[arg(long, requires = "position")]
    pub(crate) skills: Option<String>,
    /// Assessment CSV export to rank instead of the sample roster
    #[arg(long)]
    pub(crate) assessments: Option<PathBuf>,
    /// Rank every candidate regardless of position
    #[arg(long)]
    pub(crate) cross_position: bool,
    /// Only print the first N ranked candidates
    #[arg(long)]
    pub(crate) top: Option<usize>,
}

pub(crate) async fn run_rank(args: RankArgs) -> Result<(), AppError> {
    let RankArgs {
        job,
        position,
        skills,
        assessments,
        cross_position,
        top,
    } = args;

    let directory = Arc::new(load_directory(assessments)?);
    let jobs = Arc::new(InMemoryJobDescriptionStore::default());
    for sample in sample_jobs() {
        jobs.insert(sample);
    }

    let job_description_id = match (job, position) {
        (Some(id), _) => JobDescriptionId(id),
        (None, Some(position)) => {
            let adhoc = JobDescription {
                id: JobDescriptionId("adhoc".to_string()),
                position,
                skills_text: skills.unwrap_or_default(),
                required_experience_text: String::new(),
                is_active: true,
            };
            let id = adhoc.id.clone();
            jobs.insert(adhoc);
            id
        }
        (None, None) => sample_jobs()
            .into_iter()
            .next()
            .map(|sample| sample.id)
            .unwrap_or_else(|| JobDescriptionId("jd-backend".to_string())),
    };

    let scope = if cross_position {
        CandidateScope::AllPositions
    } else {
        CandidateScope::JobPosition
    };

    let service = EvaluationService::new(
        directory,
        jobs,
        Arc::new(InMemoryEvaluationRepository::default()),
        FitWeights::default(),
    );
    let batch = service.run_evaluation(&job_description_id, scope).await?;

    render_ranking(&batch, top);
    Ok(())
}

fn render_ranking(batch: &EvaluationBatchResult, top: Option<usize>) {
    println!("Fit ranking for {}", batch.job_description_id);
    if batch.evaluations.is_empty() {
        println!("No candidates were evaluable for this job description.");
    }

    let shown = top.unwrap_or(batch.evaluations.len());
    for evaluation in batch.evaluations.iter().take(shown) {
        println!(
            "{:>3}. {} | fit {} ({}) | experience {} | education {}",
            evaluation.ranking,
            evaluation.candidate_id,
            evaluation.fit_score,
            evaluation.tier.label(),
            evaluation.experience_match,
            evaluation.education_match
        );
        if !evaluation.matching_skills.is_empty() {
            println!("     matched: {}", render_skill_list(&evaluation.matching_skills));
        }
        if !evaluation.missing_skills.is_empty() {
            println!("     gaps: {}", render_skill_list(&evaluation.missing_skills));
        }
        println!("     {}", evaluation.recommendation);
        if let Some(insight) = &evaluation.insight {
            println!("     insight: {}", insight);
        }
    }

    if batch.evaluations.len() > shown {
        println!("... {} more candidates ranked", batch.evaluations.len() - shown);
    }

    if batch.skipped.is_empty() {
        println!("\nSkipped candidates: none");
    } else {
        println!("\nSkipped candidates");
        for skipped in &batch.skipped {
            println!("- {} ({})", skipped.candidate_id, skipped.reason.label());
        }
    }
}
