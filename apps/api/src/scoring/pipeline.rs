//! Scoring Orchestrator — sequences the pipeline for one request:
//! normalization → similarity → keyword matching → entity extraction →
//! composition.
//!
//! Text is normalized exactly once and every lexical match runs against the
//! cleaned text. The tagger is the single exception: it receives the
//! original text, since entity recognition depends on casing the normalizer
//! destroys, and its output is lowercased at the seam.

use crate::errors::AppError;
use crate::models::job::JobRequirements;
use crate::scoring::compose::{compose, ScoreResult};
use crate::scoring::keywords::{coverage, entity_coverage};
use crate::scoring::normalize::normalize;
use crate::scoring::similarity::similarity;
use crate::tagger::{experience_entities, EntityTagger};

/// Scores one resume against one set of job requirements.
///
/// The only fallible step is the tagger call; everything else is pure
/// computation. The tagger is not invoked at all when the job lists no
/// experience keywords — that factor is 0 by definition.
pub async fn score_resume(
    resume_text: &str,
    job: &JobRequirements,
    tagger: &dyn EntityTagger,
) -> Result<ScoreResult, AppError> {
    let cleaned = normalize(resume_text);

    let description_score = similarity(&cleaned, &job.description);
    let skills_score = coverage(&cleaned, &job.required_skills);
    let priority_skills_score = coverage(&cleaned, &job.priority_skills);

    let experience_score = if job.experience_keywords.is_empty() {
        0.0
    } else {
        let spans = tagger.tag(resume_text).await?;
        let entities = experience_entities(&spans);
        entity_coverage(&entities, &job.experience_keywords)
    };

    Ok(compose(
        description_score,
        skills_score,
        priority_skills_score,
        experience_score,
    ))
}
