//! Axum route handlers for the Scoring API.

use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::info;

use crate::document::fetch_and_extract;
use crate::errors::AppError;
use crate::models::job::JobRequirements;
use crate::scoring::compose::ScoreResult;
use crate::scoring::pipeline::score_resume;
use crate::state::AppState;

/// Wire contract of the scoring endpoint. Field names match the upstream
/// job-portal caller's payload; all collections default to fresh empty
/// vectors when absent.
#[derive(Debug, Deserialize)]
pub struct ScoreResumeRequest {
    pub resume_url: String,
    #[serde(default)]
    pub job_description: String,
    #[serde(default)]
    pub skills_required: Vec<String>,
    #[serde(default)]
    pub priority_skills: Vec<String>,
    #[serde(default)]
    pub experience_keywords: Vec<String>,
}

/// POST /api/v1/resumes/score
///
/// Fetches the resume document, extracts its text, and runs the scoring
/// pipeline against the supplied job requirements. Fetch and parse failures
/// surface as client-visible errors; the pipeline itself cannot fail once
/// text is available (short of the tagger collaborator).
pub async fn handle_score_resume(
    State(state): State<AppState>,
    Json(request): Json<ScoreResumeRequest>,
) -> Result<Json<ScoreResult>, AppError> {
    if request.resume_url.trim().is_empty() {
        return Err(AppError::Validation("resume_url is required".to_string()));
    }

    let resume_text = fetch_and_extract(&state.http, &request.resume_url).await?;

    let job = JobRequirements {
        description: request.job_description,
        required_skills: request.skills_required,
        priority_skills: request.priority_skills,
        experience_keywords: request.experience_keywords,
    };

    let result = score_resume(&resume_text, &job, state.tagger.as_ref()).await?;

    info!(
        "Scored resume against job: overall={} description={} skills={}",
        result.overall_score,
        result.breakdown.description_score,
        result.breakdown.skills_score
    );

    Ok(Json(result))
}
