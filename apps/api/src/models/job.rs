use serde::{Deserialize, Serialize};

/// Job-side inputs to a scoring call. Request-scoped value object — nothing
/// here outlives the request.
///
/// Every collection defaults to a fresh empty `Vec` when absent from the
/// payload; duplicates are tolerated, not deduplicated. Matching against
/// these sets is case-insensitive throughout the pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobRequirements {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub priority_skills: Vec<String>,
    #[serde(default)]
    pub experience_keywords: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_collections_default_to_fresh_empty_vecs() {
        let job: JobRequirements =
            serde_json::from_str(r#"{"description": "Rust engineer"}"#).unwrap();
        assert_eq!(job.description, "Rust engineer");
        assert!(job.required_skills.is_empty());
        assert!(job.priority_skills.is_empty());
        assert!(job.experience_keywords.is_empty());
    }

    #[test]
    fn test_duplicates_are_preserved() {
        let job: JobRequirements = serde_json::from_str(
            r#"{"description": "", "required_skills": ["python", "python"]}"#,
        )
        .unwrap();
        assert_eq!(job.required_skills.len(), 2);
    }
}
