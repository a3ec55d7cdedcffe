//! Lexical similarity between resume text and a job description.
//!
//! The vector space is corpus-local: TF-IDF is fit on exactly the two input
//! documents, so the vocabulary is their term union and nothing else. The
//! weighting is fixed so that scores are reproducible across calls and
//! deployments:
//!
//! - tokens: maximal runs of ASCII-alphanumeric characters, lowercased,
//!   length ≥ 2
//! - TF: raw term count
//! - IDF: smoothed, `ln((1 + n) / (1 + df)) + 1` with n = 2
//! - vectors L2-normalized, score = cosine × 100

use std::collections::BTreeMap;

/// Number of documents in the corpus — always the (resume, description) pair.
const CORPUS_SIZE: f64 = 2.0;

/// Computes the TF-IDF cosine similarity between the two texts, in [0, 100].
///
/// Returns 0 when either text has no qualifying tokens or the documents
/// share no vocabulary — cosine against a zero vector is defined as 0,
/// not an error.
pub fn similarity(resume_text: &str, job_description: &str) -> f64 {
    let resume_tf = term_counts(resume_text);
    let job_tf = term_counts(job_description);
    if resume_tf.is_empty() || job_tf.is_empty() {
        return 0.0;
    }

    // Term union of the pair, ordered, so the accumulation below is
    // bit-stable across calls.
    let mut vector_pairs: BTreeMap<&str, (f64, f64)> = BTreeMap::new();
    for (term, tf) in &resume_tf {
        vector_pairs.entry(term).or_insert((0.0, 0.0)).0 = *tf;
    }
    for (term, tf) in &job_tf {
        vector_pairs.entry(term).or_insert((0.0, 0.0)).1 = *tf;
    }

    let mut dot = 0.0;
    let mut resume_norm_sq = 0.0;
    let mut job_norm_sq = 0.0;

    for (tf_resume, tf_job) in vector_pairs.values() {
        let df = f64::from(u8::from(*tf_resume > 0.0) + u8::from(*tf_job > 0.0));
        let idf = ((1.0 + CORPUS_SIZE) / (1.0 + df)).ln() + 1.0;

        let resume_weight = tf_resume * idf;
        let job_weight = tf_job * idf;

        dot += resume_weight * job_weight;
        resume_norm_sq += resume_weight * resume_weight;
        job_norm_sq += job_weight * job_weight;
    }

    if resume_norm_sq == 0.0 || job_norm_sq == 0.0 {
        return 0.0;
    }

    // Dividing by both magnitudes is the dot product of the L2-normalized
    // vectors. Clamp guards float drift at the boundaries.
    (dot / (resume_norm_sq.sqrt() * job_norm_sq.sqrt()) * 100.0).clamp(0.0, 100.0)
}

/// Raw term counts for one document. Single-character tokens are dropped,
/// matching the reference vectorizer's default token rule.
fn term_counts(text: &str) -> BTreeMap<String, f64> {
    let mut counts = BTreeMap::new();
    for token in text
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|t| t.len() >= 2)
    {
        *counts.entry(token.to_ascii_lowercase()).or_insert(0.0) += 1.0;
    }
    counts
}
