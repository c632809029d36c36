//! Symptom-to-disease matcher.
//!
//! Each known disease is scored by the fraction of its symptoms that the
//! patient reported. A disease symptom counts as reported when either name
//! contains the other after normalization, so "fever" picks up
//! `high_fever` and "severe headache" picks up `headache`.

use crate::config::MatchingConfig;
use crate::reference::{normalize, Disease, ReferenceData};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Minimum score (exclusive) for a disease to be reported
pub const MATCH_THRESHOLD: f64 = 0.3;

/// Maximum number of diseases reported
pub const MAX_MATCHES: usize = 3;

/// Matcher knobs, normally taken from config
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchOptions {
    pub threshold: f64,
    pub max_results: usize,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            threshold: MATCH_THRESHOLD,
            max_results: MAX_MATCHES,
        }
    }
}

impl From<&MatchingConfig> for MatchOptions {
    fn from(config: &MatchingConfig) -> Self {
        Self {
            threshold: config.effective_threshold(),
            max_results: config.effective_max_results(),
        }
    }
}

/// A disease together with how well the patient's symptoms cover it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiseaseMatch {
    #[serde(flatten)]
    pub disease: Disease,
    /// Matching symptoms / total disease symptoms (0.0-1.0)
    pub match_score: f64,
    /// Disease symptoms the patient reported, in disease order
    pub matching_symptoms: Vec<String>,
}

/// Score one disease against already-normalized patient symptoms
pub fn score_disease(disease: &Disease, patient: &[String]) -> (f64, Vec<String>) {
    if disease.symptoms.is_empty() {
        return (0.0, Vec::new());
    }

    let matching: Vec<String> = disease
        .symptoms
        .iter()
        .filter(|symptom| {
            let known = normalize(symptom);
            !known.is_empty()
                && patient
                    .iter()
                    .any(|reported| reported.contains(&known) || known.contains(reported.as_str()))
        })
        .cloned()
        .collect();

    let score = matching.len() as f64 / disease.symptoms.len() as f64;
    (score, matching)
}

/// Find the diseases best explained by the patient's symptoms.
///
/// Returns diseases scoring strictly above the threshold, best first,
/// ties kept in table order, at most `max_results`.
pub fn find_diseases(
    data: &ReferenceData,
    patient_symptoms: &[String],
    options: MatchOptions,
) -> Vec<DiseaseMatch> {
    let patient: Vec<String> = patient_symptoms
        .iter()
        .map(|s| normalize(s))
        .filter(|s| !s.is_empty())
        .collect();

    if patient.is_empty() {
        return Vec::new();
    }

    let mut matches: Vec<DiseaseMatch> = data
        .diseases()
        .iter()
        .filter_map(|disease| {
            let (match_score, matching_symptoms) = score_disease(disease, &patient);
            (match_score > options.threshold).then(|| DiseaseMatch {
                disease: disease.clone(),
                match_score,
                matching_symptoms,
            })
        })
        .collect();

    matches.sort_by(|a, b| b.match_score.total_cmp(&a.match_score));
    matches.truncate(options.max_results);

    debug!(
        "Matched {} diseases for {} symptoms",
        matches.len(),
        patient.len()
    );
    matches
}
