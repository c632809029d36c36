//! Severity aggregation over the patient's reported symptoms.

use crate::reference::ReferenceData;
use serde::{Deserialize, Serialize};

/// Weight at or above which a symptom is primary
pub const PRIMARY_SEVERITY: u32 = 5;

/// Total severity and the primary/secondary split
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymptomAnalysis {
    pub total_severity: u32,
    pub primary_symptoms: Vec<String>,
    pub secondary_symptoms: Vec<String>,
}

/// Sum symptom weights (unknown symptoms weigh 1) and split by `primary_threshold`.
///
/// Patient order and spelling are preserved in both lists.
pub fn analyze(
    data: &ReferenceData,
    patient_symptoms: &[String],
    primary_threshold: u32,
) -> SymptomAnalysis {
    let mut analysis = SymptomAnalysis::default();

    for symptom in patient_symptoms.iter().filter(|s| !s.trim().is_empty()) {
        let weight = data.symptom_weight(symptom);
        analysis.total_severity += weight;
        if weight >= primary_threshold {
            analysis.primary_symptoms.push(symptom.clone());
        } else {
            analysis.secondary_symptoms.push(symptom.clone());
        }
    }

    analysis
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_symptoms_default_to_one() {
        let data = ReferenceData::default();
        let symptoms = vec!["mystery ache".to_string(), "odd tingle".to_string()];
        let analysis = analyze(&data, &symptoms, PRIMARY_SEVERITY);
        assert_eq!(analysis.total_severity, 2);
        assert!(analysis.primary_symptoms.is_empty());
        assert_eq!(analysis.secondary_symptoms, symptoms);
    }

    #[test]
    fn test_threshold_one_makes_everything_primary() {
        let data = ReferenceData::default();
        let symptoms = vec!["cough".to_string()];
        let analysis = analyze(&data, &symptoms, 1);
        assert_eq!(analysis.primary_symptoms, symptoms);
        assert!(analysis.secondary_symptoms.is_empty());
    }

    #[test]
    fn test_empty_input() {
        let analysis = analyze(&ReferenceData::default(), &[], PRIMARY_SEVERITY);
        assert_eq!(analysis, SymptomAnalysis::default());
    }

    #[test]
    fn test_blank_symptoms_add_nothing() {
        let data = ReferenceData::default();
        let symptoms = vec!["cough".to_string(), "  ".to_string(), String::new()];
        let analysis = analyze(&data, &symptoms, PRIMARY_SEVERITY);
        assert_eq!(analysis.total_severity, 1);
        assert_eq!(analysis.secondary_symptoms, vec!["cough"]);
        assert!(analysis.primary_symptoms.is_empty());
    }
}
