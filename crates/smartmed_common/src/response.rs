//! Output records of a consultation.
//!
//! Built fresh for every request and thrown away after rendering.

use crate::matcher::DiseaseMatch;
use crate::profile::PatientProfile;
use crate::severity::SymptomAnalysis;
use serde::{Deserialize, Serialize};

/// The medicine recommended in place of the unavailable one
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub name: String,
    pub composition: String,
    /// 0-100
    pub confidence_score: f64,
    pub relief_time: String,
    /// 0-100
    pub effectiveness: u32,
    pub rationale: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disease: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubstitutionKind {
    #[serde(rename = "Exact Equivalent")]
    ExactEquivalent,
    #[serde(rename = "Therapeutic Alternative")]
    TherapeuticAlternative,
}

impl SubstitutionKind {
    pub fn for_tier(tier: u32) -> Self {
        if tier == 1 {
            SubstitutionKind::ExactEquivalent
        } else {
            SubstitutionKind::TherapeuticAlternative
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SubstitutionKind::ExactEquivalent => "Exact Equivalent",
            SubstitutionKind::TherapeuticAlternative => "Therapeutic Alternative",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Substitution {
    /// 1-based rank
    pub tier: u32,
    pub name: String,
    pub composition: String,
    pub price: f64,
    #[serde(rename = "type")]
    pub kind: SubstitutionKind,
    pub bioequivalent: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseOption {
    pub platform: String,
    pub price: f64,
    pub delivery: String,
    pub rating: f64,
    pub reviews: u32,
    pub offers: String,
    pub link: String,
    pub in_stock: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dosage {
    pub standard: String,
    pub maximum: String,
    pub duration: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafetyInfo {
    pub dosage: Dosage,
    pub warnings: Vec<String>,
    pub contraindications: Vec<String>,
}

/// Everything shown to the patient after a consultation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationResponse {
    pub patient_profile: PatientProfile,
    pub primary_recommendation: Recommendation,
    pub substitutions: Vec<Substitution>,
    pub purchase_options: Vec<PurchaseOption>,
    pub safety_info: SafetyInfo,
    pub dietary_advice: Vec<String>,
    pub lifestyle_recommendations: Vec<String>,
    pub red_flags: Vec<String>,
    pub detected_diseases: Vec<DiseaseMatch>,
    pub symptom_analysis: SymptomAnalysis,
}
