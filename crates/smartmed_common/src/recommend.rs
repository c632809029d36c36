//! Recommendation composer.
//!
//! Turns a patient profile into a full response:
//! 1. Match symptoms against the disease table
//! 2. Collect the detected diseases' medications
//! 3. Pick the first catalog medicine they mention that the patient is not allergic to
//! 4. Derive substitutions, purchase options, safety and advice from that pick

use crate::advice;
use crate::catalog::{self, CatalogEntry};
use crate::config::SmartMedConfig;
use crate::matcher::{find_diseases, DiseaseMatch, MatchOptions};
use crate::profile::PatientProfile;
use crate::purchase::purchase_options;
use crate::reference::ReferenceData;
use crate::response::{Recommendation, RecommendationResponse, Substitution, SubstitutionKind};
use crate::severity::{self, PRIMARY_SEVERITY};
use tracing::{info, warn};

/// Maximum substitution tiers offered
pub const MAX_SUBSTITUTIONS: usize = 3;

/// Confidence never exceeds this
const MAX_CONFIDENCE: f64 = 95.0;

/// Price multiplier for price-sensitive patients
const PRICE_SENSITIVE_DISCOUNT: f64 = 0.9;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecommendOptions {
    pub matching: MatchOptions,
    pub primary_severity: u32,
}

impl Default for RecommendOptions {
    fn default() -> Self {
        Self {
            matching: MatchOptions::default(),
            primary_severity: PRIMARY_SEVERITY,
        }
    }
}

impl From<&SmartMedConfig> for RecommendOptions {
    fn from(config: &SmartMedConfig) -> Self {
        Self {
            matching: MatchOptions::from(&config.matching),
            primary_severity: config.matching.primary_severity,
        }
    }
}

/// The chosen medicine, and the allergy it conflicts with if no safe choice existed
#[derive(Debug, Clone, PartialEq)]
pub struct PrimaryPick {
    pub recommendation: Recommendation,
    pub allergy_conflict: Option<String>,
}

/// Build the full response for a profile
pub fn generate(
    data: &ReferenceData,
    profile: &PatientProfile,
    options: RecommendOptions,
) -> RecommendationResponse {
    let detected = find_diseases(data, &profile.symptoms, options.matching);
    let symptom_analysis = severity::analyze(data, &profile.symptoms, options.primary_severity);

    let candidates = candidate_medications(&detected);
    let top_disease = detected.first().map(|m| m.disease.name.as_str());
    let allergies: Vec<String> = profile.declared_allergies().collect();

    let pick = choose_primary(&candidates, &allergies, top_disease);
    let primary = pick.recommendation;

    let substitutions = substitutions_for(&primary, profile);
    let purchase_options = purchase_options(&primary.name, profile.preferences.delivery_speed);

    let mut safety_info = advice::safety_info(&primary);
    if let Some(allergy) = &pick.allergy_conflict {
        warn!("Every candidate medicine conflicts with a declared allergy ({})", allergy);
        safety_info.warnings.push(format!(
            "{} may conflict with your declared allergy to {} - consult a doctor before use",
            primary.name, allergy
        ));
    }

    info!(
        detected = detected.len(),
        candidates = candidates.len(),
        primary = %primary.name,
        "Recommendation generated"
    );

    RecommendationResponse {
        patient_profile: profile.clone(),
        substitutions,
        purchase_options,
        safety_info,
        dietary_advice: advice::dietary_advice(&detected),
        lifestyle_recommendations: advice::lifestyle_recommendations(&detected),
        red_flags: advice::red_flags(&profile.symptoms, symptom_analysis.total_severity),
        primary_recommendation: primary,
        detected_diseases: detected,
        symptom_analysis,
    }
}

/// Medications of all detected diseases, first occurrence kept
pub fn candidate_medications(detected: &[DiseaseMatch]) -> Vec<String> {
    let mut medications: Vec<String> = Vec::new();
    for medication in detected.iter().flat_map(|m| m.disease.medications.iter()) {
        if !medications.contains(medication) {
            medications.push(medication.clone());
        }
    }
    medications
}

/// Used when no candidate medication is in the catalog
pub fn default_recommendation(disease: Option<&str>) -> Recommendation {
    Recommendation {
        name: "Paracetamol".to_string(),
        composition: "Paracetamol 500mg".to_string(),
        confidence_score: 75.0,
        relief_time: "30-45 minutes".to_string(),
        effectiveness: 80,
        rationale: "General pain relief and fever reduction".to_string(),
        disease: disease.map(str::to_string),
    }
}

/// Confidence grows with effectiveness and is capped at 95
pub fn confidence_for(effectiveness: u32) -> f64 {
    (70.0 + effectiveness as f64 * 0.25).min(MAX_CONFIDENCE)
}

/// Choose the primary medicine among the candidates.
///
/// `allergies` must already be lowercased and non-empty.
pub fn choose_primary(
    candidates: &[String],
    allergies: &[String],
    disease: Option<&str>,
) -> PrimaryPick {
    let available: Vec<&'static CatalogEntry> = candidates
        .iter()
        .filter_map(|medication| catalog::lookup_mention(medication))
        .collect();

    let Some(first) = available.first().copied() else {
        return PrimaryPick {
            recommendation: default_recommendation(disease),
            allergy_conflict: None,
        };
    };

    let conflict = |entry: &CatalogEntry| -> Option<String> {
        let name = entry.name.to_lowercase();
        allergies.iter().find(|a| name.contains(a.as_str())).cloned()
    };

    let safe = available
        .iter()
        .copied()
        .find(|entry| conflict(entry).is_none());
    let (best, allergy_conflict) = match safe {
        Some(safe) => (safe, None),
        None => (first, conflict(first)),
    };

    PrimaryPick {
        recommendation: Recommendation {
            name: best.name.to_string(),
            composition: best.composition.to_string(),
            confidence_score: confidence_for(best.effectiveness),
            relief_time: best.relief_time.to_string(),
            effectiveness: best.effectiveness,
            rationale: format!(
                "Recommended for {} based on medical data analysis",
                disease.unwrap_or("your symptoms")
            ),
            disease: disease.map(str::to_string),
        },
        allergy_conflict,
    }
}

/// Substitution tiers from the primary medicine's brand list.
///
/// Brands that are catalog medicines carry their own composition and
/// price; other brands carry the primary's. The primary itself and the
/// patient's unavailable medicine are never offered.
pub fn substitutions_for(primary: &Recommendation, profile: &PatientProfile) -> Vec<Substitution> {
    let Some(entry) = catalog::get(&primary.name) else {
        return Vec::new();
    };
    let unavailable = profile.unavailable_medicine.trim().to_lowercase();

    let mut sources: Vec<(&str, Option<&'static CatalogEntry>)> = entry
        .aliases
        .iter()
        .filter(|alias| !alias.eq_ignore_ascii_case(entry.name))
        .filter(|alias| !same_medicine(alias, &unavailable))
        .map(|alias| (*alias, catalog::get(alias)))
        .collect();

    if profile.preferences.generic_preferred {
        sources.sort_by_key(|(_, generic)| generic.is_none());
    }

    sources
        .into_iter()
        .take(MAX_SUBSTITUTIONS)
        .enumerate()
        .map(|(index, (alias, generic))| {
            let tier = index as u32 + 1;
            let source = generic.unwrap_or(entry);
            let price = if profile.preferences.price_sensitive {
                round_cents(source.price * PRICE_SENSITIVE_DISCOUNT)
            } else {
                source.price
            };
            Substitution {
                tier,
                name: generic.map(|g| g.name).unwrap_or(alias).to_string(),
                composition: source.composition.to_string(),
                price,
                kind: SubstitutionKind::for_tier(tier),
                bioequivalent: tier == 1,
            }
        })
        .collect()
}

/// "Dolo" and "Dolo 650" name the same product
fn same_medicine(alias: &str, unavailable: &str) -> bool {
    if unavailable.is_empty() {
        return false;
    }
    let alias = alias.to_lowercase();
    unavailable.contains(&alias) || alias.contains(unavailable)
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
