//! Golden tests for the recommendation composer.
//!
//! Tests verify:
//! - The primary pick follows the detected diseases' medications
//! - Allergies steer the pick, and conflicts are called out
//! - Substitutions, purchase options and advice are derived from the pick
//! - Output is deterministic and serializes with camelCase keys

use smartmed_common::profile::{DeliverySpeed, PatientProfile, Preferences};
use smartmed_common::recommend::{generate, RecommendOptions};
use smartmed_common::reference::ReferenceData;
use smartmed_common::response::SubstitutionKind;
use std::path::PathBuf;

fn load_bundled() -> ReferenceData {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data");
    ReferenceData::load(&dir).expect("bundled tables load")
}

fn make_profile(symptoms: &[&str], unavailable: &str) -> PatientProfile {
    PatientProfile {
        symptoms: symptoms.iter().map(|s| s.to_string()).collect(),
        unavailable_medicine: unavailable.to_string(),
        ..Default::default()
    }
}

const DIABETES: &[&str] = &["fatigue", "weight loss", "restlessness", "lethargy", "polyuria"];
const MIGRAINE_WITH_CHEST_PAIN: &[&str] =
    &["headache", "acidity", "indigestion", "stiff neck", "chest pain"];
const ALLERGY: &[&str] = &["continuous sneezing", "shivering", "chills", "watering from eyes"];

#[test]
fn test_diabetes_recommends_metformin() {
    let data = load_bundled();
    let response = generate(&data, &make_profile(DIABETES, "Glycomet"), RecommendOptions::default());

    assert_eq!(response.detected_diseases.len(), 1);
    assert_eq!(response.detected_diseases[0].disease.name, "Diabetes");
    assert_eq!(response.detected_diseases[0].match_score, 0.5);

    let primary = &response.primary_recommendation;
    assert_eq!(primary.name, "Metformin");
    assert_eq!(primary.composition, "Metformin 500mg/1000mg");
    assert_eq!(primary.confidence_score, 93.0);
    assert_eq!(primary.effectiveness, 92);
    assert_eq!(primary.relief_time, "2-3 hours");
    assert_eq!(primary.disease.as_deref(), Some("Diabetes"));
    assert_eq!(
        primary.rationale,
        "Recommended for Diabetes based on medical data analysis"
    );

    assert_eq!(response.safety_info.dosage.standard, "As prescribed by doctor");
    assert_eq!(response.symptom_analysis.total_severity, 18);
    assert_eq!(response.symptom_analysis.primary_symptoms, vec!["restlessness"]);
    assert_eq!(response.red_flags.len(), 4);
    assert_eq!(
        response.dietary_advice,
        vec!["Low-Glycemic Diet", "Fiber-rich foods", "Lean proteins", "Healthy fats", "Leafy greens"]
    );
    assert_eq!(response.lifestyle_recommendations.len(), 3);
}

#[test]
fn test_brand_substitutions_carry_primary_composition() {
    let data = load_bundled();
    let response = generate(&data, &make_profile(DIABETES, "Glycomet"), RecommendOptions::default());

    let names: Vec<&str> = response.substitutions.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Glucophage", "Fortamet", "Riomet"]);
    let tiers: Vec<u32> = response.substitutions.iter().map(|s| s.tier).collect();
    assert_eq!(tiers, vec![1, 2, 3]);
    assert_eq!(response.substitutions[0].kind, SubstitutionKind::ExactEquivalent);
    assert!(response
        .substitutions
        .iter()
        .all(|s| s.composition == "Metformin 500mg/1000mg" && s.price == 55.0));
}

#[test]
fn test_purchase_options_follow_primary() {
    let data = load_bundled();
    let response = generate(&data, &make_profile(DIABETES, "Glycomet"), RecommendOptions::default());

    assert_eq!(response.purchase_options.len(), 3);
    assert_eq!(response.purchase_options[0].platform, "1mg");
    assert_eq!(response.purchase_options[0].price, 55.0);
    assert_eq!(
        response.purchase_options[0].link,
        "https://www.1mg.com/search/all?name=Metformin"
    );
    assert_eq!(response.purchase_options[2].platform, "PharmEasy");
}

#[test]
fn test_three_diseases_pick_first_catalog_medicine() {
    let data = load_bundled();
    let response = generate(
        &data,
        &make_profile(MIGRAINE_WITH_CHEST_PAIN, "Brufen"),
        RecommendOptions::default(),
    );

    let names: Vec<&str> = response
        .detected_diseases
        .iter()
        .map(|m| m.disease.name.as_str())
        .collect();
    assert_eq!(names, vec!["Migraine", "Hypertension", "GERD"]);

    // Migraine lists Analgesics before Ibuprofen; only the latter is in the catalog
    assert_eq!(response.primary_recommendation.name, "Ibuprofen");
    assert_eq!(response.primary_recommendation.confidence_score, 92.0);
    assert_eq!(response.safety_info.dosage.standard, "1 tablet every 6-8 hours");

    // Brufen is what the patient could not get
    let subs: Vec<&str> = response.substitutions.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(subs, vec!["Advil", "Motrin", "Nurofen"]);
}

#[test]
fn test_blank_symptoms_do_not_add_severity() {
    let data = load_bundled();
    let mut symptoms = MIGRAINE_WITH_CHEST_PAIN.to_vec();
    symptoms.extend(["", "   "]);
    let padded = generate(&data, &make_profile(&symptoms, "Brufen"), RecommendOptions::default());
    let clean = generate(
        &data,
        &make_profile(MIGRAINE_WITH_CHEST_PAIN, "Brufen"),
        RecommendOptions::default(),
    );

    assert_eq!(padded.symptom_analysis.total_severity, 22);
    assert_eq!(padded.symptom_analysis, clean.symptom_analysis);
    assert_eq!(padded.red_flags, clean.red_flags);
}

#[test]
fn test_severe_chest_pain_raises_red_flags() {
    let data = load_bundled();
    let response = generate(
        &data,
        &make_profile(MIGRAINE_WITH_CHEST_PAIN, "Brufen"),
        RecommendOptions::default(),
    );

    assert_eq!(response.symptom_analysis.total_severity, 22);
    assert_eq!(
        response.symptom_analysis.primary_symptoms,
        vec!["indigestion", "chest pain"]
    );
    assert!(response
        .red_flags
        .contains(&"Seek immediate medical attention".to_string()));
    assert!(response
        .red_flags
        .contains(&"Chest pain - call emergency services immediately".to_string()));
    assert_eq!(response.red_flags.len(), 6);
}

#[test]
fn test_lifestyle_merges_diseases() {
    let data = load_bundled();
    let response = generate(
        &data,
        &make_profile(MIGRAINE_WITH_CHEST_PAIN, "Brufen"),
        RecommendOptions::default(),
    );
    assert_eq!(
        response.lifestyle_recommendations,
        vec![
            "Avoid trigger foods",
            "Stay hydrated",
            "Get adequate sleep",
            "Reduce sodium intake",
            "Engage in regular exercise"
        ]
    );
}

#[test]
fn test_allergy_moves_to_next_candidate() {
    let data = load_bundled();
    let mut profile = make_profile(MIGRAINE_WITH_CHEST_PAIN, "Brufen");
    profile.allergies = vec!["IBUPROFEN".to_string()];

    let response = generate(&data, &profile, RecommendOptions::default());
    assert_eq!(response.primary_recommendation.name, "Paracetamol");
    assert_eq!(response.primary_recommendation.confidence_score, 91.25);
    assert_eq!(response.safety_info.warnings.len(), 4);
}

#[test]
fn test_allergy_conflict_is_flagged() {
    let data = load_bundled();
    let mut profile = make_profile(ALLERGY, "Zyrtec");
    profile.allergies = vec!["cetirizine".to_string(), "".to_string()];

    let response = generate(&data, &profile, RecommendOptions::default());
    assert_eq!(response.detected_diseases[0].disease.name, "Allergy");
    assert_eq!(response.primary_recommendation.name, "Cetirizine");
    assert_eq!(response.safety_info.warnings.len(), 5);
    assert!(response.safety_info.warnings[4].contains("cetirizine"));
}

#[test]
fn test_unknown_symptoms_fall_back_to_paracetamol() {
    let data = load_bundled();
    let response = generate(
        &data,
        &make_profile(&["tingling earlobes"], "Crocin"),
        RecommendOptions::default(),
    );

    assert!(response.detected_diseases.is_empty());
    let primary = &response.primary_recommendation;
    assert_eq!(primary.name, "Paracetamol");
    assert_eq!(primary.composition, "Paracetamol 500mg");
    assert_eq!(primary.confidence_score, 75.0);
    assert_eq!(primary.rationale, "General pain relief and fever reduction");
    assert!(primary.disease.is_none());

    let subs: Vec<&str> = response.substitutions.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(subs, vec!["Acetaminophen", "Calpol", "Dolo"]);

    let prices: Vec<f64> = response.purchase_options.iter().map(|o| o.price).collect();
    assert_eq!(prices, vec![25.0, 24.0, 26.0]);
    assert!(response.dietary_advice.is_empty());
    assert!(response.lifestyle_recommendations.is_empty());
    assert_eq!(response.symptom_analysis.total_severity, 1);
}

#[test]
fn test_preferences_shape_output() {
    let data = load_bundled();
    let mut profile = make_profile(DIABETES, "Glycomet");
    profile.preferences = Preferences {
        generic_preferred: false,
        price_sensitive: true,
        delivery_speed: DeliverySpeed::Express,
    };

    let response = generate(&data, &profile, RecommendOptions::default());
    assert!(response.substitutions.iter().all(|s| s.price == 49.5));
    let platforms: Vec<&str> = response
        .purchase_options
        .iter()
        .map(|o| o.platform.as_str())
        .collect();
    assert_eq!(platforms, vec!["1mg", "PharmEasy", "NetMeds"]);
}

#[test]
fn test_generation_is_deterministic() {
    let data = load_bundled();
    let profile = make_profile(MIGRAINE_WITH_CHEST_PAIN, "Brufen");
    let first = generate(&data, &profile, RecommendOptions::default());
    let second = generate(&data, &profile, RecommendOptions::default());
    assert_eq!(first, second);
}

#[test]
fn test_response_json_keys() {
    let data = load_bundled();
    let response = generate(&data, &make_profile(ALLERGY, "Zyrtec"), RecommendOptions::default());
    let json = serde_json::to_value(&response).unwrap();

    assert_eq!(json["primaryRecommendation"]["name"], "Cetirizine");
    assert_eq!(json["detectedDiseases"][0]["name"], "Allergy");
    assert_eq!(json["detectedDiseases"][0]["matchScore"], 1.0);
    assert!(json["symptomAnalysis"]["totalSeverity"].is_number());
    assert_eq!(json["patientProfile"]["unavailableMedicine"], "Zyrtec");
    assert_eq!(json["purchaseOptions"][0]["inStock"], true);
}
