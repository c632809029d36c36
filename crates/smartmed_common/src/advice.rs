//! Rule-based safety, dietary and lifestyle advice.
//!
//! Nothing here is inferred: dosage text depends only on whether the
//! recommended medicine is a common pain reliever, advice lists come
//! straight from the detected diseases' diet and workout tables, and red
//! flags are fixed phrases plus a few keyword and severity triggers.

use crate::matcher::DiseaseMatch;
use crate::reference::normalize;
use crate::response::{Dosage, Recommendation, SafetyInfo};

/// Medicines that get the over-the-counter dosage schedule
const PAIN_RELIEVERS: &[&str] = &["Paracetamol", "Ibuprofen", "Aspirin"];

/// Advice lists are cut to this many items
pub const MAX_ADVICE_ITEMS: usize = 5;

/// Total severity above which immediate attention is advised
pub const URGENT_SEVERITY: u32 = 20;

const WARNINGS: &[&str] = &[
    "Avoid alcohol consumption",
    "Do not exceed recommended dose",
    "Consult doctor if symptoms persist beyond 3 days",
    "Take with food if stomach upset occurs",
];

const CONTRAINDICATIONS: &[&str] = &[
    "Severe liver disease",
    "Active peptic ulcer",
    "Known allergy to medication components",
    "Pregnancy (consult doctor)",
];

pub const BASE_RED_FLAGS: &[&str] = &[
    "Severe abdominal pain",
    "Difficulty breathing",
    "High fever (>102°F) persisting",
    "Severe allergic reactions",
];

/// Dosage schedule for common pain relievers
pub fn pain_reliever_dosage() -> Dosage {
    Dosage {
        standard: "1 tablet every 6-8 hours".to_string(),
        maximum: "4 tablets in 24 hours".to_string(),
        duration: "Maximum 5 days".to_string(),
    }
}

pub fn is_pain_reliever(medicine: &str) -> bool {
    let lowered = medicine.to_lowercase();
    PAIN_RELIEVERS
        .iter()
        .any(|name| lowered.contains(&name.to_lowercase()))
}

/// Dosage, warnings and contraindications for the recommended medicine
pub fn safety_info(medication: &Recommendation) -> SafetyInfo {
    let dosage = if is_pain_reliever(&medication.name) {
        pain_reliever_dosage()
    } else {
        Dosage {
            standard: "As prescribed by doctor".to_string(),
            maximum: "Follow doctor's instructions".to_string(),
            duration: "As prescribed".to_string(),
        }
    };

    SafetyInfo {
        dosage,
        warnings: to_strings(WARNINGS),
        contraindications: to_strings(CONTRAINDICATIONS),
    }
}

/// Unique diet items across the detected diseases
pub fn dietary_advice(diseases: &[DiseaseMatch]) -> Vec<String> {
    top_unique(diseases.iter().flat_map(|m| m.disease.diet.iter()))
}

/// Unique workout items across the detected diseases
pub fn lifestyle_recommendations(diseases: &[DiseaseMatch]) -> Vec<String> {
    top_unique(diseases.iter().flat_map(|m| m.disease.workout.iter()))
}

/// Warning signs to watch for
pub fn red_flags(symptoms: &[String], total_severity: u32) -> Vec<String> {
    let mut flags = to_strings(BASE_RED_FLAGS);

    if total_severity > URGENT_SEVERITY {
        flags.push("Seek immediate medical attention".to_string());
    }

    let reported: Vec<String> = symptoms.iter().map(|s| normalize(s)).collect();
    if reported.iter().any(|s| s.contains("chest pain")) {
        flags.push("Chest pain - call emergency services immediately".to_string());
    }
    if reported.iter().any(|s| s.contains("bleeding")) {
        flags.push("Unusual bleeding - consult doctor immediately".to_string());
    }

    flags
}

/// First `MAX_ADVICE_ITEMS` distinct items, first letter capitalized
fn top_unique<'a>(items: impl Iterator<Item = &'a String>) -> Vec<String> {
    let mut seen: Vec<&String> = Vec::new();
    for item in items {
        if !seen.contains(&item) {
            seen.push(item);
        }
    }
    seen.into_iter()
        .take(MAX_ADVICE_ITEMS)
        .map(|s| capitalize(s))
        .collect()
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
