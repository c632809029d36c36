//! Hardcoded response used when the reference tables cannot be loaded.

use crate::advice::{pain_reliever_dosage, BASE_RED_FLAGS};
use crate::profile::PatientProfile;
use crate::response::{
    PurchaseOption, Recommendation, RecommendationResponse, SafetyInfo, Substitution,
    SubstitutionKind,
};
use crate::severity::SymptomAnalysis;

const FALLBACK_PRICE: f64 = 45.0;

/// The single purchase option always points at this search, whatever is recommended
const FALLBACK_LINK: &str = "https://www.1mg.com/search/all?name=calpol%20650";

/// Response that needs no reference data.
///
/// Patients missing "Dolo 650" get the paracetamol equivalents, everyone
/// else an ibuprofen/paracetamol combination.
pub fn fallback_response(profile: &PatientProfile) -> RecommendationResponse {
    let paracetamol = profile
        .unavailable_medicine
        .trim()
        .eq_ignore_ascii_case("Dolo 650");

    let (name, composition, substitute, substitute_composition) = if paracetamol {
        ("Calpol 650", "Paracetamol 650mg", "Crocin Advance", "Paracetamol 500mg")
    } else {
        (
            "Combiflam Plus",
            "Ibuprofen 400mg + Paracetamol 325mg",
            "Ibugesic Plus",
            "Ibuprofen 400mg + Paracetamol 325mg",
        )
    };

    RecommendationResponse {
        patient_profile: profile.clone(),
        primary_recommendation: Recommendation {
            name: name.to_string(),
            composition: composition.to_string(),
            confidence_score: 75.0,
            relief_time: "30-45 minutes".to_string(),
            effectiveness: 80,
            rationale: "General pain relief and fever reduction".to_string(),
            disease: None,
        },
        substitutions: vec![Substitution {
            tier: 1,
            name: substitute.to_string(),
            composition: substitute_composition.to_string(),
            price: FALLBACK_PRICE,
            kind: SubstitutionKind::ExactEquivalent,
            bioequivalent: true,
        }],
        purchase_options: vec![PurchaseOption {
            platform: "1mg".to_string(),
            price: FALLBACK_PRICE,
            delivery: "Same day".to_string(),
            rating: 4.4,
            reviews: 2847,
            offers: "HEALTH15 - 15% off".to_string(),
            link: FALLBACK_LINK.to_string(),
            in_stock: true,
        }],
        safety_info: SafetyInfo {
            dosage: pain_reliever_dosage(),
            warnings: strings(&[
                "Avoid alcohol consumption",
                "Do not exceed recommended dose",
                "Consult doctor if symptoms persist beyond 3 days",
            ]),
            contraindications: strings(&[
                "Severe liver disease",
                "Active peptic ulcer",
                "Known allergy to paracetamol/ibuprofen",
            ]),
        },
        dietary_advice: strings(&[
            "Take with food to reduce stomach irritation",
            "Increase fluid intake",
            "Avoid spicy and oily foods",
        ]),
        lifestyle_recommendations: strings(&[
            "Get adequate rest (7-8 hours sleep)",
            "Apply cold compress for headache",
            "Practice stress management techniques",
        ]),
        red_flags: strings(BASE_RED_FLAGS),
        detected_diseases: Vec::new(),
        symptom_analysis: SymptomAnalysis::default(),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
