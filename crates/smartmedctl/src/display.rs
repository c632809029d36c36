//! Output formatting - clean, ASCII-only terminal output
//!
//! Sections are introduced by `[SECTION]` headers. Color is decided once
//! at startup (config, NO_COLOR, whether stdout is a terminal).

use owo_colors::{OwoColorize, Style};
use smartmed_common::matcher::DiseaseMatch;
use smartmed_common::profile::PatientProfile;
use smartmed_common::reference::Disease;
use smartmed_common::response::RecommendationResponse;
use smartmed_common::SymptomAnalysis;
use std::sync::atomic::{AtomicBool, Ordering};

pub const THIN_SEPARATOR: &str = "------------------------------------------------------------";

const DISCLAIMER: &str =
    "General information only. Consult a doctor or pharmacist before taking any medicine.";

/// Key width for key/value lines
const KW: usize = 15;

static COLOR: AtomicBool = AtomicBool::new(true);

pub fn set_color(enabled: bool) {
    COLOR.store(enabled, Ordering::Relaxed);
}

fn paint(text: &str, style: Style) -> String {
    if COLOR.load(Ordering::Relaxed) {
        text.style(style).to_string()
    } else {
        text.to_string()
    }
}

fn header(title: &str) {
    println!();
    println!("{}", paint(&format!("[{}]", title), Style::new().bold().cyan()));
}

fn print_kv(key: &str, value: &str) {
    println!("  {:width$} {}", format!("{}:", key), value, width = KW);
}

fn print_items(items: &[String]) {
    if items.is_empty() {
        println!("  {}", paint("(none)", Style::new().dimmed()));
    }
    for item in items {
        println!("  * {}", item);
    }
}

/// Render a full recommendation
pub fn print_recommendation(response: &RecommendationResponse) {
    let primary = &response.primary_recommendation;

    header("RECOMMENDATION");
    println!(
        "  {} ({})",
        paint(&primary.name, Style::new().bold().bright_green()),
        primary.composition
    );
    print_kv("Confidence", &format!("{:.0}%", primary.confidence_score));
    print_kv("Effectiveness", &format!("{}%", primary.effectiveness));
    print_kv("Relief time", &primary.relief_time);
    print_kv("Patient", &patient_summary(&response.patient_profile));
    println!("  {}", primary.rationale);

    if !response.detected_diseases.is_empty() {
        header("DETECTED CONDITIONS");
        print_match_lines(&response.detected_diseases);
    }

    print_analysis(&response.symptom_analysis);

    header("SUBSTITUTES");
    if response.substitutions.is_empty() {
        println!("  {}", paint("(none)", Style::new().dimmed()));
    }
    for sub in &response.substitutions {
        let bioequivalent = if sub.bioequivalent { ", bioequivalent" } else { "" };
        println!(
            "  {}. {:<14} {:<32} Rs {:>7.2}  ({}{})",
            sub.tier,
            sub.name,
            sub.composition,
            sub.price,
            sub.kind.as_str(),
            bioequivalent
        );
    }

    header("WHERE TO BUY");
    for option in &response.purchase_options {
        println!(
            "  {:<10} Rs {:>4.0}  {:<9} {:.1} ({} reviews)  {}",
            option.platform, option.price, option.delivery, option.rating, option.reviews, option.offers
        );
        println!("  {:10} {}", "", paint(&option.link, Style::new().dimmed()));
    }

    let safety = &response.safety_info;
    header("DOSAGE");
    print_kv("Standard", &safety.dosage.standard);
    print_kv("Maximum", &safety.dosage.maximum);
    print_kv("Duration", &safety.dosage.duration);

    header("WARNINGS");
    print_items(&safety.warnings);

    header("CONTRAINDICATIONS");
    print_items(&safety.contraindications);

    header("DIET");
    print_items(&response.dietary_advice);

    header("LIFESTYLE");
    print_items(&response.lifestyle_recommendations);

    header("RED FLAGS");
    for flag in &response.red_flags {
        println!("  ! {}", paint(flag, Style::new().bright_red()));
    }

    println!();
    println!("{}", paint(THIN_SEPARATOR, Style::new().dimmed()));
    println!("{}", paint(DISCLAIMER, Style::new().dimmed()));
    println!();
}

fn print_match_lines(matches: &[DiseaseMatch]) {
    for m in matches {
        println!(
            "  {:<30} {:>3.0}% match  ({})",
            m.disease.name,
            m.match_score * 100.0,
            m.matching_symptoms.join(", ")
        );
    }
}

fn print_analysis(analysis: &SymptomAnalysis) {
    header("SYMPTOM ANALYSIS");
    print_kv("Total severity", &analysis.total_severity.to_string());
    print_kv("Primary", &list_or_none(&analysis.primary_symptoms));
    print_kv("Secondary", &list_or_none(&analysis.secondary_symptoms));
}

/// "25, male, 70 kg, moderate, 1-2 days"
fn patient_summary(profile: &PatientProfile) -> String {
    let mut parts = vec![profile.age.to_string(), profile.gender.as_str().to_string()];
    if let Some(weight) = profile.weight {
        parts.push(format!("{} kg", weight));
    }
    parts.push(profile.symptom_severity.as_str().to_string());
    parts.push(profile.symptom_duration.clone());
    parts.join(", ")
}

fn list_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "-".to_string()
    } else {
        items.join(", ")
    }
}

/// Render the matcher's result on its own
pub fn print_matches(matches: &[DiseaseMatch], analysis: &SymptomAnalysis) {
    header("MATCHES");
    if matches.is_empty() {
        println!("  No disease matches these symptoms.");
    } else {
        print_match_lines(matches);
    }
    print_analysis(analysis);
    println!();
}

pub fn print_diseases(diseases: &[Disease]) {
    header("DISEASES");
    for disease in diseases {
        println!(
            "  {:<30} severity {:>3}  ({} symptoms)",
            disease.name,
            disease.severity,
            disease.symptoms.len()
        );
    }
    println!();
}

pub fn print_disease(disease: &Disease) {
    println!();
    println!("{}", paint(&disease.name, Style::new().bold()));
    print_kv("Severity", &disease.severity.to_string());

    header("SYMPTOMS");
    print_items(&disease.symptoms);
    header("MEDICATIONS");
    print_items(&disease.medications);
    header("PRECAUTIONS");
    print_items(&disease.precautions);
    header("DIET");
    print_items(&disease.diet);
    header("WORKOUT");
    print_items(&disease.workout);
    println!();
}

/// Display an error
pub fn display_error(message: &str) {
    eprintln!("[ERROR] {}", paint(message, Style::new().red()));
}

/// Display a warning (stderr, so JSON output stays clean)
pub fn display_warning(message: &str) {
    eprintln!("[WARNING] {}", paint(message, Style::new().yellow()));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paint_respects_color_switch() {
        set_color(false);
        assert_eq!(paint("Metformin", Style::new().bold()), "Metformin");
        set_color(true);
        assert_ne!(paint("Metformin", Style::new().bold()), "Metformin");
    }

    #[test]
    fn test_patient_summary() {
        let mut profile = PatientProfile::default();
        assert_eq!(patient_summary(&profile), "25, male, 70 kg, moderate, 1-2 days");

        profile.weight = None;
        profile.gender = smartmed_common::profile::Gender::Other;
        profile.symptom_severity = smartmed_common::profile::SymptomSeverity::Mild;
        assert_eq!(patient_summary(&profile), "25, other, mild, 1-2 days");
    }

    #[test]
    fn test_list_or_none() {
        assert_eq!(list_or_none(&[]), "-");
        assert_eq!(
            list_or_none(&["cough".to_string(), "chills".to_string()]),
            "cough, chills"
        );
    }
}
