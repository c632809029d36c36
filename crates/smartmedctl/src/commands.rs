//! Command implementations

use crate::display;
use anyhow::{anyhow, Context, Result};
use smartmed_common::config::config_path;
use smartmed_common::reference::SUGGESTION_LIMIT;
use smartmed_common::{
    fallback_response, find_diseases, generate, parse_list, severity, MatchOptions,
    PatientProfile, RecommendOptions, ReferenceData, SmartMedConfig,
};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Settings every command runs with
pub struct RunContext {
    pub config: SmartMedConfig,
    /// Config file the settings came from, if any
    pub config_file: Option<PathBuf>,
    pub data_dir: PathBuf,
}

/// What a successful command did, for the invocation log
#[derive(Debug, Default, PartialEq)]
pub struct Outcome {
    pub fallback: bool,
}

fn load_data(data_dir: &Path) -> Result<ReferenceData> {
    ReferenceData::load(data_dir)
        .with_context(|| format!("loading reference data from {}", data_dir.display()))
}

pub fn recommend(ctx: &RunContext, profile: PatientProfile, json: bool) -> Result<Outcome> {
    profile.validate()?;

    let (response, fallback) = match ReferenceData::load(&ctx.data_dir) {
        Ok(data) => (generate(&data, &profile, RecommendOptions::from(&ctx.config)), false),
        Err(e) if e.is_data_unavailable() => {
            warn!("Falling back to built-in recommendation: {}", e);
            display::display_warning(&format!(
                "Reference data unavailable ({}); showing general guidance",
                e
            ));
            (fallback_response(&profile), true)
        }
        Err(e) => return Err(e.into()),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        display::print_recommendation(&response);
    }
    Ok(Outcome { fallback })
}

pub fn load_profile(path: &Path) -> Result<PatientProfile> {
    PatientProfile::from_json_file(path)
        .with_context(|| format!("reading profile {}", path.display()))
}

pub fn match_symptoms(ctx: &RunContext, symptoms: &str, json: bool) -> Result<Outcome> {
    let symptoms = parse_list(symptoms);
    if symptoms.is_empty() {
        return Err(smartmed_common::Error::InvalidProfile(
            "Please fill in at least one symptom".to_string(),
        )
        .into());
    }

    let data = load_data(&ctx.data_dir)?;
    let matches = find_diseases(&data, &symptoms, MatchOptions::from(&ctx.config.matching));
    let analysis = severity::analyze(&data, &symptoms, ctx.config.matching.primary_severity);
    info!(matches = matches.len(), "Symptoms matched");

    if json {
        let body = serde_json::json!({
            "detectedDiseases": matches,
            "symptomAnalysis": analysis,
        });
        println!("{}", serde_json::to_string_pretty(&body)?);
    } else {
        display::print_matches(&matches, &analysis);
    }
    Ok(Outcome::default())
}

pub fn symptoms(ctx: &RunContext, filter: Option<&str>, limit: Option<usize>) -> Result<Outcome> {
    let data = load_data(&ctx.data_dir)?;
    let names = match filter {
        Some(fragment) => data.suggest_symptoms(fragment, limit.unwrap_or(SUGGESTION_LIMIT)),
        None => {
            let mut all = data.available_symptoms();
            if let Some(limit) = limit {
                all.truncate(limit);
            }
            all
        }
    };
    for name in names {
        println!("{}", name);
    }
    Ok(Outcome::default())
}

pub fn diseases(ctx: &RunContext) -> Result<Outcome> {
    let data = load_data(&ctx.data_dir)?;
    display::print_diseases(data.diseases());
    Ok(Outcome::default())
}

pub fn disease(ctx: &RunContext, name: &str) -> Result<Outcome> {
    let data = load_data(&ctx.data_dir)?;
    let disease = data
        .disease(name)
        .ok_or_else(|| anyhow!("Unknown disease '{}' (see `smartmedctl diseases`)", name))?;
    display::print_disease(disease);
    Ok(Outcome::default())
}

pub fn config(ctx: &RunContext) -> Result<Outcome> {
    let source = ctx
        .config_file
        .clone()
        .or_else(config_path)
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(no config directory)".to_string());

    println!("[CONFIG]");
    println!("  file:      {}", source);
    println!("  data dir:  {}", ctx.data_dir.display());

    let matching = &ctx.config.matching;
    if matching.threshold_was_clamped() {
        display::display_warning(&format!(
            "matching.threshold {} clamped to {}",
            matching.threshold,
            matching.effective_threshold()
        ));
    }
    if matching.max_results_was_clamped() {
        display::display_warning(&format!(
            "matching.max_results {} clamped to {}",
            matching.max_results,
            matching.effective_max_results()
        ));
    }

    println!();
    print!("{}", toml::to_string_pretty(&ctx.config)?);
    Ok(Outcome::default())
}
