//! Patient intake: the profile a consultation starts from.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

pub const MIN_AGE: u32 = 1;
pub const MAX_AGE: u32 = 120;
pub const MIN_WEIGHT_KG: f64 = 20.0;
pub const MAX_WEIGHT_KG: f64 = 200.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Male,
    Female,
    Other,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        }
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            "other" => Ok(Gender::Other),
            other => Err(format!("unknown gender '{}' (male, female, other)", other)),
        }
    }
}

/// Self-assessed severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SymptomSeverity {
    Mild,
    #[default]
    Moderate,
    Severe,
}

impl SymptomSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            SymptomSeverity::Mild => "mild",
            SymptomSeverity::Moderate => "moderate",
            SymptomSeverity::Severe => "severe",
        }
    }
}

impl FromStr for SymptomSeverity {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mild" => Ok(SymptomSeverity::Mild),
            "moderate" => Ok(SymptomSeverity::Moderate),
            "severe" => Ok(SymptomSeverity::Severe),
            other => Err(format!("unknown severity '{}' (mild, moderate, severe)", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DeliverySpeed {
    #[default]
    Standard,
    Express,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    #[serde(default = "default_generic_preferred")]
    pub generic_preferred: bool,
    #[serde(default)]
    pub price_sensitive: bool,
    #[serde(default)]
    pub delivery_speed: DeliverySpeed,
}

fn default_generic_preferred() -> bool {
    true
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            generic_preferred: default_generic_preferred(),
            price_sensitive: false,
            delivery_speed: DeliverySpeed::Standard,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientProfile {
    #[serde(default = "default_age")]
    pub age: u32,
    #[serde(default)]
    pub gender: Gender,
    /// Body weight in kg
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(default)]
    pub symptoms: Vec<String>,
    #[serde(default = "default_duration")]
    pub symptom_duration: String,
    #[serde(default)]
    pub symptom_severity: SymptomSeverity,
    #[serde(default)]
    pub current_medications: Vec<String>,
    #[serde(default)]
    pub allergies: Vec<String>,
    #[serde(default)]
    pub medical_history: Vec<String>,
    #[serde(default)]
    pub unavailable_medicine: String,
    #[serde(default)]
    pub preferences: Preferences,
}

fn default_age() -> u32 {
    25
}

fn default_duration() -> String {
    "1-2 days".to_string()
}

impl Default for PatientProfile {
    fn default() -> Self {
        Self {
            age: default_age(),
            gender: Gender::default(),
            weight: Some(70.0),
            symptoms: Vec::new(),
            symptom_duration: default_duration(),
            symptom_severity: SymptomSeverity::default(),
            current_medications: Vec::new(),
            allergies: Vec::new(),
            medical_history: Vec::new(),
            unavailable_medicine: String::new(),
            preferences: Preferences::default(),
        }
    }
}

impl PatientProfile {
    /// Read a profile from a JSON file, trim its lists and validate it
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let profile = serde_json::from_str::<Self>(&content)?.normalized();
        profile.validate()?;
        Ok(profile)
    }

    /// Trim list entries and drop blank ones, the same cleanup `parse_list` gives flags
    pub fn normalized(mut self) -> Self {
        for list in [
            &mut self.symptoms,
            &mut self.current_medications,
            &mut self.allergies,
            &mut self.medical_history,
        ] {
            let cleaned = list
                .iter()
                .map(|item| item.trim())
                .filter(|item| !item.is_empty())
                .map(str::to_string)
                .collect();
            *list = cleaned;
        }
        self.unavailable_medicine = self.unavailable_medicine.trim().to_string();
        self
    }

    /// Check the fields the consultation cannot do without
    pub fn validate(&self) -> Result<()> {
        if !self.symptoms.iter().any(|s| !s.trim().is_empty())
            || self.unavailable_medicine.trim().is_empty()
        {
            return Err(Error::InvalidProfile(
                "Please fill in symptoms and unavailable medicine".to_string(),
            ));
        }
        if !(MIN_AGE..=MAX_AGE).contains(&self.age) {
            return Err(Error::InvalidProfile(format!(
                "age {} is outside {}-{}",
                self.age, MIN_AGE, MAX_AGE
            )));
        }
        if let Some(weight) = self.weight {
            if !(MIN_WEIGHT_KG..=MAX_WEIGHT_KG).contains(&weight) {
                return Err(Error::InvalidProfile(format!(
                    "weight {} kg is outside {}-{} kg",
                    weight, MIN_WEIGHT_KG, MAX_WEIGHT_KG
                )));
            }
        }
        Ok(())
    }

    /// Allergies worth comparing against (blank entries would match everything)
    pub fn declared_allergies(&self) -> impl Iterator<Item = String> + '_ {
        self.allergies
            .iter()
            .map(|a| a.trim().to_lowercase())
            .filter(|a| !a.is_empty())
    }
}

/// Split comma-separated free text into trimmed, non-empty items
pub fn parse_list(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
