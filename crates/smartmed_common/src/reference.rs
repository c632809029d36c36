//! Reference data loader.
//!
//! Parses the bundled CSV tables (symptom severities, disease symptoms,
//! medications, precautions, diets, workouts) into in-memory tables once
//! at startup. Tables are positional: the column layout of each file is
//! fixed by the dataset, header names are ignored.

use crate::error::{Error, Result};
use csv::{ReaderBuilder, StringRecord};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const SEVERITY_FILE: &str = "Symptom-severity.csv";
pub const SYMPTOMS_FILE: &str = "symtoms_df.csv";
pub const MEDICATIONS_FILE: &str = "medications.csv";
pub const PRECAUTIONS_FILE: &str = "precautions_df.csv";
pub const DIETS_FILE: &str = "diets.csv";
pub const WORKOUT_FILE: &str = "workout_df.csv";

/// Weight for symptoms missing from the severity table
pub const DEFAULT_WEIGHT: u32 = 1;

/// Default number of autocomplete suggestions
pub const SUGGESTION_LIMIT: usize = 10;

/// A symptom and its severity weight
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symptom {
    pub name: String,
    pub weight: u32,
}

/// A disease with everything the tables know about it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Disease {
    pub name: String,
    /// Unique symptoms, first-seen order
    pub symptoms: Vec<String>,
    pub medications: Vec<String>,
    pub precautions: Vec<String>,
    pub diet: Vec<String>,
    pub workout: Vec<String>,
    /// Sum of symptom weights
    pub severity: u32,
}

/// Canonical form used for every name comparison.
///
/// Dataset names use underscores (`skin_rash`) and stray spaces
/// (`dischromic _patches`); patients type "Skin Rash".
pub fn normalize(name: &str) -> String {
    name.to_lowercase()
        .replace('_', " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parse a list literal cell such as `['Antacids', 'H2 Blockers']`
pub fn parse_list_literal(cell: &str) -> Vec<String> {
    cell.chars()
        .filter(|c| !matches!(c, '[' | ']' | '\''))
        .collect::<String>()
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// In-memory reference tables
#[derive(Debug, Clone, Default)]
pub struct ReferenceData {
    diseases: Vec<Disease>,
    symptoms: Vec<Symptom>,
    weights: HashMap<String, u32>,
    medications: HashMap<String, Vec<String>>,
    precautions: HashMap<String, Vec<String>>,
    diets: HashMap<String, Vec<String>>,
    workouts: HashMap<String, Vec<String>>,
}

impl ReferenceData {
    /// Load all six tables from `dir` and build the disease list
    pub fn load(dir: &Path) -> Result<Self> {
        if !dir.is_dir() {
            return Err(Error::DataDirMissing(dir.to_path_buf()));
        }

        let mut data = Self::default();
        data.load_severities(&read_rows(dir, SEVERITY_FILE)?);
        data.medications = keyed_lists(&read_rows(dir, MEDICATIONS_FILE)?);
        data.precautions = keyed_columns(&read_rows(dir, PRECAUTIONS_FILE)?);
        data.diets = keyed_lists(&read_rows(dir, DIETS_FILE)?);
        data.workouts = accumulated_workouts(&read_rows(dir, WORKOUT_FILE)?);
        data.build_diseases(&read_rows(dir, SYMPTOMS_FILE)?);

        info!(
            diseases = data.diseases.len(),
            symptoms = data.symptoms.len(),
            dir = %dir.display(),
            "Medical data loaded"
        );
        Ok(data)
    }

    fn load_severities(&mut self, rows: &[StringRecord]) {
        for row in rows {
            let name = cell(row, 0);
            if name.is_empty() {
                continue;
            }
            let weight = cell(row, 1)
                .parse::<u32>()
                .ok()
                .filter(|w| *w > 0)
                .unwrap_or(DEFAULT_WEIGHT);
            self.weights.entry(normalize(name)).or_insert(weight);
            self.symptoms.push(Symptom {
                name: name.to_string(),
                weight,
            });
        }
    }

    fn build_diseases(&mut self, rows: &[StringRecord]) {
        let mut order: Vec<String> = Vec::new();
        let mut by_name: HashMap<String, Vec<String>> = HashMap::new();

        for row in rows.iter().filter(|r| r.len() >= 3) {
            let name = cell(row, 1);
            if name.is_empty() {
                continue;
            }
            let entry = by_name.entry(name.to_string()).or_insert_with(|| {
                order.push(name.to_string());
                Vec::new()
            });
            for symptom in (2..=5).map(|i| cell(row, i)).filter(|s| !s.is_empty()) {
                if !entry.iter().any(|existing| existing == symptom) {
                    entry.push(symptom.to_string());
                }
            }
        }

        let diseases: Vec<Disease> = order
            .into_iter()
            .map(|name| {
                let symptoms = by_name.remove(&name).unwrap_or_default();
                let severity = symptoms.iter().map(|s| self.symptom_weight(s)).sum();
                let key = normalize(&name);
                Disease {
                    medications: self.medications.get(&key).cloned().unwrap_or_default(),
                    precautions: self.precautions.get(&key).cloned().unwrap_or_default(),
                    diet: self.diets.get(&key).cloned().unwrap_or_default(),
                    workout: self.workouts.get(&key).cloned().unwrap_or_default(),
                    name,
                    symptoms,
                    severity,
                }
            })
            .collect();
        self.diseases = diseases;
        debug!("Built {} diseases", self.diseases.len());
    }

    /// All symptom names from the severity table
    pub fn available_symptoms(&self) -> Vec<String> {
        self.symptoms.iter().map(|s| s.name.clone()).collect()
    }

    pub fn symptoms(&self) -> &[Symptom] {
        &self.symptoms
    }

    pub fn diseases(&self) -> &[Disease] {
        &self.diseases
    }

    /// Find a disease by name, ignoring case and spacing
    pub fn disease(&self, name: &str) -> Option<&Disease> {
        let key = normalize(name);
        self.diseases.iter().find(|d| normalize(&d.name) == key)
    }

    /// Severity weight of a symptom, `DEFAULT_WEIGHT` when unknown
    pub fn symptom_weight(&self, name: &str) -> u32 {
        self.weights
            .get(&normalize(name))
            .copied()
            .unwrap_or(DEFAULT_WEIGHT)
    }

    pub fn medications_for(&self, disease: &str) -> &[String] {
        lookup(&self.medications, disease)
    }

    pub fn precautions_for(&self, disease: &str) -> &[String] {
        lookup(&self.precautions, disease)
    }

    pub fn diet_for(&self, disease: &str) -> &[String] {
        lookup(&self.diets, disease)
    }

    pub fn workout_for(&self, disease: &str) -> &[String] {
        lookup(&self.workouts, disease)
    }

    /// Known symptoms containing `fragment`, at most `limit`
    pub fn suggest_symptoms(&self, fragment: &str, limit: usize) -> Vec<String> {
        let needle = normalize(fragment);
        if needle.is_empty() {
            return Vec::new();
        }
        self.symptoms
            .iter()
            .filter(|s| normalize(&s.name).contains(&needle))
            .map(|s| s.name.clone())
            .take(limit)
            .collect()
    }
}

fn lookup<'a>(table: &'a HashMap<String, Vec<String>>, disease: &str) -> &'a [String] {
    table
        .get(&normalize(disease))
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

fn cell(row: &StringRecord, index: usize) -> &str {
    row.get(index).map(str::trim).unwrap_or("")
}

fn read_rows(dir: &Path, file: &str) -> Result<Vec<StringRecord>> {
    let path: PathBuf = dir.join(file);
    let table_err = |source: csv::Error| Error::Table {
        file: path.clone(),
        source,
    };

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(&path)
        .map_err(table_err)?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(table_err)?;
        if record.iter().all(|c| c.trim().is_empty()) {
            continue;
        }
        rows.push(record);
    }
    debug!("Read {} rows from {}", rows.len(), file);
    Ok(rows)
}

/// `disease, ['a', 'b']` tables (medications, diets); later rows win
fn keyed_lists(rows: &[StringRecord]) -> HashMap<String, Vec<String>> {
    rows.iter()
        .filter(|r| r.len() >= 2 && !cell(r, 0).is_empty())
        .map(|r| (normalize(cell(r, 0)), parse_list_literal(cell(r, 1))))
        .collect()
}

/// `index, disease, p1..p4` tables (precautions); later rows win
fn keyed_columns(rows: &[StringRecord]) -> HashMap<String, Vec<String>> {
    rows.iter()
        .filter(|r| r.len() >= 5 && !cell(r, 1).is_empty())
        .map(|r| {
            let items = (2..=5)
                .map(|i| cell(r, i))
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect();
            (normalize(cell(r, 1)), items)
        })
        .collect()
}

/// `index, index, disease, workout` rows, one item per row
fn accumulated_workouts(rows: &[StringRecord]) -> HashMap<String, Vec<String>> {
    let mut table: HashMap<String, Vec<String>> = HashMap::new();
    for row in rows.iter().filter(|r| r.len() >= 4) {
        let disease = cell(row, 2);
        let workout = cell(row, 3);
        if disease.is_empty() || workout.is_empty() {
            continue;
        }
        table
            .entry(normalize(disease))
            .or_default()
            .push(workout.to_string());
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize(" skin_rash"), "skin rash");
        assert_eq!(normalize("Skin Rash"), "skin rash");
        assert_eq!(normalize("dischromic _patches"), "dischromic patches");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn test_parse_list_literal() {
        assert_eq!(
            parse_list_literal("['Antacids', 'H2 Blockers', 'Proton Pump Inhibitors (PPIs)']"),
            vec!["Antacids", "H2 Blockers", "Proton Pump Inhibitors (PPIs)"]
        );
        assert!(parse_list_literal("[]").is_empty());
        assert_eq!(parse_list_literal("Insulin"), vec!["Insulin"]);
    }

    #[test]
    fn test_missing_dir() {
        let err = ReferenceData::load(Path::new("/definitely/not/here")).unwrap_err();
        assert!(matches!(err, Error::DataDirMissing(_)));
    }

    #[test]
    fn test_empty_data_lookups() {
        let data = ReferenceData::default();
        assert_eq!(data.symptom_weight("anything"), DEFAULT_WEIGHT);
        assert!(data.medications_for("Flu").is_empty());
        assert!(data.disease("Flu").is_none());
        assert!(data.suggest_symptoms("itch", 10).is_empty());
    }
}
