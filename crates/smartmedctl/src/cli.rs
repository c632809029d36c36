//! CLI - Command-line argument parsing
//!
//! Defines the CLI structure using clap.
//! Keeps argument parsing separate from execution logic.

use clap::{Args, Parser, Subcommand};
use smartmed_common::profile::{
    DeliverySpeed, Gender, PatientProfile, Preferences, SymptomSeverity,
};
use smartmed_common::parse_list;
use std::path::PathBuf;

/// SmartMed CLI
#[derive(Parser)]
#[command(name = "smartmedctl")]
#[command(about = "SmartMed - substitutes for medicines you cannot get", long_about = None)]
#[command(version)]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    /// Directory holding the reference CSV tables (overrides config)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Config file (default: $XDG_CONFIG_HOME/smartmed/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Recommend a substitute for an unavailable medicine
    Recommend {
        #[command(flatten)]
        intake: ProfileArgs,

        /// Read the patient profile from a JSON file instead of flags
        #[arg(long, value_name = "FILE", conflicts_with = "intake")]
        profile: Option<PathBuf>,

        /// Output JSON only
        #[arg(long)]
        json: bool,
    },

    /// Show diseases matching a set of symptoms
    Match {
        /// Comma-separated symptoms
        #[arg(long)]
        symptoms: String,

        /// Output JSON only
        #[arg(long)]
        json: bool,
    },

    /// List known symptoms, or suggest completions for a fragment
    Symptoms {
        /// Only symptoms containing this text
        #[arg(long)]
        filter: Option<String>,

        /// Maximum number of symptoms shown (default with --filter: 10)
        #[arg(long)]
        limit: Option<usize>,
    },

    /// List diseases with their severity
    Diseases,

    /// Show everything known about one disease
    Disease {
        /// Disease name (case-insensitive)
        name: String,
    },

    /// Show the effective configuration
    Config,
}

impl Commands {
    /// Name used in the invocation log
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Recommend { .. } => "recommend",
            Commands::Match { .. } => "match",
            Commands::Symptoms { .. } => "symptoms",
            Commands::Diseases => "diseases",
            Commands::Disease { .. } => "disease",
            Commands::Config => "config",
        }
    }
}

/// Patient intake given as flags
#[derive(Args, Debug, Default)]
#[group(id = "intake", multiple = true)]
pub struct ProfileArgs {
    /// Comma-separated symptoms, e.g. "headache, high fever"
    #[arg(long)]
    pub symptoms: Option<String>,

    /// Medicine you cannot get
    #[arg(long)]
    pub unavailable: Option<String>,

    /// Comma-separated allergies
    #[arg(long)]
    pub allergies: Option<String>,

    /// Comma-separated medicines currently taken
    #[arg(long)]
    pub current_medications: Option<String>,

    /// Comma-separated medical history
    #[arg(long)]
    pub history: Option<String>,

    #[arg(long)]
    pub age: Option<u32>,

    /// male, female or other
    #[arg(long)]
    pub gender: Option<Gender>,

    /// Body weight in kg
    #[arg(long)]
    pub weight: Option<f64>,

    /// How long the symptoms have lasted, e.g. "3-5 days"
    #[arg(long)]
    pub duration: Option<String>,

    /// mild, moderate or severe
    #[arg(long)]
    pub severity: Option<SymptomSeverity>,

    /// Prefer generic substitutes (default: true)
    #[arg(long)]
    pub generic_preferred: Option<bool>,

    /// Apply the price-sensitive discount
    #[arg(long)]
    pub price_sensitive: bool,

    /// Prefer same-day delivery
    #[arg(long)]
    pub express: bool,
}

impl ProfileArgs {
    /// Build a profile, starting from the intake form defaults
    pub fn into_profile(self) -> PatientProfile {
        let defaults = PatientProfile::default();
        let list = |text: Option<String>| text.as_deref().map(parse_list).unwrap_or_default();

        PatientProfile {
            age: self.age.unwrap_or(defaults.age),
            gender: self.gender.unwrap_or(defaults.gender),
            weight: self.weight.or(defaults.weight),
            symptoms: list(self.symptoms),
            symptom_duration: self.duration.unwrap_or(defaults.symptom_duration),
            symptom_severity: self.severity.unwrap_or(defaults.symptom_severity),
            current_medications: list(self.current_medications),
            allergies: list(self.allergies),
            medical_history: list(self.history),
            unavailable_medicine: self.unavailable.unwrap_or_default().trim().to_string(),
            preferences: Preferences {
                generic_preferred: self
                    .generic_preferred
                    .unwrap_or(defaults.preferences.generic_preferred),
                price_sensitive: self.price_sensitive,
                delivery_speed: if self.express {
                    DeliverySpeed::Express
                } else {
                    DeliverySpeed::Standard
                },
            },
        }
    }
}
