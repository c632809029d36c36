//! SmartMed Common - reference data, matching and recommendation logic
//!
//! Everything the `smartmedctl` front end needs to turn a patient's
//! symptoms and an unavailable medicine into a substitute recommendation.
//! No medical inference: set overlap, table lookups and fixed rules.

pub mod advice;
pub mod catalog;
pub mod config;
pub mod error;
pub mod fallback;
pub mod matcher;
pub mod profile;
pub mod purchase;
pub mod recommend;
pub mod reference;
pub mod response;
pub mod severity;

pub use config::SmartMedConfig;
pub use error::{Error, Result};
pub use fallback::fallback_response;
pub use matcher::{find_diseases, DiseaseMatch, MatchOptions};
pub use profile::{parse_list, PatientProfile};
pub use recommend::{generate, RecommendOptions};
pub use reference::{Disease, ReferenceData, Symptom};
pub use response::RecommendationResponse;
pub use severity::SymptomAnalysis;
