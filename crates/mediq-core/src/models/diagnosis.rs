use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One diagnosis candidate with the service's confidence in `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RankedDiagnosis {
    pub disease: String,
    pub confidence: f64,
}

/// Reference information for the primary diagnosis.
///
/// Served by the backend from its disease table as plain strings; entries it
/// has no row for come back as `"Unknown"` rather than being omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DiseaseInfo {
    #[serde(default)]
    pub name: String,
    pub description: String,
    pub severity: String,
    pub contagious: String,
    pub precautions: String,
}

/// A recommended medicine entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Medicine {
    pub name: String,
    pub usage: String,
    pub dosage: String,
    pub side_effects: String,
}

/// The diagnosis service's response to `POST /diagnose`.
///
/// `possible_diagnoses` is sorted by descending confidence and its first
/// entry duplicates the primary `diagnosis`/`confidence` pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DiagnosisResult {
    pub diagnosis: String,
    pub confidence: f64,
    pub disease_info: DiseaseInfo,
    pub possible_diagnoses: Vec<RankedDiagnosis>,
    #[serde(default)]
    pub medicines: Vec<Medicine>,
}
