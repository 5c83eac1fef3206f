//! Display projection of service results.
//!
//! Pure functions from wire models to the form the frontend renders:
//! confidence values as two-decimal percentages, and the "other possible
//! diagnoses" list with the primary entry removed.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::{DiagnosisResult, DiseaseInfo, Medicine};

/// Render a confidence in `[0, 1]` as a percentage with two decimals,
/// e.g. `0.8734` → `"87.34%"`.
pub fn format_confidence(confidence: f64) -> String {
    format!("{:.2}%", confidence * 100.0)
}

/// A ranked alternative with its confidence pre-formatted for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RankedDiagnosisView {
    pub disease: String,
    pub confidence_pct: String,
}

/// The display form of a diagnosis response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DiagnosisView {
    pub diagnosis: String,
    pub confidence_pct: String,
    pub disease_info: DiseaseInfo,
    /// `possible_diagnoses` with its first (primary) entry excluded.
    pub other_diagnoses: Vec<RankedDiagnosisView>,
    pub medicines: Vec<Medicine>,
}

impl DiagnosisView {
    /// Project a wire result onto its display form.
    pub fn project(result: &DiagnosisResult) -> Self {
        let other_diagnoses = result
            .possible_diagnoses
            .iter()
            .skip(1)
            .map(|candidate| RankedDiagnosisView {
                disease: candidate.disease.clone(),
                confidence_pct: format_confidence(candidate.confidence),
            })
            .collect();

        Self {
            diagnosis: result.diagnosis.clone(),
            confidence_pct: format_confidence(result.confidence),
            disease_info: result.disease_info.clone(),
            other_diagnoses,
            medicines: result.medicines.clone(),
        }
    }
}
