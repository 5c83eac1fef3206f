use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;

/// Patient gender as captured by the intake form's select control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Gender {
    Male,
    Female,
    Other,
}

/// The four intake form fields. Transient — held only for the duration of
/// form entry and overwritten on each edit.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PatientIntake {
    pub name: String,
    /// Free-text age. Never parsed: the diagnosis service only sees symptoms.
    pub age: String,
    /// `None` until the user picks an option.
    pub gender: Option<Gender>,
    /// Comma-separated symptom tokens, e.g. `"fever, cough, headache"`.
    pub symptoms: String,
}

/// Split a comma-separated symptom string into trimmed, non-empty tokens.
pub fn parse_symptoms(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

impl PatientIntake {
    /// Check that all four fields are filled in, then derive the symptom
    /// list. Returns the first failure; no request may be issued until this
    /// succeeds.
    pub fn validate(&self) -> Result<Vec<String>, ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingField("name"));
        }
        if self.age.trim().is_empty() {
            return Err(ValidationError::MissingField("age"));
        }
        if self.gender.is_none() {
            return Err(ValidationError::MissingField("gender"));
        }
        if self.symptoms.trim().is_empty() {
            return Err(ValidationError::MissingField("symptoms"));
        }

        let symptoms = parse_symptoms(&self.symptoms);
        if symptoms.is_empty() {
            return Err(ValidationError::NoSymptoms);
        }

        Ok(symptoms)
    }
}
