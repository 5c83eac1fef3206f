//! Client for the MedIQ diagnosis service.
//!
//! The service is treated as an opaque collaborator: symptom-based diagnosis
//! at `POST /diagnose`, medicine recognition from an uploaded photo at
//! `POST /analyze_medicine`, and the known-symptom catalog at
//! `GET /symptoms`. Failures come back as non-2xx statuses with an optional
//! JSON `{"detail": ...}` body. Calls run to completion or failure — no
//! retries, no client-side timeout beyond the transport default.

use reqwest::multipart;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use mediq_core::models::{DiagnosisResult, MedicineAnalysis};

use crate::error::BackendError;

/// The fixed local deployment endpoint.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Client for the diagnosis service. Cheap to clone; the underlying
/// `reqwest::Client` pools connections.
#[derive(Debug, Clone)]
pub struct DiagnosisClient {
    http: reqwest::Client,
    base_url: String,
}

impl DiagnosisClient {
    /// Build a client for the given base URL. Trailing slashes are stripped
    /// so endpoint paths can be appended verbatim.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `POST /diagnose` with the derived symptom list.
    pub async fn diagnose(&self, symptoms: &[String]) -> Result<DiagnosisResult, BackendError> {
        let request_id = Uuid::new_v4();
        info!(%request_id, count = symptoms.len(), "requesting diagnosis");

        let response = self
            .http
            .post(format!("{}/diagnose", self.base_url))
            .json(&serde_json::json!({ "symptoms": symptoms }))
            .send()
            .await?;

        let result: DiagnosisResult = decode(response).await?;
        info!(%request_id, diagnosis = %result.diagnosis, "diagnosis received");
        Ok(result)
    }

    /// `POST /analyze_medicine` with the selected image as multipart form
    /// data, in a single file part named `file`.
    pub async fn analyze_medicine(
        &self,
        filename: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<MedicineAnalysis, BackendError> {
        let request_id = Uuid::new_v4();
        info!(%request_id, filename, size = bytes.len(), "uploading medicine image");

        let part = multipart::Part::bytes(bytes)
            .file_name(filename.to_string())
            .mime_str(content_type)?;
        let form = multipart::Form::new().part("file", part);

        let response = self
            .http
            .post(format!("{}/analyze_medicine", self.base_url))
            .multipart(form)
            .send()
            .await?;

        let analysis: MedicineAnalysis = decode(response).await?;
        info!(%request_id, "medicine analysis received");
        Ok(analysis)
    }

    /// `GET /symptoms` — the catalog of symptom tokens the service knows,
    /// offered by the intake form as suggestions.
    pub async fn symptom_catalog(&self) -> Result<Vec<String>, BackendError> {
        #[derive(Deserialize)]
        struct Catalog {
            symptoms: Vec<String>,
        }

        let response = self
            .http
            .get(format!("{}/symptoms", self.base_url))
            .send()
            .await?;

        let catalog: Catalog = decode(response).await?;
        Ok(catalog.symptoms)
    }
}

/// Check the status and decode the body.
///
/// Non-2xx responses are read as text first so a JSON `{"detail": ...}`
/// payload can be surfaced; anything else falls back to the status alone.
async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, BackendError> {
    let status = response.status();
    if !status.is_success() {
        let detail = response
            .text()
            .await
            .ok()
            .and_then(|body| serde_json::from_str::<serde_json::Value>(&body).ok())
            .and_then(|value| {
                value
                    .get("detail")
                    .and_then(|detail| detail.as_str())
                    .map(str::to_string)
            });
        return Err(BackendError::Rejected {
            status: status.as_u16(),
            detail,
        });
    }

    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|e| BackendError::ResponseParse(e.to_string()))
}
