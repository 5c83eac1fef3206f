//! The command surface the frontend invokes.
//!
//! Async functions over the shared [`DesktopState`] returning
//! `Result<_, String>`, with the error string rendered inline by the
//! frontend. Validation runs before any client is built, so a validation
//! failure can never issue a network call. Requests are spawned so a submit
//! command returns immediately; the frontend polls the `*_status` commands
//! while a flow is pending.

use std::path::Path;

use tracing::warn;

use mediq_backend::DiagnosisClient;
use mediq_core::error::ValidationError;
use mediq_core::intake::PatientIntake;
use mediq_core::models::{image_content_type_for_extension, MedicineAnalysis};
use mediq_core::render::DiagnosisView;

use crate::state::{ActiveTab, BackendConfig, DesktopState, FlowStatus};

async fn build_client(state: &DesktopState) -> DiagnosisClient {
    let config = state.config.lock().await;
    DiagnosisClient::new(config.base_url.clone())
}

/// Point the app at a diagnosis service.
pub async fn configure(state: &DesktopState, base_url: String) -> Result<(), String> {
    let mut config = state.config.lock().await;
    *config = BackendConfig { base_url };
    Ok(())
}

pub async fn active_tab(state: &DesktopState) -> ActiveTab {
    *state.active_tab.lock().await
}

pub async fn set_active_tab(state: &DesktopState, tab: ActiveTab) {
    *state.active_tab.lock().await = tab;
}

/// Validate the intake form and, if it passes, start a diagnosis request.
///
/// A validation failure is returned directly and leaves the diagnosis slot
/// untouched. On success the slot goes `Pending` and the spawned request
/// resolves it whenever it completes.
pub async fn submit_intake(state: &DesktopState, intake: PatientIntake) -> Result<(), String> {
    let symptoms = intake.validate().map_err(|e| e.to_string())?;

    let client = build_client(state).await;
    let slot = state.diagnosis.clone();
    slot.begin().await;

    tokio::spawn(async move {
        match client.diagnose(&symptoms).await {
            Ok(result) => slot.finish_ok(DiagnosisView::project(&result)).await,
            Err(e) => {
                warn!(error = %e, "diagnosis request failed");
                slot.finish_err(e.user_message()).await;
            }
        }
    });

    Ok(())
}

pub async fn diagnosis_status(state: &DesktopState) -> FlowStatus<DiagnosisView> {
    state.diagnosis.snapshot().await
}

/// Validate the selected image and, if it passes, start a medicine analysis
/// upload. Supersedes any prior result or error for this flow only.
pub async fn analyze_medicine(state: &DesktopState, path: String) -> Result<(), String> {
    let (filename, content_type, bytes) = read_image_file(&path).map_err(|e| e.to_string())?;

    let client = build_client(state).await;
    let slot = state.medicine.clone();
    slot.begin().await;

    tokio::spawn(async move {
        match client.analyze_medicine(&filename, content_type, bytes).await {
            Ok(analysis) => slot.finish_ok(analysis).await,
            Err(e) => {
                warn!(error = %e, "medicine analysis failed");
                slot.finish_err(e.user_message()).await;
            }
        }
    });

    Ok(())
}

pub async fn medicine_status(state: &DesktopState) -> FlowStatus<MedicineAnalysis> {
    state.medicine.snapshot().await
}

/// Fetch the catalog of symptom tokens the service knows, for the intake
/// form to offer as suggestions.
pub async fn fetch_symptom_catalog(state: &DesktopState) -> Result<Vec<String>, String> {
    let client = build_client(state).await;
    client.symptom_catalog().await.map_err(|e| e.user_message())
}

/// Check the selected file before any upload: it must exist, carry an image
/// extension, and be non-empty.
fn read_image_file(path: &str) -> Result<(String, &'static str, Vec<u8>), ValidationError> {
    if path.trim().is_empty() {
        return Err(ValidationError::NoFileSelected);
    }

    let path = Path::new(path);
    let filename = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or(ValidationError::NoFileSelected)?;

    let content_type = path
        .extension()
        .and_then(|ext| image_content_type_for_extension(&ext.to_string_lossy()))
        .ok_or_else(|| ValidationError::NotAnImage(filename.clone()))?;

    let bytes =
        std::fs::read(path).map_err(|_| ValidationError::Unreadable(filename.clone()))?;
    if bytes.is_empty() {
        return Err(ValidationError::EmptyFile(filename));
    }

    Ok((filename, content_type, bytes))
}
