//! Smoke test for the two request flows against a running diagnosis service.
//!
//! Usage:
//!   MEDIQ_BASE_URL=http://127.0.0.1:8000 \
//!   MEDIQ_SYMPTOMS="fever, cough, headache" \
//!   MEDIQ_IMAGE=/path/to/medicine.jpg \
//!   cargo run -p mediq-desktop --example clinic_smoke
//!
//! `MEDIQ_IMAGE` is optional; without it only the diagnosis flow runs.

use std::time::Duration;

use mediq_core::intake::{Gender, PatientIntake};
use mediq_core::models::MedicineAnalysis;
use mediq_desktop::commands;
use mediq_desktop::state::{DesktopState, FlowSlot, FlowStatus};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt().with_env_filter("info").init();

    let base_url = std::env::var("MEDIQ_BASE_URL")
        .unwrap_or_else(|_| mediq_backend::DEFAULT_BASE_URL.to_string());
    let symptoms = std::env::var("MEDIQ_SYMPTOMS")
        .unwrap_or_else(|_| "fever, cough, headache".to_string());
    let image = std::env::var("MEDIQ_IMAGE").ok();

    let state = DesktopState::default();
    commands::configure(&state, base_url.clone())
        .await
        .map_err(|e| eyre::eyre!(e))?;

    println!("Diagnosis service: {base_url}");

    match commands::fetch_symptom_catalog(&state).await {
        Ok(catalog) => println!("Known symptoms: {}", catalog.len()),
        Err(e) => println!("Symptom catalog unavailable: {e}"),
    }

    let intake = PatientIntake {
        name: "Smoke Test".to_string(),
        age: "30".to_string(),
        gender: Some(Gender::Other),
        symptoms,
    };

    println!();
    println!("Submitting intake...");
    commands::submit_intake(&state, intake)
        .await
        .map_err(|e| eyre::eyre!(e))?;

    match await_flow(&state.diagnosis).await {
        FlowStatus::Ready { value, .. } => {
            println!();
            println!("=== Diagnosis Results ===");
            println!("Primary Diagnosis: {}", value.diagnosis);
            println!("Confidence: {}", value.confidence_pct);
            println!();
            println!("=== Disease Information ===");
            println!("Description: {}", value.disease_info.description);
            println!("Severity: {}", value.disease_info.severity);
            println!("Contagious: {}", value.disease_info.contagious);
            println!("Precautions: {}", value.disease_info.precautions);

            if !value.other_diagnoses.is_empty() {
                println!();
                println!("=== Other Possible Diagnoses ===");
                for candidate in &value.other_diagnoses {
                    println!("- {} ({})", candidate.disease, candidate.confidence_pct);
                }
            }

            if !value.medicines.is_empty() {
                println!();
                println!("=== Recommended Medicines ===");
                for medicine in &value.medicines {
                    println!();
                    println!("Medicine: {}", medicine.name);
                    println!("Usage: {}", medicine.usage);
                    println!("Dosage: {}", medicine.dosage);
                    println!("Side Effects: {}", medicine.side_effects);
                }
            }
        }
        FlowStatus::Failed { message, .. } => println!("Diagnosis failed: {message}"),
        _ => println!("Diagnosis did not complete in time"),
    }

    let Some(image) = image else {
        return Ok(());
    };

    println!();
    println!("Uploading {image} for medicine analysis...");
    commands::analyze_medicine(&state, image)
        .await
        .map_err(|e| eyre::eyre!(e))?;

    match await_flow(&state.medicine).await {
        FlowStatus::Ready { value, .. } => match value {
            MedicineAnalysis::Recognized {
                medicines,
                extracted_text,
            } => {
                println!();
                println!("=== Matched Medicines ===");
                for medicine in &medicines {
                    println!();
                    println!("Medicine: {}", medicine.name);
                    println!("Usage: {}", medicine.usage);
                    println!("Dosage: {}", medicine.dosage);
                    println!("Side Effects: {}", medicine.side_effects);
                }
                println!();
                println!("Extracted text: {extracted_text}");
            }
            MedicineAnalysis::Unrecognized {
                message,
                extracted_text,
                ..
            } => {
                println!();
                println!("{message}");
                println!("Extracted text: {extracted_text}");
            }
        },
        FlowStatus::Failed { message, .. } => println!("Medicine analysis failed: {message}"),
        _ => println!("Medicine analysis did not complete in time"),
    }

    Ok(())
}

/// Poll a flow slot until it settles (or give up after 30 seconds).
async fn await_flow<T: Clone>(slot: &FlowSlot<T>) -> FlowStatus<T> {
    for _ in 0..150 {
        let status = slot.snapshot().await;
        if !matches!(status, FlowStatus::Pending) {
            return status;
        }
        tokio::time::sleep(Duration::from_millis(200)).await;
    }
    slot.snapshot().await
}
