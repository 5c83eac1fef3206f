//! Contract tests for the diagnosis service client, against a stub server.

use mediq_backend::{BackendError, DiagnosisClient};
use mediq_core::models::MedicineAnalysis;

fn diagnose_body() -> String {
    serde_json::json!({
        "diagnosis": "Influenza",
        "confidence": 0.8734,
        "disease_info": {
            "name": "Influenza",
            "description": "A viral respiratory infection.",
            "severity": "Moderate",
            "contagious": "Yes",
            "precautions": "Rest and fluids"
        },
        "possible_diagnoses": [
            { "disease": "Influenza", "confidence": 0.8734 },
            { "disease": "Common Cold", "confidence": 0.0911 }
        ],
        "medicines": []
    })
    .to_string()
}

#[tokio::test]
async fn diagnose_posts_the_symptom_list_and_decodes_the_result() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/diagnose")
        .match_header("content-type", "application/json")
        .match_body(mockito::Matcher::Json(
            serde_json::json!({ "symptoms": ["fever", "cough"] }),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(diagnose_body())
        .create_async()
        .await;

    let client = DiagnosisClient::new(server.url());
    let result = client
        .diagnose(&["fever".to_string(), "cough".to_string()])
        .await
        .expect("diagnose should succeed");

    assert_eq!(result.diagnosis, "Influenza");
    assert_eq!(result.possible_diagnoses.len(), 2);
    mock.assert_async().await;
}

#[tokio::test]
async fn a_rejection_with_detail_surfaces_the_detail() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/diagnose")
        .with_status(500)
        .with_header("content-type", "application/json")
        .with_body(r#"{"detail": "No symptoms provided"}"#)
        .create_async()
        .await;

    let client = DiagnosisClient::new(server.url());
    let err = client
        .diagnose(&["fever".to_string()])
        .await
        .expect_err("diagnose should fail");

    match &err {
        BackendError::Rejected { status, detail } => {
            assert_eq!(*status, 500);
            assert_eq!(detail.as_deref(), Some("No symptoms provided"));
        }
        other => panic!("expected rejection, got {other:?}"),
    }
    assert_eq!(err.user_message(), "No symptoms provided");
}

#[tokio::test]
async fn a_rejection_without_detail_falls_back_to_a_generic_message() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/diagnose")
        .with_status(502)
        .with_body("Bad Gateway")
        .create_async()
        .await;

    let client = DiagnosisClient::new(server.url());
    let err = client
        .diagnose(&["fever".to_string()])
        .await
        .expect_err("diagnose should fail");

    assert_eq!(
        err.user_message(),
        "the diagnosis service returned an error (HTTP 502)"
    );
}

#[tokio::test]
async fn an_unreachable_service_is_a_transport_error() {
    // Nothing listens on the discard port.
    let client = DiagnosisClient::new("http://127.0.0.1:9");
    let err = client
        .symptom_catalog()
        .await
        .expect_err("request should fail");

    assert!(matches!(err, BackendError::Transport(_)));
    assert_eq!(err.user_message(), "could not reach the diagnosis service");
}

#[tokio::test]
async fn analyze_medicine_uploads_a_single_part_named_file() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/analyze_medicine")
        .match_header(
            "content-type",
            mockito::Matcher::Regex("^multipart/form-data.*".to_string()),
        )
        .match_body(mockito::Matcher::Regex(r#"name="file""#.to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            serde_json::json!({
                "status": "success",
                "medicines": [{
                    "name": "Paracetamol",
                    "usage": "Pain and fever relief",
                    "dosage": "500mg every 6 hours",
                    "side_effects": "Rare at recommended doses"
                }],
                "extracted_text": "paracetamol 500mg"
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = DiagnosisClient::new(server.url());
    let analysis = client
        .analyze_medicine("pill.png", "image/png", b"fake image bytes".to_vec())
        .await
        .expect("analysis should succeed");

    match analysis {
        MedicineAnalysis::Recognized { medicines, .. } => {
            assert_eq!(medicines[0].name, "Paracetamol");
        }
        other => panic!("expected recognized, got {other:?}"),
    }
    mock.assert_async().await;
}

#[tokio::test]
async fn analyze_medicine_not_found_keeps_the_extracted_text() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/analyze_medicine")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            serde_json::json!({
                "status": "not_found",
                "message": "No medicine information found in the image",
                "extracted_text": "illegible label"
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = DiagnosisClient::new(server.url());
    let analysis = client
        .analyze_medicine("pill.jpg", "image/jpeg", b"fake image bytes".to_vec())
        .await
        .expect("analysis should succeed");

    match analysis {
        MedicineAnalysis::Unrecognized {
            message,
            extracted_text,
            ..
        } => {
            assert_eq!(message, "No medicine information found in the image");
            assert_eq!(extracted_text, "illegible label");
        }
        other => panic!("expected unrecognized, got {other:?}"),
    }
}

#[tokio::test]
async fn symptom_catalog_decodes_the_token_list() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/symptoms")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"symptoms": ["fever", "cough", "headache"]}"#)
        .create_async()
        .await;

    let client = DiagnosisClient::new(server.url());
    let catalog = client
        .symptom_catalog()
        .await
        .expect("catalog should decode");

    assert_eq!(catalog, ["fever", "cough", "headache"]);
}

#[tokio::test]
async fn a_garbled_success_body_is_a_parse_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/symptoms")
        .with_status(200)
        .with_body("not json at all")
        .create_async()
        .await;

    let client = DiagnosisClient::new(server.url());
    let err = client
        .symptom_catalog()
        .await
        .expect_err("decoding should fail");

    assert!(matches!(err, BackendError::ResponseParse(_)));
    assert_eq!(
        err.user_message(),
        "the diagnosis service returned an unreadable response"
    );
}

#[tokio::test]
async fn trailing_slashes_in_the_base_url_are_tolerated() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/symptoms")
        .with_status(200)
        .with_body(r#"{"symptoms": []}"#)
        .create_async()
        .await;

    let client = DiagnosisClient::new(format!("{}/", server.url()));
    client
        .symptom_catalog()
        .await
        .expect("catalog should decode");
    mock.assert_async().await;
}
