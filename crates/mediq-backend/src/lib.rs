//! mediq-backend
//!
//! HTTP client for the remote diagnosis service — the opaque collaborator
//! that performs symptom-based diagnosis and medicine recognition.

pub mod client;
pub mod error;

pub use client::{DiagnosisClient, DEFAULT_BASE_URL};
pub use error::BackendError;
