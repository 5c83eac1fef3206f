//! mediq-core
//!
//! Pure domain types for the MedIQ client: patient intake, the diagnosis
//! service wire contract, and display projection. No HTTP dependency — this
//! is the shared vocabulary of the MedIQ system.

pub mod error;
pub mod intake;
pub mod models;
pub mod render;
