//! mediq-desktop
//!
//! The application shell behind the MedIQ single-page UI: shared state and
//! the command layer the frontend invokes. The webview embedding lives
//! outside this crate; everything it calls is here, so integration tests
//! and the smoke example can drive the flows directly.

pub mod commands;
pub mod state;
