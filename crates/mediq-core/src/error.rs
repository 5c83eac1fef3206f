use serde::Serialize;
use thiserror::Error;
use ts_rs::TS;

/// A local form-validation failure.
///
/// Caught before any network call is made and rendered as an inline message;
/// never sent over the wire. The flow that produced it is aborted and may be
/// retried by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error, TS)]
#[ts(export)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("no usable symptoms were entered")]
    NoSymptoms,

    #[error("no file selected")]
    NoFileSelected,

    #[error("{0} is not an image file")]
    NotAnImage(String),

    #[error("{0} is empty")]
    EmptyFile(String),

    #[error("could not read {0}")]
    Unreadable(String),
}
