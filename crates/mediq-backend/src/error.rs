use thiserror::Error;

/// A failure talking to the diagnosis service.
///
/// Everything here is per-flow and non-fatal: callers render
/// [`BackendError::user_message`] inline and let the user resubmit.
/// Requests are never retried automatically.
#[derive(Debug, Error)]
pub enum BackendError {
    /// The request never completed (connection refused, DNS failure, ...).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-2xx status, optionally carrying a
    /// JSON `{"detail": ...}` body.
    #[error("the diagnosis service rejected the request (HTTP {status})")]
    Rejected { status: u16, detail: Option<String> },

    /// A 2xx response whose body did not decode as the expected shape.
    #[error("response parsing failed: {0}")]
    ResponseParse(String),
}

impl BackendError {
    /// The inline, user-visible form of this error: the server-provided
    /// detail when present, else a generic fallback per category.
    pub fn user_message(&self) -> String {
        match self {
            BackendError::Transport(_) => "could not reach the diagnosis service".to_string(),
            BackendError::Rejected {
                detail: Some(detail),
                ..
            } => detail.clone(),
            BackendError::Rejected {
                status,
                detail: None,
            } => format!("the diagnosis service returned an error (HTTP {status})"),
            BackendError::ResponseParse(_) => {
                "the diagnosis service returned an unreadable response".to_string()
            }
        }
    }
}
