use reqwest::StatusCode;
use thiserror::Error;

/// Failure taxonomy for calls against the backend, mirroring what the UI can
/// meaningfully distinguish: transport trouble, a structured backend refusal,
/// and a missing/rejected session.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Non-2xx response. `message` is whatever the endpoint family's error
    /// field carried, or a per-resource fallback when the body was opaque.
    #[error("{message}")]
    Backend { status: StatusCode, message: String },

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Identity check failed. Deliberately collapses transport failures into
    /// "logged out": the UI redirects to the login page either way.
    #[error("Not authenticated")]
    Unauthenticated,
}

impl ApiError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Backend { status, .. } => Some(*status),
            _ => None,
        }
    }
}
