use thiserror::Error;

/// Fallback message for a failed response that carries no usable `error` field.
pub const GENERIC_SERVICE_ERROR: &str = "Something went wrong with the API.";

/// Why a submit attempt ended without a result.
///
/// Every variant is terminal for the attempt and is shown to the user as
/// its display text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    /// Resume or job description missing; detected before any request.
    #[error("Please upload a resume and provide a job description.")]
    Validation,
    /// The service answered with a non-success status.
    #[error("{0}")]
    Service(String),
    /// The request failed or the response could not be read.
    #[error("{0}")]
    Transport(String),
}

impl SubmissionError {
    pub fn transport(err: impl std::fmt::Display) -> Self {
        SubmissionError::Transport(err.to_string())
    }
}

#[derive(Debug, Error)]
pub enum SelectionError {
    #[error("Unsupported file type: {0} (choose a .pdf or .docx file)")]
    UnsupportedType(String),
    #[error("No such file: {0}")]
    NotFound(String),
    #[error("Cannot read {path}: {source}")]
    Unreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

pub type SubmissionResult<T> = Result<T, SubmissionError>;
