use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Resume formats accepted by the file picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResumeKind {
    Pdf,
    Docx,
}

impl ResumeKind {
    /// Matches the picker's `.pdf,.docx` filter against a path's extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "pdf" => Some(ResumeKind::Pdf),
            "docx" => Some(ResumeKind::Docx),
            _ => None,
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            ResumeKind::Pdf => "application/pdf",
            ResumeKind::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
        }
    }
}

/// A reference to the resume chosen by the user.
///
/// Only the location and declared type are recorded here; the bytes are
/// read when the outbound request is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeFile {
    pub path: PathBuf,
    pub file_name: String,
    pub kind: ResumeKind,
}

impl ResumeFile {
    pub fn mime_type(&self) -> &'static str {
        self.kind.mime_type()
    }
}

/// A field the analysis service sends either as a JSON array or as one
/// newline-delimited string. Both shapes denote the same list of items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ListOrText {
    Items(Vec<String>),
    Text(String),
}

impl ListOrText {
    /// Display items with the leading `"- "` marker removed.
    pub fn items(&self) -> Vec<String> {
        super::services::normalize(self)
    }
}

/// Structured response of a successful analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(rename = "ats_score")]
    pub fit_score: f64,
    #[serde(rename = "ats_score_explanation", default)]
    pub fit_score_explanation: String,
    pub modifications: ListOrText,
    pub upskilling_suggestions: ListOrText,
    pub optimized_resume: String,
}

/// Validated input handed to an [`AnalysisService`](crate::application::AnalysisService).
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionRequest {
    pub resume: ResumeFile,
    pub job_description: String,
}

/// Form and request state owned by the submission controller.
///
/// After a completed attempt exactly one of `result` and `error` is set.
/// Both are empty before the first attempt and while a request is in flight.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubmissionState {
    pub selected_file: Option<ResumeFile>,
    pub description: String,
    pub in_flight: bool,
    pub result: Option<AnalysisResult>,
    pub error: Option<String>,
}
