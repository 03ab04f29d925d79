//! Pure view model of the submission state.

use crate::domain::{format_fit_score, SubmissionState};

pub const TITLE: &str = "An AI resume generator";
pub const TAGLINE: &str = "Upload your resume and the target job description! I will help you create a perfect resume tailored for the job!";
pub const FORM_TITLE: &str = "Setup Your Profile";
pub const RESUME_LABEL: &str = "Upload Resume (PDF or DOCX)";
pub const DESCRIPTION_LABEL: &str = "Paste Job Description";
pub const DESCRIPTION_PLACEHOLDER: &str = "Paste the job description here...";
pub const OUTPUT_TITLE: &str = "AI Assistant Response";
pub const IDLE_PLACEHOLDER: &str = "Hey there! I'm your AI resume generator. Upload your resume, set job details, and let's get started!";

pub const SUBMIT_LABEL: &str = "Analyze & Optimize";
pub const IN_FLIGHT_LABEL: &str = "Analyzing...";

pub fn submit_label(in_flight: bool) -> &'static str {
    if in_flight {
        IN_FLIGHT_LABEL
    } else {
        SUBMIT_LABEL
    }
}

pub fn error_text(message: &str) -> String {
    format!("An error occurred: {message}")
}

/// Result fields prepared for display. List fields are normalized; the
/// optimized resume is passed through untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultsView<'a> {
    pub fit_score: String,
    pub explanation: &'a str,
    pub modifications: Vec<String>,
    pub upskilling: Vec<String>,
    pub optimized_resume: &'a str,
}

/// The one output region shown below the form.
#[derive(Debug, Clone, PartialEq)]
pub enum OutputRegion<'a> {
    Idle,
    Error(&'a str),
    Results(ResultsView<'a>),
}

impl<'a> OutputRegion<'a> {
    pub fn from_state(state: &'a SubmissionState) -> Self {
        if let Some(message) = state.error.as_deref() {
            return OutputRegion::Error(message);
        }
        match state.result.as_ref() {
            Some(result) => OutputRegion::Results(ResultsView {
                fit_score: format_fit_score(result.fit_score),
                explanation: &result.fit_score_explanation,
                modifications: result.modifications.items(),
                upskilling: result.upskilling_suggestions.items(),
                optimized_resume: &result.optimized_resume,
            }),
            None => OutputRegion::Idle,
        }
    }
}
