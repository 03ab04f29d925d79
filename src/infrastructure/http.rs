//! HTTP client for the remote analysis service.

use crate::application::AnalysisService;
use crate::domain::{
    AnalysisResult, SubmissionError, SubmissionRequest, SubmissionResult, GENERIC_SERVICE_ERROR,
};
use reqwest::blocking::multipart::{Form, Part};
use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::Deserialize;
use std::fs;
use std::time::Duration;
use tracing::{debug, info};

pub const DEFAULT_ENDPOINT: &str = "https://ai-resume-generator-ta2j.onrender.com";

const RESUME_FIELD: &str = "resume";
const DESCRIPTION_FIELD: &str = "job_description";

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Posts the resume and job description as one multipart request.
///
/// One attempt per call: no retry and no client-side timeout.
pub struct HttpAnalysisService {
    client: Client,
    endpoint: String,
}

impl HttpAnalysisService {
    pub fn new(endpoint: impl Into<String>) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(None::<Duration>).build()?;
        Ok(Self::with_client(client, endpoint))
    }

    pub fn with_client(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn build_form(request: &SubmissionRequest) -> SubmissionResult<Form> {
        let bytes = fs::read(&request.resume.path).map_err(SubmissionError::transport)?;
        let resume = Part::bytes(bytes)
            .file_name(request.resume.file_name.clone())
            .mime_str(request.resume.mime_type())
            .map_err(SubmissionError::transport)?;

        Ok(Form::new()
            .part(RESUME_FIELD, resume)
            .text(DESCRIPTION_FIELD, request.job_description.clone()))
    }
}

impl AnalysisService for HttpAnalysisService {
    fn analyze(&self, request: &SubmissionRequest) -> SubmissionResult<AnalysisResult> {
        let form = Self::build_form(request)?;

        info!(endpoint = %self.endpoint, "posting analysis request");
        let response = self
            .client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .map_err(SubmissionError::transport)?;

        let status = response.status();
        let body = response.text().map_err(SubmissionError::transport)?;
        debug!(%status, body_len = body.len(), "analysis response received");

        interpret_response(status, &body)
    }
}

/// Maps a status and body onto the outcome of an attempt.
///
/// Success bodies must have the [`AnalysisResult`] shape. If one does not
/// but names an `error`, that message is reported as a service error;
/// otherwise the parser's message is reported as a transport error.
/// Failure bodies contribute their `error` field, else the generic message.
pub fn interpret_response(status: StatusCode, body: &str) -> SubmissionResult<AnalysisResult> {
    if status.is_success() {
        return serde_json::from_str::<AnalysisResult>(body).map_err(|parse_err| {
            match error_message(body) {
                Some(message) => SubmissionError::Service(message),
                None => SubmissionError::transport(parse_err),
            }
        });
    }

    Err(SubmissionError::Service(
        error_message(body).unwrap_or_else(|| GENERIC_SERVICE_ERROR.to_string()),
    ))
}

fn error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.error)
        .filter(|message| !message.is_empty())
}
