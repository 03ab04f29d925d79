//! Submission controller: form state and the request lifecycle.
//!
//! The controller is the only writer of [`SubmissionState`]. A submit runs
//! the service call on a worker thread and hands the outcome back through a
//! channel, so the state itself is only ever mutated from the thread that
//! owns the controller (the UI loop).

use crate::domain::{
    validate, AnalysisResult, ResumeFile, SubmissionError, SubmissionRequest, SubmissionResult,
    SubmissionState,
};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread;
use tracing::{debug, info, warn};

/// The remote analysis endpoint, seen from the client.
pub trait AnalysisService: Send + Sync {
    /// Performs exactly one analysis attempt.
    fn analyze(&self, request: &SubmissionRequest) -> SubmissionResult<AnalysisResult>;
}

/// What a call to [`SubmissionController::submit`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A request was issued.
    Started,
    /// The form was incomplete; the validation error is now in the state.
    Rejected,
    /// A request is already in flight; nothing changed.
    Busy,
}

#[derive(Default)]
pub struct SubmissionController {
    state: SubmissionState,
    pending: Option<Receiver<SubmissionResult<AnalysisResult>>>,
}

impl SubmissionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn is_in_flight(&self) -> bool {
        self.state.in_flight
    }

    /// Records the chosen resume. Allowed while a request is in flight.
    pub fn select_file(&mut self, file: ResumeFile) {
        debug!(file = %file.file_name, "resume selected");
        self.state.selected_file = Some(file);
    }

    /// Records the job description verbatim.
    pub fn set_description(&mut self, text: impl Into<String>) {
        self.state.description = text.into();
    }

    /// Validates the form and, if complete, issues a single request.
    ///
    /// On success the state moves to in-flight with `result` and `error`
    /// cleared; the outcome arrives through [`poll`](Self::poll).
    pub fn submit(&mut self, service: Arc<dyn AnalysisService>) -> SubmitOutcome {
        if self.state.in_flight {
            debug!("submit ignored while a request is in flight");
            return SubmitOutcome::Busy;
        }

        let request = match validate(self.state.selected_file.as_ref(), &self.state.description) {
            Ok(request) => request,
            Err(err) => {
                warn!(error = %err, "submission rejected");
                self.state.result = None;
                self.state.error = Some(err.to_string());
                return SubmitOutcome::Rejected;
            }
        };

        info!(
            file = %request.resume.file_name,
            description_len = request.job_description.len(),
            "submitting resume for analysis"
        );
        self.state.in_flight = true;
        self.state.result = None;
        self.state.error = None;

        let (tx, rx) = mpsc::channel();
        self.pending = Some(rx);
        thread::spawn(move || {
            let outcome = service.analyze(&request);
            // The receiver only goes away with the controller itself.
            let _ = tx.send(outcome);
        });

        SubmitOutcome::Started
    }

    /// Applies the outcome of the pending request if it has settled.
    ///
    /// Returns `true` when the state changed. A worker that stops without
    /// reporting completes the attempt as a transport failure.
    pub fn poll(&mut self) -> bool {
        let Some(rx) = self.pending.as_ref() else {
            return false;
        };

        let outcome = match rx.try_recv() {
            Ok(outcome) => outcome,
            Err(TryRecvError::Empty) => return false,
            Err(TryRecvError::Disconnected) => Err(SubmissionError::Transport(
                "The analysis request stopped before returning a response.".to_string(),
            )),
        };

        self.pending = None;
        self.complete(outcome);
        true
    }

    /// Settles the current attempt. Every exit path goes through here, so
    /// `in_flight` is always released and exactly one of `result`/`error`
    /// is set afterwards.
    pub fn complete(&mut self, outcome: SubmissionResult<AnalysisResult>) {
        self.state.in_flight = false;
        match outcome {
            Ok(result) => {
                info!(fit_score = result.fit_score, "analysis completed");
                self.state.result = Some(result);
                self.state.error = None;
            }
            Err(err) => {
                warn!(error = %err, "analysis failed");
                self.state.result = None;
                self.state.error = Some(err.to_string());
            }
        }
    }
}
