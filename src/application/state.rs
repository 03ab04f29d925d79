//! Application state management for the terminal resume client.
//!
//! This module contains the main application state and mode management
//! for the terminal user interface. Form and request state live in the
//! [`SubmissionController`]; everything else here is view and input state.

use super::submission::{AnalysisService, SubmissionController, SubmitOutcome};
use crate::domain::SubmissionState;
use crate::infrastructure::{copy_text, select_resume, FileRepository, DEFAULT_RESUME_FILENAME};
use std::sync::Arc;
use tracing::info;

/// Represents the current mode of the application.
///
/// The mode determines how key presses are interpreted and which input
/// field, if any, is being edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Navigation mode - focus moves between controls, shortcuts available
    Normal,
    /// Typing the path of the resume file
    EditingResumePath,
    /// Typing the job description
    EditingDescription,
    /// Help screen is displayed
    Help,
    /// Save dialog for the optimized resume is open
    SaveAs,
}

/// The form control that Enter activates in normal mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Resume,
    Description,
    Submit,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Resume => Focus::Description,
            Focus::Description => Focus::Submit,
            Focus::Submit => Focus::Resume,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Focus::Resume => Focus::Submit,
            Focus::Description => Focus::Resume,
            Focus::Submit => Focus::Description,
        }
    }
}

/// A single editing operation on a text input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEdit {
    Insert(char),
    Backspace,
    Delete,
    Left,
    Right,
    Home,
    End,
}

/// Main application state.
///
/// # Examples
///
/// ```no_run
/// use resume_tailor::application::{App, AppMode};
/// use resume_tailor::infrastructure::HttpAnalysisService;
/// use std::sync::Arc;
///
/// let service = HttpAnalysisService::new("http://localhost:5000/api/optimize").unwrap();
/// let app = App::new(Arc::new(service));
/// assert_eq!(app.mode, AppMode::Normal);
/// assert!(!app.submission().in_flight);
/// ```
pub struct App {
    /// Owner of the form and request state
    pub controller: SubmissionController,
    /// Service used for every submit
    service: Arc<dyn AnalysisService>,
    /// Current application mode
    pub mode: AppMode,
    /// Control activated by Enter in normal mode
    pub focus: Focus,
    /// Input buffer for the resume path
    pub resume_input: String,
    /// Input buffer for the save filename
    pub filename_input: String,
    /// Cursor position (in characters) within the active input
    pub cursor_position: usize,
    /// Vertical scroll of the output region
    pub results_scroll: u16,
    /// Scroll position in help text
    pub help_scroll: usize,
    /// Temporary status message to display
    pub status_message: Option<String>,
    /// Last file the optimized resume was saved to
    pub saved_filename: Option<String>,
}

impl App {
    pub fn new(service: Arc<dyn AnalysisService>) -> Self {
        Self {
            controller: SubmissionController::new(),
            service,
            mode: AppMode::Normal,
            focus: Focus::Resume,
            resume_input: String::new(),
            filename_input: String::new(),
            cursor_position: 0,
            results_scroll: 0,
            help_scroll: 0,
            status_message: None,
            saved_filename: None,
        }
    }

    pub fn submission(&self) -> &SubmissionState {
        self.controller.state()
    }

    /// Submits the form. Ignored while a request is in flight.
    pub fn submit(&mut self) {
        match self.controller.submit(self.service.clone()) {
            SubmitOutcome::Started => {
                self.results_scroll = 0;
                self.status_message = None;
            }
            SubmitOutcome::Rejected => {
                self.results_scroll = 0;
            }
            SubmitOutcome::Busy => {
                self.status_message = Some("Analysis already in progress".to_string());
            }
        }
    }

    /// Picks up a finished request, if any. Returns `true` when state changed.
    pub fn poll_submission(&mut self) -> bool {
        self.controller.poll()
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
    }

    /// Activates the focused control.
    pub fn activate_focus(&mut self) {
        match self.focus {
            Focus::Resume => self.start_resume_path(),
            Focus::Description => self.start_editing_description(),
            Focus::Submit => self.submit(),
        }
    }

    /// Switches to resume path entry, prefilled with the current selection.
    pub fn start_resume_path(&mut self) {
        self.mode = AppMode::EditingResumePath;
        self.focus = Focus::Resume;
        self.resume_input = self
            .submission()
            .selected_file
            .as_ref()
            .map(|file| file.path.display().to_string())
            .unwrap_or_default();
        self.cursor_position = self.resume_input.chars().count();
        self.status_message = None;
    }

    /// Selects the typed path as the resume and returns to normal mode.
    ///
    /// A rejected path leaves the previous selection untouched.
    pub fn confirm_resume_path(&mut self) {
        let path = self.resume_input.trim().to_string();
        self.select_resume_path(&path);
        self.mode = AppMode::Normal;
        self.resume_input.clear();
        self.cursor_position = 0;
    }

    /// Runs the picker on `path` and reports the outcome in the status line.
    pub fn select_resume_path(&mut self, path: &str) {
        match select_resume(path) {
            Ok(file) => {
                self.status_message = Some(format!("Selected {}", file.file_name));
                self.controller.select_file(file);
            }
            Err(err) => {
                self.status_message = Some(format!("Could not select resume: {err}"));
            }
        }
    }

    pub fn cancel_resume_path(&mut self) {
        self.mode = AppMode::Normal;
        self.resume_input.clear();
        self.cursor_position = 0;
    }

    /// Switches to description editing with the cursor at the end.
    pub fn start_editing_description(&mut self) {
        self.mode = AppMode::EditingDescription;
        self.focus = Focus::Description;
        self.cursor_position = self.submission().description.chars().count();
        self.status_message = None;
    }

    /// Leaves description editing. The text is already recorded.
    pub fn finish_editing_description(&mut self) {
        self.mode = AppMode::Normal;
        self.cursor_position = 0;
    }

    /// Switches to save-as mode to prompt for a filename.
    ///
    /// Requires an analysis result to save.
    pub fn start_save_as(&mut self) {
        if self.submission().result.is_none() {
            self.status_message = Some("No optimized resume to save yet".to_string());
            return;
        }
        self.mode = AppMode::SaveAs;
        self.filename_input = self
            .saved_filename
            .clone()
            .unwrap_or_else(|| DEFAULT_RESUME_FILENAME.to_string());
        self.cursor_position = self.filename_input.chars().count();
        self.status_message = None;
    }

    /// Gets the filename to use for saving.
    ///
    /// Returns the filename input if not empty, otherwise the default filename.
    pub fn get_save_filename(&self) -> String {
        if self.filename_input.is_empty() {
            DEFAULT_RESUME_FILENAME.to_string()
        } else {
            self.filename_input.clone()
        }
    }

    /// Writes the optimized resume to the chosen file.
    pub fn save_optimized_resume(&mut self) {
        let Some(result) = self.submission().result.as_ref() else {
            self.cancel_save_as();
            return;
        };
        let filename = self.get_save_filename();
        let outcome = FileRepository::save_optimized_resume(&result.optimized_resume, &filename);
        self.set_save_result(outcome);
    }

    /// Processes the result of a save operation and returns to normal mode.
    pub fn set_save_result(&mut self, result: Result<String, String>) {
        match result {
            Ok(filename) => {
                info!(%filename, "optimized resume saved");
                self.saved_filename = Some(filename.clone());
                self.status_message = Some(format!("Saved to {}", filename));
            }
            Err(error) => {
                self.status_message = Some(format!("Save failed: {}", error));
            }
        }

        self.mode = AppMode::Normal;
        self.filename_input.clear();
        self.cursor_position = 0;
    }

    pub fn cancel_save_as(&mut self) {
        self.mode = AppMode::Normal;
        self.filename_input.clear();
        self.cursor_position = 0;
    }

    /// Copies the optimized resume to the system clipboard.
    pub fn copy_optimized_resume(&mut self) {
        let Some(result) = self.submission().result.as_ref() else {
            self.status_message = Some("No optimized resume to copy yet".to_string());
            return;
        };
        self.status_message = Some(match copy_text(&result.optimized_resume) {
            Ok(()) => "Optimized resume copied to clipboard".to_string(),
            Err(e) => format!("Copy failed: {e}"),
        });
    }

    /// Applies a text edit to whichever input the current mode is editing.
    pub fn apply_edit(&mut self, edit: TextEdit) {
        match self.mode {
            AppMode::EditingResumePath => {
                edit_text(&mut self.resume_input, &mut self.cursor_position, edit);
            }
            AppMode::SaveAs => {
                edit_text(&mut self.filename_input, &mut self.cursor_position, edit);
            }
            AppMode::EditingDescription => {
                let mut text = self.submission().description.clone();
                edit_text(&mut text, &mut self.cursor_position, edit);
                self.controller.set_description(text);
            }
            AppMode::Normal | AppMode::Help => {}
        }
    }

    /// Inserts pasted text at the cursor of the active input.
    ///
    /// Line breaks become `'\n'` in the description and are dropped from
    /// single-line inputs. Outside an input mode the paste is ignored.
    pub fn paste(&mut self, pasted: &str) {
        let pasted = pasted.replace("\r\n", "\n").replace('\r', "\n");
        match self.mode {
            AppMode::EditingResumePath => {
                let line = pasted.replace('\n', "");
                insert_text(&mut self.resume_input, &mut self.cursor_position, &line);
            }
            AppMode::SaveAs => {
                let line = pasted.replace('\n', "");
                insert_text(&mut self.filename_input, &mut self.cursor_position, &line);
            }
            AppMode::EditingDescription => {
                let mut text = self.submission().description.clone();
                insert_text(&mut text, &mut self.cursor_position, &pasted);
                self.controller.set_description(text);
            }
            AppMode::Normal | AppMode::Help => {}
        }
    }

    pub fn scroll_results_up(&mut self, lines: u16) {
        self.results_scroll = self.results_scroll.saturating_sub(lines);
    }

    pub fn scroll_results_down(&mut self, lines: u16) {
        self.results_scroll = self.results_scroll.saturating_add(lines);
    }

    pub fn show_help(&mut self) {
        self.mode = AppMode::Help;
        self.help_scroll = 0;
    }
}

fn byte_at(text: &str, index: usize) -> usize {
    text.char_indices()
        .nth(index)
        .map(|(offset, _)| offset)
        .unwrap_or(text.len())
}

/// Inserts `inserted` at the character index `cursor` and moves past it.
fn insert_text(text: &mut String, cursor: &mut usize, inserted: &str) {
    *cursor = (*cursor).min(text.chars().count());
    let offset = byte_at(text, *cursor);
    text.insert_str(offset, inserted);
    *cursor += inserted.chars().count();
}

/// Applies `edit` to `text`, treating `cursor` as a character index.
fn edit_text(text: &mut String, cursor: &mut usize, edit: TextEdit) {
    let len = text.chars().count();
    *cursor = (*cursor).min(len);

    match edit {
        TextEdit::Insert(c) => {
            let offset = byte_at(text, *cursor);
            text.insert(offset, c);
            *cursor += 1;
        }
        TextEdit::Backspace => {
            if *cursor > 0 {
                let offset = byte_at(text, *cursor - 1);
                text.remove(offset);
                *cursor -= 1;
            }
        }
        TextEdit::Delete => {
            if *cursor < len {
                let offset = byte_at(text, *cursor);
                text.remove(offset);
            }
        }
        TextEdit::Left => *cursor = cursor.saturating_sub(1),
        TextEdit::Right => *cursor = (*cursor + 1).min(len),
        TextEdit::Home => *cursor = 0,
        TextEdit::End => *cursor = len,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::submission::tests::{sample_result, settle, FakeService};
    use crate::domain::SubmissionError;
    use std::fs;
    use tempfile::tempdir;

    fn app_with(service: FakeService) -> (App, Arc<FakeService>) {
        let service = Arc::new(service);
        (App::new(service.clone()), service)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.apply_edit(TextEdit::Insert(c));
        }
    }

    #[test]
    fn test_new_app_defaults() {
        let (app, _) = app_with(FakeService::new(Ok(sample_result())));
        assert_eq!(app.mode, AppMode::Normal);
        assert_eq!(app.focus, Focus::Resume);
        assert_eq!(app.submission(), &SubmissionState::default());
        assert!(app.status_message.is_none());
    }

    #[test]
    fn test_focus_cycles() {
        assert_eq!(Focus::Resume.next(), Focus::Description);
        assert_eq!(Focus::Submit.next(), Focus::Resume);
        assert_eq!(Focus::Resume.previous(), Focus::Submit);
        assert_eq!(Focus::Description.previous(), Focus::Resume);
    }

    #[test]
    fn test_description_edits_are_recorded() {
        let (mut app, _) = app_with(FakeService::new(Ok(sample_result())));
        app.start_editing_description();
        type_text(&mut app, "Rust\nRemote");
        assert_eq!(app.submission().description, "Rust\nRemote");

        app.apply_edit(TextEdit::Backspace);
        app.apply_edit(TextEdit::Home);
        app.apply_edit(TextEdit::Delete);
        assert_eq!(app.submission().description, "ust\nRemot");

        app.finish_editing_description();
        assert_eq!(app.mode, AppMode::Normal);
        assert_eq!(app.submission().description, "ust\nRemot");
    }

    #[test]
    fn test_edit_text_handles_multibyte_characters() {
        let mut text = String::from("café");
        let mut cursor = 4;
        edit_text(&mut text, &mut cursor, TextEdit::Backspace);
        assert_eq!(text, "caf");
        edit_text(&mut text, &mut cursor, TextEdit::Insert('é'));
        edit_text(&mut text, &mut cursor, TextEdit::Left);
        edit_text(&mut text, &mut cursor, TextEdit::Insert('ü'));
        assert_eq!(text, "cafüé");
        assert_eq!(cursor, 4);
    }

    #[test]
    fn test_paste_inserts_at_cursor() {
        let (mut app, _) = app_with(FakeService::new(Ok(sample_result())));
        app.start_editing_description();
        type_text(&mut app, "AB");
        app.apply_edit(TextEdit::Left);
        app.paste("x\ty\r\nz");

        assert_eq!(app.submission().description, "Ax\ty\nzB");
        assert_eq!(app.cursor_position, 6);
    }

    #[test]
    fn test_confirm_resume_path_selects_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("resume.pdf");
        fs::write(&path, b"%PDF").unwrap();

        let (mut app, _) = app_with(FakeService::new(Ok(sample_result())));
        app.start_resume_path();
        assert_eq!(app.mode, AppMode::EditingResumePath);
        type_text(&mut app, path.to_str().unwrap());
        app.confirm_resume_path();

        assert_eq!(app.mode, AppMode::Normal);
        let selected = app.submission().selected_file.as_ref().unwrap();
        assert_eq!(selected.file_name, "resume.pdf");
        assert_eq!(app.status_message.as_deref(), Some("Selected resume.pdf"));
    }

    #[test]
    fn test_rejected_path_keeps_previous_selection() {
        let dir = tempdir().unwrap();
        let good = dir.path().join("resume.docx");
        fs::write(&good, b"PK").unwrap();

        let (mut app, _) = app_with(FakeService::new(Ok(sample_result())));
        app.select_resume_path(good.to_str().unwrap());
        app.select_resume_path("notes.txt");

        assert_eq!(app.submission().selected_file.as_ref().unwrap().file_name, "resume.docx");
        assert!(app.status_message.as_deref().unwrap().starts_with("Could not select resume"));
        assert!(app.submission().error.is_none());
    }

    #[test]
    fn test_submit_without_input_shows_validation_error() {
        let (mut app, service) = app_with(FakeService::new(Ok(sample_result())));
        app.submit();

        assert_eq!(
            app.submission().error.as_deref(),
            Some("Please upload a resume and provide a job description.")
        );
        assert!(!app.submission().in_flight);
        assert_eq!(service.calls(), 0);
    }

    #[test]
    fn test_submit_while_busy_sets_status() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("resume.pdf");
        fs::write(&path, b"%PDF").unwrap();

        let (service, release) = FakeService::gated(Ok(sample_result()));
        let (mut app, service) = app_with(service);
        app.select_resume_path(path.to_str().unwrap());
        app.controller.set_description("Rust engineer");

        app.submit();
        assert!(app.submission().in_flight);
        app.submit();
        assert_eq!(app.status_message.as_deref(), Some("Analysis already in progress"));

        release.send(()).unwrap();
        settle(&mut app.controller);
        assert_eq!(service.calls(), 1);
        assert!(app.submission().result.is_some());
    }

    #[test]
    fn test_save_requires_result() {
        let (mut app, _) = app_with(FakeService::new(Ok(sample_result())));
        app.start_save_as();
        assert_eq!(app.mode, AppMode::Normal);
        assert_eq!(app.status_message.as_deref(), Some("No optimized resume to save yet"));
    }

    #[test]
    fn test_save_optimized_resume_writes_file() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("tailored.md");

        let (mut app, _) = app_with(FakeService::new(Ok(sample_result())));
        app.controller.complete(Ok(sample_result()));
        app.start_save_as();
        assert_eq!(app.mode, AppMode::SaveAs);
        assert_eq!(app.filename_input, DEFAULT_RESUME_FILENAME);

        app.filename_input = out.to_str().unwrap().to_string();
        app.save_optimized_resume();

        assert_eq!(app.mode, AppMode::Normal);
        assert_eq!(fs::read_to_string(&out).unwrap(), "...");
        assert_eq!(app.saved_filename.as_deref(), out.to_str());
    }

    #[test]
    fn test_copy_requires_result() {
        let (mut app, _) = app_with(FakeService::new(Err(SubmissionError::Validation)));
        app.copy_optimized_resume();
        assert_eq!(app.status_message.as_deref(), Some("No optimized resume to copy yet"));
    }

    #[test]
    fn test_results_scroll_saturates() {
        let (mut app, _) = app_with(FakeService::new(Ok(sample_result())));
        app.scroll_results_up(3);
        assert_eq!(app.results_scroll, 0);
        app.scroll_results_down(10);
        app.scroll_results_up(3);
        assert_eq!(app.results_scroll, 7);
    }
}
