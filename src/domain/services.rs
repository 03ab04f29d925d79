//! Response normalization and input validation.
//!
//! These are the pure rules of the client: how a `ListOrText` field becomes
//! the list the user sees, and when a form is complete enough to submit.

use super::errors::{SubmissionError, SubmissionResult};
use super::models::{ListOrText, ResumeFile, SubmissionRequest};

const ITEM_MARKER: &str = "- ";

/// Removes a single leading `"- "` from an item, if present.
///
/// # Examples
///
/// ```
/// use resume_tailor::domain::strip_marker;
///
/// assert_eq!(strip_marker("- Learn SQL"), "Learn SQL");
/// assert_eq!(strip_marker("- - nested"), "- nested");
/// assert_eq!(strip_marker("* star"), "* star");
/// ```
pub fn strip_marker(item: &str) -> &str {
    item.strip_prefix(ITEM_MARKER).unwrap_or(item)
}

/// Turns a list-or-text field into display items.
///
/// Lists keep their items and order. Text is split on `'\n'`, one item per
/// line, empty lines included. Each item then loses one leading `"- "`.
/// Nothing else is trimmed, merged or reordered.
///
/// # Examples
///
/// ```
/// use resume_tailor::domain::{normalize, ListOrText};
///
/// let list = ListOrText::Items(vec!["- A".into(), "B".into()]);
/// let text = ListOrText::Text("- A\nB".into());
/// assert_eq!(normalize(&list), vec!["A", "B"]);
/// assert_eq!(normalize(&text), normalize(&list));
/// ```
pub fn normalize(field: &ListOrText) -> Vec<String> {
    match field {
        ListOrText::Items(items) => items
            .iter()
            .map(|item| strip_marker(item).to_string())
            .collect(),
        ListOrText::Text(text) => text
            .split('\n')
            .map(|line| strip_marker(line).to_string())
            .collect(),
    }
}

/// Checks that both a resume and a non-blank description are present.
pub fn validate(
    selected_file: Option<&ResumeFile>,
    description: &str,
) -> SubmissionResult<SubmissionRequest> {
    match selected_file {
        Some(resume) if !description.trim().is_empty() => Ok(SubmissionRequest {
            resume: resume.clone(),
            job_description: description.to_string(),
        }),
        _ => Err(SubmissionError::Validation),
    }
}

/// Formats a fit score, dropping the fraction of whole numbers.
pub fn format_fit_score(score: f64) -> String {
    if score.is_finite() && score.fract() == 0.0 {
        format!("{score:.0}")
    } else {
        format!("{}", score)
    }
}
