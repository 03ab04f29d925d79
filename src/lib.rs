//! Resume Tailor - Terminal Resume Analysis Client
//!
//! A terminal client that submits a resume and a job description to a
//! remote analysis service and displays the fit score, suggested edits,
//! upskilling recommendations and rewritten resume it returns.

pub mod domain;
pub mod application;
pub mod infrastructure;
pub mod presentation;
pub mod config;

pub use domain::*;
pub use application::*;
