//! Infrastructure layer providing external service integrations.
//!
//! This module contains the HTTP client for the analysis service, the
//! resume file picker, and local file and clipboard output.

pub mod clipboard;
pub mod http;
pub mod persistence;
pub mod upload;

pub use clipboard::*;
pub use http::*;
pub use persistence::*;
pub use upload::*;
