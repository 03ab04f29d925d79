//! Application layer managing state and the submission workflow.
//!
//! This module coordinates between the domain layer and presentation layer,
//! owning the form state, the request lifecycle and UI interaction state.

pub mod state;
pub mod submission;

pub use state::*;
pub use submission::*;
