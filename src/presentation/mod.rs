//! Presentation layer handling terminal UI and user input.
//!
//! This module manages the terminal user interface using ratatui,
//! handles keyboard input, and renders the form and analysis results.

pub mod ui;
pub mod input;
pub mod view;

pub use ui::*;
pub use input::*;
pub use view::*;
