//! On-screen and in-page text for the focused body.

/// Per-body description panels and their text templates.
pub mod description_panel;
