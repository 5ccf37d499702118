//! UI Module for the Bajeti desktop application
//!
//! This module contains all user interface pieces: the screen views, reusable
//! components such as toasts and dialogs, and the shared theme.

pub mod components;
pub mod theme;
pub mod views;

// Re-export commonly used UI items
pub use components::*;
pub use theme::{button_styles, container_styles, create_bajeti_theme, text_input_styles, utils};
