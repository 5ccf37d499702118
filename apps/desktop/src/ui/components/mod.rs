//! UI Components Module
//!
//! This module contains reusable UI components for the Bajeti desktop
//! application.

pub mod dialog;
pub mod nav;
pub mod spinner;
pub mod toast;

// Re-export commonly used components
pub use dialog::*;
pub use nav::*;
pub use spinner::*;
pub use toast::*;
