//! Bajeti Shared Library
//!
//! This crate contains the interaction logic shared across Bajeti front ends:
//! form validation, sensitive-value masking, visibility toggles, modal dialog
//! management, flash-message routing, and submit guards. It is deliberately
//! free of any GUI framework types so the rules can be tested in isolation
//! and reused by other shells later.
//!
//! # Features
//!
//! - **Validation**: password confirmation checks and per-field form validation
//! - **Masking**: hide/restore sensitive display values behind a placeholder
//! - **Dialogs**: an explicit manager for alert/confirm dialogs with one
//!   level of suspend-and-restore nesting
//! - **Flash messages**: parse `?toast=` / `?message=` launch parameters into
//!   one-shot notifications
//! - **Submit guards**: double-submit protection with spinner frames
//! - **Configuration**: typed app configuration with YAML serialization
//!
//! # Usage
//!
//! ```rust
//! use bajeti_shared::{PasswordMatch, VisibilityToggle};
//!
//! let state = PasswordMatch::check("hunter2", "hunter2");
//! assert!(state.is_match());
//!
//! let mut toggle = VisibilityToggle::hidden();
//! toggle.toggle();
//! assert!(toggle.is_visible());
//! ```

pub mod config;
pub mod dialog;
pub mod flash;
pub mod masking;
pub mod submit;
pub mod validation;
pub mod visibility;

// Re-export commonly used types
pub use config::{AppConfig, SessionConfig, UiConfig};
pub use dialog::{Dialog, DialogKind, DialogManager, DialogOutcome};
pub use flash::{FlashParams, RouteRequest, Severity};
pub use masking::{mask_all, MaskedValue, MASK_PLACEHOLDER};
pub use submit::{SubmitGuard, SPINNER_FRAMES};
pub use validation::{
    is_valid_email, validate_reset_form, PasswordMatch, ResetFormErrors,
    PASSWORDS_MATCH_MESSAGE, PASSWORDS_MISMATCH_MESSAGE,
};
pub use visibility::VisibilityToggle;

/// Current version of the shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common error types used across Bajeti components
pub mod error {
    use thiserror::Error;

    /// Shared error type for operations that can fail across components
    #[derive(Debug, Error)]
    pub enum SharedError {
        #[error("Validation error: {message}")]
        Validation { message: String },

        #[error("Serialization error: {message}")]
        Serialization { message: String },

        #[error("Invalid format: {message}")]
        InvalidFormat { message: String },

        #[error("Internal error: {message}")]
        Internal { message: String },
    }

    impl From<anyhow::Error> for SharedError {
        fn from(err: anyhow::Error) -> Self {
            SharedError::Internal {
                message: err.to_string(),
            }
        }
    }

    /// Result type alias for shared operations
    pub type SharedResult<T> = Result<T, SharedError>;
}

pub use error::{SharedError, SharedResult};

/// Common constants used across Bajeti components
pub mod constants {
    /// Application display name
    pub const APP_NAME: &str = "Bajeti";

    /// Directory name used under the platform config directory
    pub const CONFIG_DIR_NAME: &str = "bajeti";

    /// Configuration file name
    pub const CONFIG_FILE_NAME: &str = "config.yml";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_available() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_error_display() {
        let err = SharedError::Validation {
            message: "bad input".to_string(),
        };
        assert_eq!(err.to_string(), "Validation error: bad input");
    }

    #[test]
    fn test_error_from_anyhow() {
        let err: SharedError = anyhow::anyhow!("wrapped").into();
        assert!(matches!(err, SharedError::Internal { .. }));
        assert!(err.to_string().contains("wrapped"));
    }
}
