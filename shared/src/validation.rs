//! Form Validation
//!
//! Validation rules for the Bajeti account forms. The password-confirmation
//! check drives both the live feedback line under the confirm field and the
//! submit-time gate; the reset form additionally validates required fields
//! and reports per-field error flags so the UI can highlight each input.

use regex::Regex;

/// Feedback line shown when both password fields hold the same value.
pub const PASSWORDS_MATCH_MESSAGE: &str = "✅ Passwords match";

/// Feedback line shown when the password fields differ.
pub const PASSWORDS_MISMATCH_MESSAGE: &str = "❌ Passwords do not match";

/// Live state of the password confirmation pair.
///
/// The confirm field is compared byte-for-byte against the password field,
/// with no trimming. An empty confirm field is its own state so the UI can
/// clear the feedback line instead of flagging a half-filled form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordMatch {
    /// Confirm field is empty; show no feedback.
    Empty,
    /// Both fields hold the same value.
    Match,
    /// Fields differ.
    Mismatch,
}

impl PasswordMatch {
    /// Compare a password and its confirmation.
    pub fn check(password: &str, confirm: &str) -> Self {
        if confirm.is_empty() {
            PasswordMatch::Empty
        } else if password == confirm {
            PasswordMatch::Match
        } else {
            PasswordMatch::Mismatch
        }
    }

    /// The feedback line for this state. Empty string for [`PasswordMatch::Empty`].
    pub fn message(&self) -> &'static str {
        match self {
            PasswordMatch::Empty => "",
            PasswordMatch::Match => PASSWORDS_MATCH_MESSAGE,
            PasswordMatch::Mismatch => PASSWORDS_MISMATCH_MESSAGE,
        }
    }

    pub fn is_match(&self) -> bool {
        matches!(self, PasswordMatch::Match)
    }

    pub fn is_mismatch(&self) -> bool {
        matches!(self, PasswordMatch::Mismatch)
    }
}

/// Per-field error flags for the password reset form.
///
/// A `true` flag means the field failed validation and should be rendered
/// in its invalid style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResetFormErrors {
    pub email: bool,
    pub security_answer: bool,
    pub new_password: bool,
    pub confirm_password: bool,
}

impl ResetFormErrors {
    /// Whether every field passed validation.
    pub fn is_valid(&self) -> bool {
        !(self.email || self.security_answer || self.new_password || self.confirm_password)
    }
}

/// Validate the password reset form.
///
/// Email, security answer and new password must be non-empty after trimming.
/// The confirmation must be non-empty and equal the new password exactly;
/// the equality check is untrimmed, matching what will be submitted.
pub fn validate_reset_form(
    email: &str,
    security_answer: &str,
    new_password: &str,
    confirm_password: &str,
) -> ResetFormErrors {
    ResetFormErrors {
        email: email.trim().is_empty(),
        security_answer: security_answer.trim().is_empty(),
        new_password: new_password.trim().is_empty(),
        confirm_password: confirm_password.trim().is_empty()
            || confirm_password != new_password,
    }
}

/// Check whether a string looks like a valid email address.
pub fn is_valid_email(email: &str) -> bool {
    let email_regex = Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap();
    email_regex.is_match(email) && email.len() <= 254
}
