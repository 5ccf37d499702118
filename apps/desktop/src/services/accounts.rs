//! In-memory account store
//!
//! Holds the accounts registered during this app session and answers the
//! sign-in, registration, password-reset and profile-update requests the
//! screens submit. Error display strings double as the user-facing messages,
//! so the screens can surface them verbatim.

use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::{debug, info};

/// A registered account.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub security_answer: String,
    pub registered_at: DateTime<Utc>,
}

/// Fields collected by the registration form.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub security_answer: String,
}

/// Fields a user can change on the profile screen.
#[derive(Debug, Clone)]
pub struct ProfileUpdate {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub security_answer: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegisterError {
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("Email already exists. Register using another email address")]
    EmailTaken,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResetError {
    #[error("No account matches that email and security answer")]
    NoMatch,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProfileError {
    #[error("Email already exists. Register using another email address")]
    EmailTaken,
    #[error("No such account")]
    NotFound,
}

/// Session-local account registry.
#[derive(Debug, Default)]
pub struct AccountStore {
    accounts: Vec<Account>,
}

impl AccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn find(&self, email: &str) -> Option<&Account> {
        self.accounts
            .iter()
            .find(|account| account.email.eq_ignore_ascii_case(email))
    }

    fn find_mut(&mut self, email: &str) -> Option<&mut Account> {
        self.accounts
            .iter_mut()
            .find(|account| account.email.eq_ignore_ascii_case(email))
    }

    /// Register a new account. The confirmation is checked first so a form
    /// that skipped client-side validation still gets the right message.
    pub fn register(&mut self, new_account: NewAccount) -> Result<Account, RegisterError> {
        if new_account.password != new_account.confirm_password {
            return Err(RegisterError::PasswordMismatch);
        }

        let email = new_account.email.trim().to_string();
        if self.find(&email).is_some() {
            return Err(RegisterError::EmailTaken);
        }

        let account = Account {
            first_name: new_account.first_name.trim().to_string(),
            last_name: new_account.last_name.trim().to_string(),
            email,
            password: new_account.password,
            security_answer: new_account.security_answer,
            registered_at: Utc::now(),
        };

        info!("Registered account for {}", account.email);
        self.accounts.push(account.clone());
        Ok(account)
    }

    /// Check a sign-in attempt.
    pub fn authenticate(&self, email: &str, password: &str) -> Result<Account, AuthError> {
        match self.find(email.trim()) {
            Some(account) if account.password == password => {
                debug!("Authenticated {}", account.email);
                Ok(account.clone())
            }
            _ => Err(AuthError::InvalidCredentials),
        }
    }

    /// Reset a password after verifying the security answer.
    pub fn reset_password(
        &mut self,
        email: &str,
        security_answer: &str,
        new_password: &str,
    ) -> Result<(), ResetError> {
        let account = self
            .find_mut(email.trim())
            .filter(|account| account.security_answer == security_answer)
            .ok_or(ResetError::NoMatch)?;

        account.password = new_password.to_string();
        info!("Password reset for {}", account.email);
        Ok(())
    }

    /// Apply profile changes to an existing account. Changing the email to
    /// one held by another account is rejected.
    pub fn update_profile(
        &mut self,
        current_email: &str,
        update: ProfileUpdate,
    ) -> Result<Account, ProfileError> {
        let new_email = update.email.trim().to_string();
        let email_taken = self
            .accounts
            .iter()
            .any(|account| {
                account.email.eq_ignore_ascii_case(&new_email)
                    && !account.email.eq_ignore_ascii_case(current_email)
            });
        if email_taken {
            return Err(ProfileError::EmailTaken);
        }

        let account = self
            .find_mut(current_email)
            .ok_or(ProfileError::NotFound)?;

        account.first_name = update.first_name.trim().to_string();
        account.last_name = update.last_name.trim().to_string();
        account.email = new_email;
        if !update.security_answer.is_empty() {
            account.security_answer = update.security_answer;
        }

        info!("Profile updated for {}", account.email);
        Ok(account.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn sample_registration() -> NewAccount {
        NewAccount {
            first_name: "Amina".to_string(),
            last_name: "Odhiambo".to_string(),
            email: "amina@example.com".to_string(),
            password: "hunter2".to_string(),
            confirm_password: "hunter2".to_string(),
            security_answer: "blue".to_string(),
        }
    }

    #[test]
    fn test_register_and_authenticate() {
        let mut store = AccountStore::new();
        store.register(sample_registration()).unwrap();

        let account = store.authenticate("amina@example.com", "hunter2").unwrap();
        assert_eq!(account.first_name, "Amina");
    }

    #[test]
    fn test_register_rejects_mismatched_passwords() {
        let mut store = AccountStore::new();
        let mut reg = sample_registration();
        reg.confirm_password = "other".to_string();

        let err = store.register(reg).unwrap_err();
        assert_eq!(err, RegisterError::PasswordMismatch);
        assert_eq!(err.to_string(), "Passwords do not match");
    }

    #[test]
    fn test_register_rejects_duplicate_email() {
        let mut store = AccountStore::new();
        store.register(sample_registration()).unwrap();

        let mut reg = sample_registration();
        reg.email = "AMINA@example.com".to_string();
        let err = store.register(reg).unwrap_err();
        assert_eq!(err, RegisterError::EmailTaken);
        assert_eq!(
            err.to_string(),
            "Email already exists. Register using another email address"
        );
    }

    #[test]
    fn test_authenticate_wrong_password() {
        let mut store = AccountStore::new();
        store.register(sample_registration()).unwrap();

        let err = store.authenticate("amina@example.com", "wrong").unwrap_err();
        assert_eq!(err.to_string(), "Invalid credentials");
    }

    #[test]
    fn test_authenticate_unknown_email() {
        let store = AccountStore::new();
        assert_matches!(
            store.authenticate("nobody@example.com", "pw"),
            Err(AuthError::InvalidCredentials)
        );
    }

    #[test]
    fn test_reset_password_requires_matching_answer() {
        let mut store = AccountStore::new();
        store.register(sample_registration()).unwrap();

        assert_matches!(
            store.reset_password("amina@example.com", "red", "newpass"),
            Err(ResetError::NoMatch)
        );

        store
            .reset_password("amina@example.com", "blue", "newpass")
            .unwrap();
        assert!(store.authenticate("amina@example.com", "newpass").is_ok());
        assert_matches!(
            store.authenticate("amina@example.com", "hunter2"),
            Err(AuthError::InvalidCredentials)
        );
    }

    #[test]
    fn test_update_profile_changes_fields() {
        let mut store = AccountStore::new();
        store.register(sample_registration()).unwrap();

        let updated = store
            .update_profile(
                "amina@example.com",
                ProfileUpdate {
                    first_name: "Amina".to_string(),
                    last_name: "Otieno".to_string(),
                    email: "amina.otieno@example.com".to_string(),
                    security_answer: String::new(),
                },
            )
            .unwrap();

        assert_eq!(updated.last_name, "Otieno");
        assert_eq!(updated.email, "amina.otieno@example.com");
        // An empty answer leaves the stored one untouched.
        assert_eq!(updated.security_answer, "blue");
    }

    #[test]
    fn test_update_profile_rejects_taken_email() {
        let mut store = AccountStore::new();
        store.register(sample_registration()).unwrap();

        let mut second = sample_registration();
        second.email = "ben@example.com".to_string();
        store.register(second).unwrap();

        let err = store
            .update_profile(
                "ben@example.com",
                ProfileUpdate {
                    first_name: "Ben".to_string(),
                    last_name: "K".to_string(),
                    email: "amina@example.com".to_string(),
                    security_answer: String::new(),
                },
            )
            .unwrap_err();
        assert_eq!(err, ProfileError::EmailTaken);
    }

    #[test]
    fn test_update_profile_keeping_own_email_is_allowed() {
        let mut store = AccountStore::new();
        store.register(sample_registration()).unwrap();

        let result = store.update_profile(
            "amina@example.com",
            ProfileUpdate {
                first_name: "Amina".to_string(),
                last_name: "Odhiambo".to_string(),
                email: "amina@example.com".to_string(),
                security_answer: "green".to_string(),
            },
        );
        assert!(result.is_ok());
        assert_eq!(result.unwrap().security_answer, "green");
    }
}
