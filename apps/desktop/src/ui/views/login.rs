//! Login View
//!
//! The sign-in screen: email and password fields, client-side required
//! checks, and an inline error banner for rejected credentials. Navigation
//! to the register and forgot-password screens is surfaced as messages the
//! application handles itself.

use iced::{
    widget::{button, column, container, row, svg, text, text_input, Space},
    Alignment, Command, Element, Length,
};
use tracing::debug;

use bajeti_shared::{is_valid_email, SubmitGuard};

use crate::ui::theme::{self, alerts::AlertMessage, button_styles, text_input_styles, utils};
use crate::ui::{components::submit_button, views::render_form_card};

/// Messages for the login screen
#[derive(Debug, Clone)]
pub enum LoginMessage {
    EmailChanged(String),
    PasswordChanged(String),
    FocusPassword,
    SubmitPressed,
    RegisterPressed,
    ForgotPasswordPressed,
    DismissError,
}

/// Credentials released by a validated submit
#[derive(Debug, Clone)]
pub struct LoginSubmission {
    pub email: String,
    pub password: String,
}

/// Login screen state
#[derive(Debug, Default)]
pub struct LoginView {
    email: String,
    password: String,
    email_invalid: bool,
    password_invalid: bool,
    error: Option<AlertMessage>,
    guard: SubmitGuard,
    submission: Option<LoginSubmission>,
}

impl LoginView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, message: LoginMessage) -> Command<LoginMessage> {
        match message {
            LoginMessage::EmailChanged(email) => {
                self.email = email;
                self.email_invalid = false;
                Command::none()
            }

            LoginMessage::PasswordChanged(password) => {
                self.password = password;
                self.password_invalid = false;
                Command::none()
            }

            LoginMessage::FocusPassword => text_input::focus(text_input::Id::new("password")),

            LoginMessage::SubmitPressed => {
                self.email_invalid =
                    self.email.trim().is_empty() || !is_valid_email(self.email.trim());
                self.password_invalid = self.password.is_empty();

                if self.email_invalid || self.password_invalid {
                    debug!("Login submit blocked by field validation");
                    return Command::none();
                }

                if self.guard.begin() {
                    self.error = None;
                    self.submission = Some(LoginSubmission {
                        email: self.email.trim().to_string(),
                        password: self.password.clone(),
                    });
                }
                Command::none()
            }

            LoginMessage::DismissError => {
                self.error = None;
                Command::none()
            }

            // Navigation intents are handled by the application
            LoginMessage::RegisterPressed | LoginMessage::ForgotPasswordPressed => Command::none(),
        }
    }

    /// Take the credentials of a validated submit, if one is pending
    pub fn take_submission(&mut self) -> Option<LoginSubmission> {
        self.submission.take()
    }

    /// Report a rejected sign-in back to the form
    pub fn submission_failed(&mut self, message: &str) {
        self.guard.finish();
        self.error = Some(AlertMessage::error(message));
    }

    /// Advance the spinner while a submission is in flight
    pub fn tick(&mut self) {
        self.guard.advance();
    }

    pub fn wants_tick(&self) -> bool {
        self.guard.is_in_flight()
    }

    fn email_style(&self) -> iced::theme::TextInput {
        if self.email_invalid {
            text_input_styles::invalid()
        } else {
            iced::theme::TextInput::Default
        }
    }

    fn password_style(&self) -> iced::theme::TextInput {
        if self.password_invalid {
            text_input_styles::invalid()
        } else {
            iced::theme::TextInput::Default
        }
    }

    pub fn view(&self) -> Element<'_, LoginMessage> {
        let mut form = column![
            svg(theme::bajeti_logo())
                .width(Length::Fixed(64.0))
                .height(Length::Fixed(64.0)),
            text("Welcome back").size(utils::typography::extra_large_text_size()),
            text("Sign in to manage your budget").size(utils::typography::normal_text_size()),
        ]
        .spacing(10)
        .align_items(Alignment::Center);

        if let Some(error) = &self.error {
            form = form.push(theme::alerts::render_alert(
                error,
                Some(LoginMessage::DismissError),
            ));
        }

        form = form
            .push(Space::with_height(Length::Fixed(10.0)))
            .push(
                text_input("Email address", &self.email)
                    .on_input(LoginMessage::EmailChanged)
                    .width(Length::Fill)
                    .padding(utils::text_input_padding())
                    .style(self.email_style())
                    .id(text_input::Id::new("email"))
                    .on_submit(LoginMessage::FocusPassword),
            )
            .push(
                text_input("Password", &self.password)
                    .on_input(LoginMessage::PasswordChanged)
                    .secure(true)
                    .width(Length::Fill)
                    .padding(utils::text_input_padding())
                    .style(self.password_style())
                    .id(text_input::Id::new("password"))
                    .on_submit(LoginMessage::SubmitPressed),
            )
            .push(submit_button("Login", &self.guard, LoginMessage::SubmitPressed))
            .push(
                row![
                    button(text("Create an account").size(utils::typography::small_text_size()))
                        .on_press(LoginMessage::RegisterPressed)
                        .padding(utils::small_button_padding())
                        .style(button_styles::nav_link()),
                    Space::with_width(Length::Fill),
                    button(text("Forgot password?").size(utils::typography::small_text_size()))
                        .on_press(LoginMessage::ForgotPasswordPressed)
                        .padding(utils::small_button_padding())
                        .style(button_styles::nav_link()),
                ]
                .align_items(Alignment::Center),
            );

        container(render_form_card(form.spacing(15).into()))
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x()
            .center_y()
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_view() -> LoginView {
        let mut view = LoginView::new();
        let _ = view.update(LoginMessage::EmailChanged("user@example.com".to_string()));
        let _ = view.update(LoginMessage::PasswordChanged("hunter2".to_string()));
        view
    }

    #[test]
    fn test_valid_submit_releases_credentials() {
        let mut view = filled_view();
        let _ = view.update(LoginMessage::SubmitPressed);

        let submission = view.take_submission().unwrap();
        assert_eq!(submission.email, "user@example.com");
        assert_eq!(submission.password, "hunter2");
        assert!(view.wants_tick());
    }

    #[test]
    fn test_empty_fields_block_submit() {
        let mut view = LoginView::new();
        let _ = view.update(LoginMessage::SubmitPressed);

        assert!(view.take_submission().is_none());
        assert!(view.email_invalid);
        assert!(view.password_invalid);
        assert!(!view.wants_tick());
    }

    #[test]
    fn test_malformed_email_blocks_submit() {
        let mut view = filled_view();
        let _ = view.update(LoginMessage::EmailChanged("not-an-email".to_string()));
        let _ = view.update(LoginMessage::SubmitPressed);

        assert!(view.take_submission().is_none());
        assert!(view.email_invalid);
    }

    #[test]
    fn test_double_submit_releases_once() {
        let mut view = filled_view();
        let _ = view.update(LoginMessage::SubmitPressed);
        assert!(view.take_submission().is_some());

        // Second press while in flight is swallowed by the guard
        let _ = view.update(LoginMessage::SubmitPressed);
        assert!(view.take_submission().is_none());
    }

    #[test]
    fn test_failed_submission_rearms_form() {
        let mut view = filled_view();
        let _ = view.update(LoginMessage::SubmitPressed);
        let _ = view.take_submission();

        view.submission_failed("Invalid credentials");
        assert!(!view.wants_tick());
        assert_eq!(view.error.as_ref().unwrap().message, "Invalid credentials");

        // The form can submit again after a failure
        let _ = view.update(LoginMessage::SubmitPressed);
        assert!(view.take_submission().is_some());
    }
}
