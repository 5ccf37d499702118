//! Forgot Password View
//!
//! The password reset screen: email, security answer, and a new password
//! with confirmation. Both password fields share one visibility toggle,
//! the confirm field carries live match feedback, and the reset control
//! clears the whole form. Submission is blocked until every field
//! validates and the passwords match.

use iced::{
    widget::{button, column, container, row, scrollable, text, text_input, Space},
    Alignment, Command, Element, Length,
};
use tracing::debug;

use bajeti_shared::{
    is_valid_email, validate_reset_form, PasswordMatch, ResetFormErrors, SubmitGuard,
    VisibilityToggle,
};

use crate::ui::theme::{
    self, alerts::AlertMessage, button_styles, text_input_styles, utils, ERROR_RED, SUCCESS_GREEN,
};
use crate::ui::{components::submit_button, views::render_form_card};

/// Messages for the forgot-password screen
#[derive(Debug, Clone)]
pub enum ForgotPasswordMessage {
    EmailChanged(String),
    SecurityAnswerChanged(String),
    NewPasswordChanged(String),
    ConfirmPasswordChanged(String),
    ToggleVisibility,
    ResetPressed,
    FocusField(&'static str),
    SubmitPressed,
    BackToLoginPressed,
    DismissError,
}

/// Fields released by a validated reset submit
#[derive(Debug, Clone)]
pub struct ResetSubmission {
    pub email: String,
    pub security_answer: String,
    pub new_password: String,
}

/// Forgot-password screen state
#[derive(Debug, Default)]
pub struct ForgotPasswordView {
    email: String,
    security_answer: String,
    new_password: String,
    confirm_password: String,
    show_passwords: VisibilityToggle,
    errors: ResetFormErrors,
    error: Option<AlertMessage>,
    guard: SubmitGuard,
    submission: Option<ResetSubmission>,
}

impl ForgotPasswordView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, message: ForgotPasswordMessage) -> Command<ForgotPasswordMessage> {
        match message {
            ForgotPasswordMessage::EmailChanged(value) => {
                self.email = value;
                self.errors.email = false;
                Command::none()
            }

            ForgotPasswordMessage::SecurityAnswerChanged(value) => {
                self.security_answer = value;
                self.errors.security_answer = false;
                Command::none()
            }

            ForgotPasswordMessage::NewPasswordChanged(value) => {
                self.new_password = value;
                self.errors.new_password = false;
                Command::none()
            }

            ForgotPasswordMessage::ConfirmPasswordChanged(value) => {
                self.confirm_password = value;
                self.errors.confirm_password = false;
                Command::none()
            }

            ForgotPasswordMessage::ToggleVisibility => {
                // One control flips both password fields
                self.show_passwords.toggle();
                Command::none()
            }

            ForgotPasswordMessage::ResetPressed => {
                if !self.guard.is_in_flight() {
                    debug!("Reset form cleared");
                    self.clear_form();
                }
                Command::none()
            }

            ForgotPasswordMessage::FocusField(id) => text_input::focus(text_input::Id::new(id)),

            ForgotPasswordMessage::SubmitPressed => {
                self.errors = validate_reset_form(
                    &self.email,
                    &self.security_answer,
                    &self.new_password,
                    &self.confirm_password,
                );
                if !self.errors.email && !is_valid_email(self.email.trim()) {
                    self.errors.email = true;
                }

                if !self.errors.is_valid() {
                    debug!("Reset submit blocked by validation");
                    return Command::none();
                }

                if self.guard.begin() {
                    self.error = None;
                    self.submission = Some(ResetSubmission {
                        email: self.email.trim().to_string(),
                        security_answer: self.security_answer.trim().to_string(),
                        new_password: self.new_password.clone(),
                    });
                }
                Command::none()
            }

            ForgotPasswordMessage::DismissError => {
                self.error = None;
                Command::none()
            }

            ForgotPasswordMessage::BackToLoginPressed => Command::none(),
        }
    }

    fn clear_form(&mut self) {
        self.email.clear();
        self.security_answer.clear();
        self.new_password.clear();
        self.confirm_password.clear();
        self.errors = ResetFormErrors::default();
        self.error = None;
    }

    pub fn take_submission(&mut self) -> Option<ResetSubmission> {
        self.submission.take()
    }

    pub fn submission_failed(&mut self, message: &str) {
        self.guard.finish();
        self.error = Some(AlertMessage::error(message));
    }

    pub fn tick(&mut self) {
        self.guard.advance();
    }

    pub fn wants_tick(&self) -> bool {
        self.guard.is_in_flight()
    }

    fn match_state(&self) -> PasswordMatch {
        PasswordMatch::check(&self.new_password, &self.confirm_password)
    }

    fn field_style(&self, invalid: bool) -> iced::theme::TextInput {
        if invalid {
            text_input_styles::invalid()
        } else {
            iced::theme::TextInput::Default
        }
    }

    fn confirm_style(&self) -> iced::theme::TextInput {
        if self.errors.confirm_password {
            return text_input_styles::invalid();
        }
        match self.match_state() {
            PasswordMatch::Empty => iced::theme::TextInput::Default,
            PasswordMatch::Match => text_input_styles::valid(),
            PasswordMatch::Mismatch => text_input_styles::invalid(),
        }
    }

    fn match_feedback(&self) -> Element<'_, ForgotPasswordMessage> {
        let state = self.match_state();
        match state {
            PasswordMatch::Empty => text("").into(),
            PasswordMatch::Match => text(state.message())
                .size(utils::typography::small_text_size())
                .style(iced::theme::Text::Color(SUCCESS_GREEN))
                .into(),
            PasswordMatch::Mismatch => text(state.message())
                .size(utils::typography::small_text_size())
                .style(iced::theme::Text::Color(ERROR_RED))
                .into(),
        }
    }

    pub fn view(&self) -> Element<'_, ForgotPasswordMessage> {
        let mut form = column![
            text("Reset your password").size(utils::typography::extra_large_text_size()),
            text("Answer your security question to choose a new password")
                .size(utils::typography::normal_text_size()),
        ]
        .spacing(10)
        .align_items(Alignment::Center);

        if let Some(error) = &self.error {
            form = form.push(theme::alerts::render_alert(
                error,
                Some(ForgotPasswordMessage::DismissError),
            ));
        }

        form = form
            .push(Space::with_height(Length::Fixed(5.0)))
            .push(
                text_input("Email address", &self.email)
                    .on_input(ForgotPasswordMessage::EmailChanged)
                    .padding(utils::text_input_padding())
                    .style(self.field_style(self.errors.email))
                    .id(text_input::Id::new("reset_email"))
                    .on_submit(ForgotPasswordMessage::FocusField("reset_answer")),
            )
            .push(
                text_input(
                    "Security answer (what is your favorite color?)",
                    &self.security_answer,
                )
                .on_input(ForgotPasswordMessage::SecurityAnswerChanged)
                .padding(utils::text_input_padding())
                .style(self.field_style(self.errors.security_answer))
                .id(text_input::Id::new("reset_answer"))
                .on_submit(ForgotPasswordMessage::FocusField("new_password")),
            )
            .push(
                column![
                    row![
                        text("New password").size(utils::typography::normal_text_size()),
                        Space::with_width(Length::Fill),
                        utils::password_visibility_toggle(
                            self.show_passwords.is_visible(),
                            ForgotPasswordMessage::ToggleVisibility,
                        ),
                    ]
                    .align_items(Alignment::Center),
                    text_input("New password", &self.new_password)
                        .on_input(ForgotPasswordMessage::NewPasswordChanged)
                        .secure(self.show_passwords.secure())
                        .padding(utils::text_input_padding())
                        .style(self.field_style(self.errors.new_password))
                        .id(text_input::Id::new("new_password"))
                        .on_submit(ForgotPasswordMessage::FocusField("confirm_password")),
                    text_input("Confirm new password", &self.confirm_password)
                        .on_input(ForgotPasswordMessage::ConfirmPasswordChanged)
                        .secure(self.show_passwords.secure())
                        .padding(utils::text_input_padding())
                        .style(self.confirm_style())
                        .id(text_input::Id::new("confirm_password"))
                        .on_submit(ForgotPasswordMessage::SubmitPressed),
                    self.match_feedback(),
                ]
                .spacing(5),
            )
            .push(
                row![
                    button(text("Reset").size(utils::typography::normal_text_size()))
                        .on_press(ForgotPasswordMessage::ResetPressed)
                        .padding(utils::button_padding())
                        .style(button_styles::secondary()),
                    Space::with_width(Length::Fill),
                    submit_button(
                        "Change Password",
                        &self.guard,
                        ForgotPasswordMessage::SubmitPressed,
                    ),
                ]
                .align_items(Alignment::Center),
            )
            .push(
                button(text("Back to login").size(utils::typography::small_text_size()))
                    .on_press(ForgotPasswordMessage::BackToLoginPressed)
                    .padding(utils::small_button_padding())
                    .style(button_styles::nav_link()),
            );

        scrollable(
            container(render_form_card(form.spacing(15).into()))
                .width(Length::Fill)
                .padding([40, 0])
                .center_x(),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn filled_view() -> ForgotPasswordView {
        let mut view = ForgotPasswordView::new();
        let _ = view.update(ForgotPasswordMessage::EmailChanged(
            "amina@example.com".to_string(),
        ));
        let _ = view.update(ForgotPasswordMessage::SecurityAnswerChanged("blue".to_string()));
        let _ = view.update(ForgotPasswordMessage::NewPasswordChanged("newpass".to_string()));
        let _ = view.update(ForgotPasswordMessage::ConfirmPasswordChanged(
            "newpass".to_string(),
        ));
        view
    }

    #[test]
    fn test_valid_submit_releases_reset() {
        let mut view = filled_view();
        let _ = view.update(ForgotPasswordMessage::SubmitPressed);

        let submission = view.take_submission().unwrap();
        assert_eq!(submission.email, "amina@example.com");
        assert_eq!(submission.new_password, "newpass");
        assert!(view.wants_tick());
    }

    #[test]
    fn test_mismatch_blocks_submit_and_flags_confirm() {
        let mut view = filled_view();
        let _ = view.update(ForgotPasswordMessage::ConfirmPasswordChanged(
            "different".to_string(),
        ));
        let _ = view.update(ForgotPasswordMessage::SubmitPressed);

        assert!(view.take_submission().is_none());
        assert!(view.errors.confirm_password);
        assert_matches!(view.match_state(), PasswordMatch::Mismatch);
    }

    #[test]
    fn test_reset_clears_every_field() {
        let mut view = filled_view();
        let _ = view.update(ForgotPasswordMessage::SubmitPressed);
        // Validation state and typed values all go back to defaults
        view.guard.finish();
        let _ = view.update(ForgotPasswordMessage::ResetPressed);

        assert!(view.email.is_empty());
        assert!(view.security_answer.is_empty());
        assert!(view.new_password.is_empty());
        assert!(view.confirm_password.is_empty());
        assert_eq!(view.errors, ResetFormErrors::default());
        assert_matches!(view.match_state(), PasswordMatch::Empty);
    }

    #[test]
    fn test_reset_ignored_while_in_flight() {
        let mut view = filled_view();
        let _ = view.update(ForgotPasswordMessage::SubmitPressed);
        assert!(view.wants_tick());

        let _ = view.update(ForgotPasswordMessage::ResetPressed);
        assert_eq!(view.email, "amina@example.com");
    }

    #[test]
    fn test_shared_toggle_covers_both_fields() {
        let mut view = ForgotPasswordView::new();
        assert!(view.show_passwords.secure());

        let _ = view.update(ForgotPasswordMessage::ToggleVisibility);
        assert!(!view.show_passwords.secure());

        let _ = view.update(ForgotPasswordMessage::ToggleVisibility);
        assert!(view.show_passwords.secure());
    }

    #[test]
    fn test_empty_confirm_blocks_submit() {
        let mut view = filled_view();
        let _ = view.update(ForgotPasswordMessage::ConfirmPasswordChanged(String::new()));
        let _ = view.update(ForgotPasswordMessage::SubmitPressed);

        assert!(view.take_submission().is_none());
        assert!(view.errors.confirm_password);
    }
}
