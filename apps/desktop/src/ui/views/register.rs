//! Register View
//!
//! The account creation screen: name, email, password plus confirmation
//! with live match feedback, and the security answer used for password
//! recovery. A mismatch blocks submission and the mismatch message is
//! rendered in red under the confirm field.

use iced::{
    widget::{button, column, container, row, scrollable, text, text_input, Space},
    Alignment, Command, Element, Length,
};
use tracing::debug;

use bajeti_shared::{is_valid_email, PasswordMatch, SubmitGuard, VisibilityToggle};

use crate::services::NewAccount;
use crate::ui::theme::{
    self, alerts::AlertMessage, button_styles, text_input_styles, utils, ERROR_RED, SUCCESS_GREEN,
};
use crate::ui::{components::submit_button, views::render_form_card};

/// Messages for the register screen
#[derive(Debug, Clone)]
pub enum RegisterMessage {
    FirstNameChanged(String),
    LastNameChanged(String),
    EmailChanged(String),
    PasswordChanged(String),
    ConfirmPasswordChanged(String),
    SecurityAnswerChanged(String),
    TogglePasswordVisibility,
    FocusField(&'static str),
    SubmitPressed,
    BackToLoginPressed,
    DismissError,
}

/// Per-field invalid flags, set on a blocked submit
#[derive(Debug, Clone, Copy, Default)]
struct RegisterFieldErrors {
    first_name: bool,
    last_name: bool,
    email: bool,
    security_answer: bool,
    password: bool,
}

/// Register screen state
#[derive(Debug, Default)]
pub struct RegisterView {
    first_name: String,
    last_name: String,
    email: String,
    password: String,
    confirm_password: String,
    security_answer: String,
    show_password: VisibilityToggle,
    errors: RegisterFieldErrors,
    error: Option<AlertMessage>,
    guard: SubmitGuard,
    submission: Option<NewAccount>,
}

impl RegisterView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, message: RegisterMessage) -> Command<RegisterMessage> {
        match message {
            RegisterMessage::FirstNameChanged(value) => {
                self.first_name = value;
                self.errors.first_name = false;
                Command::none()
            }

            RegisterMessage::LastNameChanged(value) => {
                self.last_name = value;
                self.errors.last_name = false;
                Command::none()
            }

            RegisterMessage::EmailChanged(value) => {
                self.email = value;
                self.errors.email = false;
                Command::none()
            }

            RegisterMessage::PasswordChanged(value) => {
                self.password = value;
                self.errors.password = false;
                Command::none()
            }

            RegisterMessage::ConfirmPasswordChanged(value) => {
                self.confirm_password = value;
                Command::none()
            }

            RegisterMessage::SecurityAnswerChanged(value) => {
                self.security_answer = value;
                self.errors.security_answer = false;
                Command::none()
            }

            RegisterMessage::TogglePasswordVisibility => {
                self.show_password.toggle();
                Command::none()
            }

            RegisterMessage::FocusField(id) => text_input::focus(text_input::Id::new(id)),

            RegisterMessage::SubmitPressed => {
                self.errors = RegisterFieldErrors {
                    first_name: self.first_name.trim().is_empty(),
                    last_name: self.last_name.trim().is_empty(),
                    email: self.email.trim().is_empty()
                        || !is_valid_email(self.email.trim()),
                    security_answer: self.security_answer.trim().is_empty(),
                    password: self.password.is_empty(),
                };

                // A mismatch blocks the post; the red line under the
                // confirm field already explains why.
                let match_state = self.match_state();
                if self.has_field_errors() || !match_state.is_match() {
                    debug!("Register submit blocked by validation");
                    return Command::none();
                }

                if self.guard.begin() {
                    self.error = None;
                    self.submission = Some(NewAccount {
                        first_name: self.first_name.clone(),
                        last_name: self.last_name.clone(),
                        email: self.email.trim().to_string(),
                        password: self.password.clone(),
                        confirm_password: self.confirm_password.clone(),
                        security_answer: self.security_answer.trim().to_string(),
                    });
                }
                Command::none()
            }

            RegisterMessage::DismissError => {
                self.error = None;
                Command::none()
            }

            RegisterMessage::BackToLoginPressed => Command::none(),
        }
    }

    pub fn take_submission(&mut self) -> Option<NewAccount> {
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

    fn has_field_errors(&self) -> bool {
        self.errors.first_name
            || self.errors.last_name
            || self.errors.email
            || self.errors.security_answer
            || self.errors.password
    }

    fn match_state(&self) -> PasswordMatch {
        PasswordMatch::check(&self.password, &self.confirm_password)
    }

    fn field_style(&self, invalid: bool) -> iced::theme::TextInput {
        if invalid {
            text_input_styles::invalid()
        } else {
            iced::theme::TextInput::Default
        }
    }

    fn confirm_style(&self) -> iced::theme::TextInput {
        match self.match_state() {
            PasswordMatch::Empty => iced::theme::TextInput::Default,
            PasswordMatch::Match => text_input_styles::valid(),
            PasswordMatch::Mismatch => text_input_styles::invalid(),
        }
    }

    fn match_feedback(&self) -> Element<'_, RegisterMessage> {
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

    pub fn view(&self) -> Element<'_, RegisterMessage> {
        let mut form = column![
            text("Create your account").size(utils::typography::extra_large_text_size()),
            text("Budgeting starts with a free account")
                .size(utils::typography::normal_text_size()),
        ]
        .spacing(10)
        .align_items(Alignment::Center);

        if let Some(error) = &self.error {
            form = form.push(theme::alerts::render_alert(
                error,
                Some(RegisterMessage::DismissError),
            ));
        }

        let name_row = row![
            text_input("First name", &self.first_name)
                .on_input(RegisterMessage::FirstNameChanged)
                .padding(utils::text_input_padding())
                .style(self.field_style(self.errors.first_name))
                .id(text_input::Id::new("first_name"))
                .on_submit(RegisterMessage::FocusField("last_name")),
            text_input("Last name", &self.last_name)
                .on_input(RegisterMessage::LastNameChanged)
                .padding(utils::text_input_padding())
                .style(self.field_style(self.errors.last_name))
                .id(text_input::Id::new("last_name"))
                .on_submit(RegisterMessage::FocusField("register_email")),
        ]
        .spacing(10);

        form = form
            .push(Space::with_height(Length::Fixed(5.0)))
            .push(name_row)
            .push(
                text_input("Email address", &self.email)
                    .on_input(RegisterMessage::EmailChanged)
                    .padding(utils::text_input_padding())
                    .style(self.field_style(self.errors.email))
                    .id(text_input::Id::new("register_email"))
                    .on_submit(RegisterMessage::FocusField("register_password")),
            )
            .push(
                column![
                    row![
                        text("Password").size(utils::typography::normal_text_size()),
                        Space::with_width(Length::Fill),
                        utils::password_visibility_toggle(
                            self.show_password.is_visible(),
                            RegisterMessage::TogglePasswordVisibility,
                        ),
                    ]
                    .align_items(Alignment::Center),
                    text_input("Password", &self.password)
                        .on_input(RegisterMessage::PasswordChanged)
                        .secure(self.show_password.secure())
                        .padding(utils::text_input_padding())
                        .style(self.field_style(self.errors.password))
                        .id(text_input::Id::new("register_password"))
                        .on_submit(RegisterMessage::FocusField("register_confirm")),
                    text_input("Confirm password", &self.confirm_password)
                        .on_input(RegisterMessage::ConfirmPasswordChanged)
                        .secure(self.show_password.secure())
                        .padding(utils::text_input_padding())
                        .style(self.confirm_style())
                        .id(text_input::Id::new("register_confirm"))
                        .on_submit(RegisterMessage::FocusField("security_answer")),
                    self.match_feedback(),
                ]
                .spacing(5),
            )
            .push(
                text_input(
                    "Security answer (what is your favorite color?)",
                    &self.security_answer,
                )
                .on_input(RegisterMessage::SecurityAnswerChanged)
                .padding(utils::text_input_padding())
                .style(self.field_style(self.errors.security_answer))
                .id(text_input::Id::new("security_answer"))
                .on_submit(RegisterMessage::SubmitPressed),
            )
            .push(submit_button(
                "Register",
                &self.guard,
                RegisterMessage::SubmitPressed,
            ))
            .push(
                button(
                    text("Already have an account? Login")
                        .size(utils::typography::small_text_size()),
                )
                .on_press(RegisterMessage::BackToLoginPressed)
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

    fn filled_view() -> RegisterView {
        let mut view = RegisterView::new();
        let _ = view.update(RegisterMessage::FirstNameChanged("Amina".to_string()));
        let _ = view.update(RegisterMessage::LastNameChanged("Odhiambo".to_string()));
        let _ = view.update(RegisterMessage::EmailChanged("amina@example.com".to_string()));
        let _ = view.update(RegisterMessage::PasswordChanged("hunter2".to_string()));
        let _ = view.update(RegisterMessage::ConfirmPasswordChanged("hunter2".to_string()));
        let _ = view.update(RegisterMessage::SecurityAnswerChanged("blue".to_string()));
        view
    }

    #[test]
    fn test_live_match_feedback_states() {
        let mut view = RegisterView::new();
        let _ = view.update(RegisterMessage::PasswordChanged("secret".to_string()));
        assert_matches!(view.match_state(), PasswordMatch::Empty);

        let _ = view.update(RegisterMessage::ConfirmPasswordChanged("sec".to_string()));
        assert_matches!(view.match_state(), PasswordMatch::Mismatch);

        let _ = view.update(RegisterMessage::ConfirmPasswordChanged("secret".to_string()));
        assert_matches!(view.match_state(), PasswordMatch::Match);
    }

    #[test]
    fn test_valid_submit_releases_registration() {
        let mut view = filled_view();
        let _ = view.update(RegisterMessage::SubmitPressed);

        let submission = view.take_submission().unwrap();
        assert_eq!(submission.email, "amina@example.com");
        assert_eq!(submission.confirm_password, "hunter2");
    }

    #[test]
    fn test_mismatch_blocks_submit() {
        let mut view = filled_view();
        let _ = view.update(RegisterMessage::ConfirmPasswordChanged("other".to_string()));
        let _ = view.update(RegisterMessage::SubmitPressed);

        assert!(view.take_submission().is_none());
        assert!(view.match_state().is_mismatch());
    }

    #[test]
    fn test_missing_fields_block_submit() {
        let mut view = filled_view();
        let _ = view.update(RegisterMessage::FirstNameChanged("   ".to_string()));
        let _ = view.update(RegisterMessage::SubmitPressed);

        assert!(view.take_submission().is_none());
        assert!(view.errors.first_name);
    }

    #[test]
    fn test_visibility_toggle_round_trip() {
        let mut view = RegisterView::new();
        assert!(view.show_password.secure());

        let _ = view.update(RegisterMessage::TogglePasswordVisibility);
        assert!(!view.show_password.secure());

        let _ = view.update(RegisterMessage::TogglePasswordVisibility);
        assert!(view.show_password.secure());
    }

    #[test]
    fn test_server_rejection_shows_banner() {
        let mut view = filled_view();
        let _ = view.update(RegisterMessage::SubmitPressed);
        let _ = view.take_submission();

        view.submission_failed("Email already exists. Register using another email address");
        assert!(!view.wants_tick());
        assert!(view.error.is_some());
    }
}
