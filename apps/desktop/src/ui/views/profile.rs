//! Profile View
//!
//! Lets a signed-in user edit their name, email address, and security
//! answer. The security answer field has its own visibility toggle and an
//! empty answer keeps the stored one. Saving routes through the store so
//! an email collision is reported back inline.

use iced::{
    widget::{button, column, container, row, scrollable, text, text_input, Space},
    Alignment, Command, Element, Length,
};
use tracing::debug;

use bajeti_shared::{is_valid_email, SubmitGuard, VisibilityToggle};

use crate::services::{Account, ProfileUpdate};
use crate::ui::theme::{self, alerts::AlertMessage, button_styles, text_input_styles, utils};
use crate::ui::{components::submit_button, views::render_form_card};

/// Messages for the profile screen
#[derive(Debug, Clone)]
pub enum ProfileMessage {
    FirstNameChanged(String),
    LastNameChanged(String),
    EmailChanged(String),
    SecurityAnswerChanged(String),
    ToggleAnswerVisibility,
    FocusField(&'static str),
    SubmitPressed,
    BackPressed,
    DismissError,
}

/// Profile screen state
#[derive(Debug)]
pub struct ProfileView {
    first_name: String,
    last_name: String,
    email: String,
    security_answer: String,
    show_answer: VisibilityToggle,
    first_name_invalid: bool,
    last_name_invalid: bool,
    email_invalid: bool,
    error: Option<AlertMessage>,
    guard: SubmitGuard,
    submission: Option<ProfileUpdate>,
}

impl ProfileView {
    /// Build the form prefilled from the signed-in account
    pub fn new(account: &Account) -> Self {
        Self {
            first_name: account.first_name.clone(),
            last_name: account.last_name.clone(),
            email: account.email.clone(),
            security_answer: String::new(),
            show_answer: VisibilityToggle::hidden(),
            first_name_invalid: false,
            last_name_invalid: false,
            email_invalid: false,
            error: None,
            guard: SubmitGuard::new(),
            submission: None,
        }
    }

    pub fn update(&mut self, message: ProfileMessage) -> Command<ProfileMessage> {
        match message {
            ProfileMessage::FirstNameChanged(value) => {
                self.first_name = value;
                self.first_name_invalid = false;
                Command::none()
            }

            ProfileMessage::LastNameChanged(value) => {
                self.last_name = value;
                self.last_name_invalid = false;
                Command::none()
            }

            ProfileMessage::EmailChanged(value) => {
                self.email = value;
                self.email_invalid = false;
                Command::none()
            }

            ProfileMessage::SecurityAnswerChanged(value) => {
                self.security_answer = value;
                Command::none()
            }

            ProfileMessage::ToggleAnswerVisibility => {
                self.show_answer.toggle();
                Command::none()
            }

            ProfileMessage::FocusField(id) => text_input::focus(text_input::Id::new(id)),

            ProfileMessage::SubmitPressed => {
                self.first_name_invalid = self.first_name.trim().is_empty();
                self.last_name_invalid = self.last_name.trim().is_empty();
                self.email_invalid =
                    self.email.trim().is_empty() || !is_valid_email(self.email.trim());

                if self.first_name_invalid || self.last_name_invalid || self.email_invalid {
                    debug!("Profile submit blocked by validation");
                    return Command::none();
                }

                if self.guard.begin() {
                    self.error = None;
                    self.submission = Some(ProfileUpdate {
                        first_name: self.first_name.clone(),
                        last_name: self.last_name.clone(),
                        email: self.email.trim().to_string(),
                        security_answer: self.security_answer.trim().to_string(),
                    });
                }
                Command::none()
            }

            ProfileMessage::DismissError => {
                self.error = None;
                Command::none()
            }

            ProfileMessage::BackPressed => Command::none(),
        }
    }

    pub fn take_submission(&mut self) -> Option<ProfileUpdate> {
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

    fn field_style(&self, invalid: bool) -> iced::theme::TextInput {
        if invalid {
            text_input_styles::invalid()
        } else {
            iced::theme::TextInput::Default
        }
    }

    pub fn view(&self) -> Element<'_, ProfileMessage> {
        let mut form = column![
            text("Your profile").size(utils::typography::extra_large_text_size()),
            text("Update your details below").size(utils::typography::normal_text_size()),
        ]
        .spacing(10)
        .align_items(Alignment::Center);

        if let Some(error) = &self.error {
            form = form.push(theme::alerts::render_alert(
                error,
                Some(ProfileMessage::DismissError),
            ));
        }

        form = form
            .push(Space::with_height(Length::Fixed(5.0)))
            .push(
                row![
                    text_input("First name", &self.first_name)
                        .on_input(ProfileMessage::FirstNameChanged)
                        .padding(utils::text_input_padding())
                        .style(self.field_style(self.first_name_invalid))
                        .id(text_input::Id::new("profile_first_name"))
                        .on_submit(ProfileMessage::FocusField("profile_last_name")),
                    text_input("Last name", &self.last_name)
                        .on_input(ProfileMessage::LastNameChanged)
                        .padding(utils::text_input_padding())
                        .style(self.field_style(self.last_name_invalid))
                        .id(text_input::Id::new("profile_last_name"))
                        .on_submit(ProfileMessage::FocusField("profile_email")),
                ]
                .spacing(10),
            )
            .push(
                text_input("Email address", &self.email)
                    .on_input(ProfileMessage::EmailChanged)
                    .padding(utils::text_input_padding())
                    .style(self.field_style(self.email_invalid))
                    .id(text_input::Id::new("profile_email"))
                    .on_submit(ProfileMessage::FocusField("profile_answer")),
            )
            .push(
                column![
                    row![
                        text("Security answer").size(utils::typography::normal_text_size()),
                        Space::with_width(Length::Fill),
                        utils::password_visibility_toggle(
                            self.show_answer.is_visible(),
                            ProfileMessage::ToggleAnswerVisibility,
                        ),
                    ]
                    .align_items(Alignment::Center),
                    text_input("Leave blank to keep your current answer", &self.security_answer)
                        .on_input(ProfileMessage::SecurityAnswerChanged)
                        .secure(self.show_answer.secure())
                        .padding(utils::text_input_padding())
                        .id(text_input::Id::new("profile_answer"))
                        .on_submit(ProfileMessage::SubmitPressed),
                ]
                .spacing(5),
            )
            .push(
                row![
                    button(text("Back").size(utils::typography::normal_text_size()))
                        .on_press(ProfileMessage::BackPressed)
                        .padding(utils::button_padding())
                        .style(button_styles::secondary()),
                    Space::with_width(Length::Fill),
                    submit_button("Save Changes", &self.guard, ProfileMessage::SubmitPressed),
                ]
                .align_items(Alignment::Center),
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
