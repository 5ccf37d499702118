//! Submit Button Component
//!
//! A form submit button that shows an animated braille spinner and refuses
//! further presses while a [`SubmitGuard`] is in flight. The spinner frame
//! advances on the application's timer tick.

use iced::{
    widget::{button, text},
    Element,
};

use bajeti_shared::SubmitGuard;

use crate::ui::theme::{button_styles, utils};

/// A primary submit button tied to a submit guard.
///
/// While the guard is idle the button is pressable and shows `label`;
/// while a submission is in flight it renders disabled with the current
/// spinner frame prepended.
pub fn submit_button<'a, Message: Clone + 'a>(
    label: &str,
    guard: &SubmitGuard,
    on_press: Message,
) -> Element<'a, Message> {
    let caption = if guard.is_in_flight() {
        format!("{} {}", guard.frame(), label)
    } else {
        label.to_string()
    };

    let mut submit = button(text(caption).size(utils::typography::normal_text_size()))
        .padding(utils::button_padding())
        .style(button_styles::primary());

    // A button without an on_press handler renders in its disabled state,
    // which also drops any clicks made mid-submission.
    if !guard.is_in_flight() {
        submit = submit.on_press(on_press);
    }

    submit.into()
}
