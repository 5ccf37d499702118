//! Dialog Component Module
//!
//! Renders the currently active [`Dialog`] as a modal card over a dimmed
//! scrim. Clicks on the scrim outside the card emit `on_backdrop`, while
//! clicks on the card itself are swallowed by an inner mouse area so that
//! only genuine outside clicks dismiss the dialog.

use iced::{
    widget::{button, column, container, mouse_area, row, text, Space},
    Alignment, Element, Length,
};

use bajeti_shared::{Dialog, DialogKind};

use crate::ui::theme::{button_styles, container_styles, utils};

/// Fixed width of the dialog card
pub const DIALOG_WIDTH: f32 = 420.0;

/// Render a modal dialog filling the window.
///
/// `on_ok` and `on_cancel` are wired to the dialog buttons; `on_backdrop`
/// fires for clicks outside the card and `on_body` is a no-op message that
/// keeps card clicks from reaching the scrim.
pub fn render_dialog<'a, T, Message: Clone + 'a>(
    dialog: &'a Dialog<T>,
    on_ok: Message,
    on_cancel: Message,
    on_backdrop: Message,
    on_body: Message,
) -> Element<'a, Message> {
    let ok_button = button(text("OK").size(utils::typography::normal_text_size()))
        .on_press(on_ok)
        .padding(utils::button_padding())
        .style(button_styles::primary());

    let buttons = match dialog.kind {
        DialogKind::Alert => row![ok_button],
        DialogKind::Confirm => row![
            button(text("Cancel").size(utils::typography::normal_text_size()))
                .on_press(on_cancel)
                .padding(utils::button_padding())
                .style(button_styles::secondary()),
            ok_button,
        ],
    }
    .spacing(12);

    let card_content = column![
        text(&dialog.title).size(utils::typography::header_text_size()),
        text(&dialog.message).size(utils::typography::normal_text_size()),
        Space::with_height(Length::Fixed(8.0)),
        container(buttons).width(Length::Fill).center_x(),
    ]
    .spacing(utils::standard_spacing())
    .align_items(Alignment::Center);

    let card = container(card_content)
        .padding(utils::dialog_padding())
        .width(Length::Fixed(DIALOG_WIDTH))
        .style(container_styles::card());

    let backdrop = container(mouse_area(card).on_press(on_body))
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x()
        .center_y()
        .style(container_styles::backdrop());

    mouse_area(backdrop).on_press(on_backdrop).into()
}
