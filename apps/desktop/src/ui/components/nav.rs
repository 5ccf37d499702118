//! Navigation Drawer Component
//!
//! The slide-out menu opened from the dashboard header. It renders as a
//! fixed-width panel on the left with a dimmed backdrop covering the rest
//! of the window; clicking the backdrop closes the drawer.

use iced::{
    widget::{button, column, container, mouse_area, row, svg, text, Space},
    Alignment, Element, Length,
};

use crate::ui::theme::{self, button_styles, container_styles, utils};

/// Width of the open navigation drawer panel
pub const NAV_DRAWER_WIDTH: f32 = 250.0;

fn nav_link<'a, Message: Clone + 'a>(label: &'a str, on_press: Message) -> Element<'a, Message> {
    button(text(label).size(utils::typography::normal_text_size()))
        .on_press(on_press)
        .padding([10, 16])
        .width(Length::Fill)
        .style(button_styles::nav_link())
        .into()
}

/// Render the open navigation drawer over a dimmed backdrop.
pub fn render_nav_drawer<'a, Message: Clone + 'a>(
    on_dashboard: Message,
    on_profile: Message,
    on_logout: Message,
    on_close: Message,
) -> Element<'a, Message> {
    let header = row![
        svg(theme::bajeti_logo())
            .width(Length::Fixed(28.0))
            .height(Length::Fixed(28.0)),
        text("Bajeti").size(utils::typography::header_text_size()),
        Space::with_width(Length::Fill),
        button(
            svg(theme::xmark_icon())
                .width(Length::Fixed(16.0))
                .height(Length::Fixed(16.0)),
        )
        .on_press(on_close.clone())
        .padding(utils::toast_dismiss_padding())
        .style(button_styles::toast_close()),
    ]
    .spacing(10)
    .align_items(Alignment::Center);

    let links = column![
        header,
        Space::with_height(Length::Fixed(20.0)),
        nav_link("Dashboard", on_dashboard),
        nav_link("Profile", on_profile),
        nav_link("Logout", on_logout),
    ]
    .spacing(6);

    let panel = container(links)
        .width(Length::Fixed(NAV_DRAWER_WIDTH))
        .height(Length::Fill)
        .padding(utils::main_content_padding())
        .style(container_styles::nav_drawer());

    let backdrop = mouse_area(
        container(Space::new(Length::Fill, Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(container_styles::backdrop()),
    )
    .on_press(on_close);

    row![panel, backdrop].into()
}
