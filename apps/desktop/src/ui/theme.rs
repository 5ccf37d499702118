//! Bajeti Theme Configuration
//!
//! This module defines the brand palette and shared widget styles used across
//! the application, plus the embedded SVG icons. Styles target the iced 0.12
//! stylesheet API: each helper returns a theme handle wrapping a custom
//! `StyleSheet` implementation.

use iced::widget::{button, container, svg, text_input};
use iced::{Background, Border, Color, Shadow, Theme, Vector};

/// Embedded Bajeti logo SVG
pub const BAJETI_LOGO_SVG: &[u8] = include_bytes!("../../resources/icons/bajeti-logo.svg");

/// Embedded eye icon SVG for the amount visibility toggle
pub const EYE_ICON_SVG: &[u8] = include_bytes!("../../resources/icons/eye.svg");

/// Embedded eye-off icon SVG for the amount visibility toggle
pub const EYE_OFF_ICON_SVG: &[u8] = include_bytes!("../../resources/icons/eye-off.svg");

/// Embedded check icon SVG for success alerts
pub const CHECK_ICON_SVG: &[u8] = include_bytes!("../../resources/icons/check.svg");

/// Embedded error icon SVG for error alerts
pub const ERROR_ICON_SVG: &[u8] = include_bytes!("../../resources/icons/error.svg");

/// Embedded warning icon SVG for warning alerts
pub const WARNING_ICON_SVG: &[u8] = include_bytes!("../../resources/icons/warning.svg");

/// Embedded info icon SVG for informational alerts
pub const INFO_ICON_SVG: &[u8] = include_bytes!("../../resources/icons/info.svg");

/// Embedded xmark icon SVG for close/dismiss buttons
pub const XMARK_ICON_SVG: &[u8] = include_bytes!("../../resources/icons/xmark.svg");

/// Embedded menu icon SVG for the navigation drawer button
pub const MENU_ICON_SVG: &[u8] = include_bytes!("../../resources/icons/menu.svg");

/// Embedded grid icon SVG for the compact layout toggle
pub const GRID_ICON_SVG: &[u8] = include_bytes!("../../resources/icons/grid.svg");

/// Embedded list icon SVG for the comfortable layout toggle
pub const LIST_ICON_SVG: &[u8] = include_bytes!("../../resources/icons/list.svg");

// Icon helper functions
pub fn bajeti_logo() -> svg::Handle {
    svg::Handle::from_memory(BAJETI_LOGO_SVG)
}

pub fn eye_icon() -> svg::Handle {
    svg::Handle::from_memory(EYE_ICON_SVG)
}

pub fn eye_off_icon() -> svg::Handle {
    svg::Handle::from_memory(EYE_OFF_ICON_SVG)
}

pub fn check_icon() -> svg::Handle {
    svg::Handle::from_memory(CHECK_ICON_SVG)
}

pub fn error_icon() -> svg::Handle {
    svg::Handle::from_memory(ERROR_ICON_SVG)
}

pub fn warning_icon() -> svg::Handle {
    svg::Handle::from_memory(WARNING_ICON_SVG)
}

pub fn info_icon() -> svg::Handle {
    svg::Handle::from_memory(INFO_ICON_SVG)
}

pub fn xmark_icon() -> svg::Handle {
    svg::Handle::from_memory(XMARK_ICON_SVG)
}

pub fn menu_icon() -> svg::Handle {
    svg::Handle::from_memory(MENU_ICON_SVG)
}

pub fn grid_icon() -> svg::Handle {
    svg::Handle::from_memory(GRID_ICON_SVG)
}

pub fn list_icon() -> svg::Handle {
    svg::Handle::from_memory(LIST_ICON_SVG)
}

// Bajeti brand colors, lifted from the palette stylesheet
/// Logo purple (#8338ec)
pub const LOGO_PURPLE: Color = Color::from_rgb(0.514, 0.220, 0.925);

/// Logo purple hover state (slightly darker)
pub const LOGO_PURPLE_HOVER: Color = Color::from_rgb(0.45, 0.18, 0.82);

/// Logo purple pressed state (even darker)
pub const LOGO_PURPLE_PRESSED: Color = Color::from_rgb(0.40, 0.15, 0.75);

/// Logo purple with low opacity for hover backgrounds
pub const LOGO_PURPLE_LIGHT: Color = Color::from_rgba(0.514, 0.220, 0.925, 0.1);

/// Logo purple with medium opacity for pressed backgrounds
pub const LOGO_PURPLE_MEDIUM: Color = Color::from_rgba(0.514, 0.220, 0.925, 0.2);

/// Logo purple with very light opacity for subtle backgrounds
pub const LOGO_PURPLE_SUBTLE: Color = Color::from_rgba(0.514, 0.220, 0.925, 0.05);

/// Success/valid color (#06d6a0)
pub const SUCCESS_GREEN: Color = Color::from_rgb(0.024, 0.839, 0.627);

/// Success green with low opacity for alert backgrounds
pub const SUCCESS_GREEN_LIGHT: Color = Color::from_rgba(0.024, 0.839, 0.627, 0.12);

/// Error/invalid color (#ef476f)
pub const ERROR_RED: Color = Color::from_rgb(0.937, 0.278, 0.435);

/// Error red hover state (slightly darker)
pub const ERROR_RED_HOVER: Color = Color::from_rgb(0.85, 0.25, 0.40);

/// Error red pressed state (even darker)
pub const ERROR_RED_PRESSED: Color = Color::from_rgb(0.80, 0.22, 0.35);

/// Error red with low opacity for alert backgrounds
pub const ERROR_RED_LIGHT: Color = Color::from_rgba(0.937, 0.278, 0.435, 0.12);

/// Warning color (#fcbf49)
pub const WARNING_YELLOW: Color = Color::from_rgb(0.988, 0.749, 0.286);

/// Warning yellow with low opacity for alert backgrounds
pub const WARNING_YELLOW_LIGHT: Color = Color::from_rgba(0.988, 0.749, 0.286, 0.15);

/// Light background color (#F8F9FA)
pub const LIGHT_BACKGROUND: Color = Color::from_rgb(0.97, 0.976, 0.98);

/// Dark text color (#212529)
pub const DARK_TEXT: Color = Color::from_rgb(0.129, 0.145, 0.161);

/// White color constant
pub const WHITE: Color = Color::WHITE;

/// Transparent color constant
pub const TRANSPARENT: Color = Color::TRANSPARENT;

/// Disabled background color (light gray)
pub const DISABLED_BACKGROUND: Color = Color::from_rgb(0.8, 0.8, 0.8);

/// Disabled text color (medium gray)
pub const DISABLED_TEXT: Color = Color::from_rgb(0.5, 0.5, 0.5);

/// Disabled border color (darker gray)
pub const DISABLED_BORDER: Color = Color::from_rgb(0.7, 0.7, 0.7);

/// Standard shadow color (black with low opacity)
pub const SHADOW_COLOR: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.1);

/// Scrim color for dialog and drawer backdrops
pub const BACKDROP_COLOR: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.45);

/// Light gray text color for help text
pub const LIGHT_GRAY_TEXT: Color = Color::from_rgb(0.6, 0.6, 0.6);

/// Light gray border color for text inputs
pub const LIGHT_GRAY_BORDER: Color = Color::from_rgb(0.8, 0.8, 0.8);

/// Medium gray color for icons and placeholders
pub const MEDIUM_GRAY: Color = Color::from_rgb(0.5, 0.5, 0.5);

/// Very light gray background for disabled inputs
pub const VERY_LIGHT_GRAY: Color = Color::from_rgb(0.95, 0.95, 0.95);

/// Creates the Bajeti custom theme with brand colors
pub fn create_bajeti_theme() -> Theme {
    Theme::custom(
        "Bajeti".to_string(),
        iced::theme::Palette {
            background: LIGHT_BACKGROUND,
            text: DARK_TEXT,
            primary: LOGO_PURPLE,
            success: SUCCESS_GREEN,
            danger: ERROR_RED,
        },
    )
}

/// Custom button style functions for consistent styling across views
pub mod button_styles {
    use super::*;

    /// Primary button style using logo purple
    pub fn primary() -> iced::theme::Button {
        iced::theme::Button::Custom(Box::new(PrimaryButtonStyle))
    }

    /// Secondary button style with logo purple border
    pub fn secondary() -> iced::theme::Button {
        iced::theme::Button::Custom(Box::new(SecondaryButtonStyle))
    }

    /// Destructive button style using error red
    pub fn destructive() -> iced::theme::Button {
        iced::theme::Button::Custom(Box::new(DestructiveButtonStyle))
    }

    /// Borderless icon button style for toolbar toggles
    pub fn icon() -> iced::theme::Button {
        iced::theme::Button::Custom(Box::new(IconButtonStyle))
    }

    /// Navigation drawer link style
    pub fn nav_link() -> iced::theme::Button {
        iced::theme::Button::Custom(Box::new(NavLinkButtonStyle))
    }

    /// Small close button style used by toasts and alerts
    pub fn toast_close() -> iced::theme::Button {
        iced::theme::Button::Custom(Box::new(ToastCloseButtonStyle))
    }

    struct PrimaryButtonStyle;

    impl button::StyleSheet for PrimaryButtonStyle {
        type Style = Theme;

        fn active(&self, _style: &Self::Style) -> button::Appearance {
            button::Appearance {
                shadow_offset: Vector::new(0.0, 2.0),
                background: Some(Background::Color(LOGO_PURPLE)),
                text_color: WHITE,
                border: Border {
                    color: LOGO_PURPLE,
                    width: 1.0,
                    radius: utils::border_radius().into(),
                },
                shadow: Shadow {
                    color: SHADOW_COLOR,
                    offset: Vector::new(0.0, 2.0),
                    blur_radius: 4.0,
                },
            }
        }

        fn hovered(&self, style: &Self::Style) -> button::Appearance {
            button::Appearance {
                background: Some(Background::Color(LOGO_PURPLE_HOVER)),
                border: Border {
                    color: LOGO_PURPLE_HOVER,
                    width: 1.0,
                    radius: utils::border_radius().into(),
                },
                ..self.active(style)
            }
        }

        fn pressed(&self, style: &Self::Style) -> button::Appearance {
            button::Appearance {
                shadow_offset: Vector::new(0.0, 1.0),
                background: Some(Background::Color(LOGO_PURPLE_PRESSED)),
                border: Border {
                    color: LOGO_PURPLE_PRESSED,
                    width: 1.0,
                    radius: utils::border_radius().into(),
                },
                shadow: Shadow {
                    color: SHADOW_COLOR,
                    offset: Vector::new(0.0, 1.0),
                    blur_radius: 2.0,
                },
                ..self.active(style)
            }
        }

        fn disabled(&self, _style: &Self::Style) -> button::Appearance {
            button::Appearance {
                shadow_offset: Vector::default(),
                background: Some(Background::Color(DISABLED_BACKGROUND)),
                text_color: DISABLED_TEXT,
                border: Border {
                    color: DISABLED_BORDER,
                    width: 1.0,
                    radius: utils::border_radius().into(),
                },
                shadow: Shadow::default(),
            }
        }
    }

    struct SecondaryButtonStyle;

    impl button::StyleSheet for SecondaryButtonStyle {
        type Style = Theme;

        fn active(&self, _style: &Self::Style) -> button::Appearance {
            button::Appearance {
                shadow_offset: Vector::default(),
                background: Some(Background::Color(TRANSPARENT)),
                text_color: LOGO_PURPLE,
                border: Border {
                    color: LOGO_PURPLE,
                    width: 1.0,
                    radius: utils::border_radius().into(),
                },
                shadow: Shadow::default(),
            }
        }

        fn hovered(&self, style: &Self::Style) -> button::Appearance {
            button::Appearance {
                background: Some(Background::Color(LOGO_PURPLE_LIGHT)),
                ..self.active(style)
            }
        }

        fn pressed(&self, style: &Self::Style) -> button::Appearance {
            button::Appearance {
                background: Some(Background::Color(LOGO_PURPLE_MEDIUM)),
                ..self.active(style)
            }
        }

        fn disabled(&self, style: &Self::Style) -> button::Appearance {
            button::Appearance {
                text_color: DISABLED_TEXT,
                border: Border {
                    color: DISABLED_BORDER,
                    width: 1.0,
                    radius: utils::border_radius().into(),
                },
                ..self.active(style)
            }
        }
    }

    struct DestructiveButtonStyle;

    impl button::StyleSheet for DestructiveButtonStyle {
        type Style = Theme;

        fn active(&self, _style: &Self::Style) -> button::Appearance {
            button::Appearance {
                shadow_offset: Vector::new(0.0, 2.0),
                background: Some(Background::Color(ERROR_RED)),
                text_color: WHITE,
                border: Border {
                    color: ERROR_RED,
                    width: 1.0,
                    radius: utils::border_radius().into(),
                },
                shadow: Shadow {
                    color: SHADOW_COLOR,
                    offset: Vector::new(0.0, 2.0),
                    blur_radius: 4.0,
                },
            }
        }

        fn hovered(&self, style: &Self::Style) -> button::Appearance {
            button::Appearance {
                background: Some(Background::Color(ERROR_RED_HOVER)),
                border: Border {
                    color: ERROR_RED_HOVER,
                    width: 1.0,
                    radius: utils::border_radius().into(),
                },
                ..self.active(style)
            }
        }

        fn pressed(&self, style: &Self::Style) -> button::Appearance {
            button::Appearance {
                shadow_offset: Vector::new(0.0, 1.0),
                background: Some(Background::Color(ERROR_RED_PRESSED)),
                border: Border {
                    color: ERROR_RED_PRESSED,
                    width: 1.0,
                    radius: utils::border_radius().into(),
                },
                shadow: Shadow {
                    color: SHADOW_COLOR,
                    offset: Vector::new(0.0, 1.0),
                    blur_radius: 2.0,
                },
                ..self.active(style)
            }
        }

        fn disabled(&self, _style: &Self::Style) -> button::Appearance {
            button::Appearance {
                shadow_offset: Vector::default(),
                background: Some(Background::Color(DISABLED_BACKGROUND)),
                text_color: DISABLED_TEXT,
                border: Border {
                    color: DISABLED_BORDER,
                    width: 1.0,
                    radius: utils::border_radius().into(),
                },
                shadow: Shadow::default(),
            }
        }
    }

    struct IconButtonStyle;

    impl button::StyleSheet for IconButtonStyle {
        type Style = Theme;

        fn active(&self, _style: &Self::Style) -> button::Appearance {
            button::Appearance {
                shadow_offset: Vector::default(),
                background: Some(Background::Color(TRANSPARENT)),
                text_color: MEDIUM_GRAY,
                border: Border {
                    color: TRANSPARENT,
                    width: 0.0,
                    radius: utils::border_radius().into(),
                },
                shadow: Shadow::default(),
            }
        }

        fn hovered(&self, style: &Self::Style) -> button::Appearance {
            button::Appearance {
                background: Some(Background::Color(LOGO_PURPLE_LIGHT)),
                text_color: LOGO_PURPLE,
                ..self.active(style)
            }
        }

        fn pressed(&self, style: &Self::Style) -> button::Appearance {
            button::Appearance {
                background: Some(Background::Color(LOGO_PURPLE_MEDIUM)),
                text_color: LOGO_PURPLE,
                ..self.active(style)
            }
        }
    }

    struct NavLinkButtonStyle;

    impl button::StyleSheet for NavLinkButtonStyle {
        type Style = Theme;

        fn active(&self, _style: &Self::Style) -> button::Appearance {
            button::Appearance {
                shadow_offset: Vector::default(),
                background: Some(Background::Color(TRANSPARENT)),
                text_color: DARK_TEXT,
                border: Border {
                    color: TRANSPARENT,
                    width: 0.0,
                    radius: 6.0.into(),
                },
                shadow: Shadow::default(),
            }
        }

        fn hovered(&self, style: &Self::Style) -> button::Appearance {
            button::Appearance {
                background: Some(Background::Color(LOGO_PURPLE_SUBTLE)),
                text_color: LOGO_PURPLE,
                ..self.active(style)
            }
        }

        fn pressed(&self, style: &Self::Style) -> button::Appearance {
            button::Appearance {
                background: Some(Background::Color(LOGO_PURPLE_LIGHT)),
                text_color: LOGO_PURPLE_PRESSED,
                ..self.active(style)
            }
        }
    }

    struct ToastCloseButtonStyle;

    impl button::StyleSheet for ToastCloseButtonStyle {
        type Style = Theme;

        fn active(&self, _style: &Self::Style) -> button::Appearance {
            button::Appearance {
                shadow_offset: Vector::default(),
                background: Some(Background::Color(TRANSPARENT)),
                text_color: MEDIUM_GRAY,
                border: Border {
                    color: TRANSPARENT,
                    width: 0.0,
                    radius: 4.0.into(),
                },
                shadow: Shadow::default(),
            }
        }

        fn hovered(&self, style: &Self::Style) -> button::Appearance {
            button::Appearance {
                background: Some(Background::Color(Color::from_rgba(0.0, 0.0, 0.0, 0.08))),
                text_color: DARK_TEXT,
                ..self.active(style)
            }
        }
    }
}

/// Custom text input styles for form validation feedback
pub mod text_input_styles {
    use super::*;

    /// Green border, shown when a field passed validation
    pub fn valid() -> iced::theme::TextInput {
        iced::theme::TextInput::Custom(Box::new(ValidationInputStyle::Valid))
    }

    /// Red border, shown when a field failed validation
    pub fn invalid() -> iced::theme::TextInput {
        iced::theme::TextInput::Custom(Box::new(ValidationInputStyle::Invalid))
    }

    #[derive(Debug, Clone)]
    enum ValidationInputStyle {
        Valid,
        Invalid,
    }

    impl ValidationInputStyle {
        fn border_color(&self) -> Color {
            match self {
                ValidationInputStyle::Valid => SUCCESS_GREEN,
                ValidationInputStyle::Invalid => ERROR_RED,
            }
        }
    }

    impl text_input::StyleSheet for ValidationInputStyle {
        type Style = Theme;

        fn active(&self, _style: &Self::Style) -> text_input::Appearance {
            text_input::Appearance {
                background: WHITE.into(),
                border: Border {
                    color: self.border_color(),
                    width: 2.0,
                    radius: utils::border_radius().into(),
                },
                icon_color: MEDIUM_GRAY,
            }
        }

        fn focused(&self, _style: &Self::Style) -> text_input::Appearance {
            text_input::Appearance {
                background: WHITE.into(),
                border: Border {
                    color: self.border_color(),
                    width: 3.0,
                    radius: utils::border_radius().into(),
                },
                icon_color: MEDIUM_GRAY,
            }
        }

        fn placeholder_color(&self, _style: &Self::Style) -> Color {
            MEDIUM_GRAY
        }

        fn value_color(&self, _style: &Self::Style) -> Color {
            Color::BLACK
        }

        fn disabled_color(&self, _style: &Self::Style) -> Color {
            MEDIUM_GRAY
        }

        fn selection_color(&self, _style: &Self::Style) -> Color {
            Color::from_rgb(0.8, 0.8, 1.0)
        }

        fn disabled(&self, _style: &Self::Style) -> text_input::Appearance {
            text_input::Appearance {
                background: VERY_LIGHT_GRAY.into(),
                border: Border {
                    color: LIGHT_GRAY_BORDER,
                    width: 1.0,
                    radius: utils::border_radius().into(),
                },
                icon_color: MEDIUM_GRAY,
            }
        }

        fn hovered(&self, style: &Self::Style) -> text_input::Appearance {
            self.active(style)
        }
    }
}

/// Custom container styles for cards, alerts and overlay surfaces
pub mod container_styles {
    use super::*;

    /// White card with rounded corners and a soft shadow
    pub fn card() -> iced::theme::Container {
        iced::theme::Container::Custom(Box::new(CardStyle))
    }

    /// Tinted banner for error alerts
    pub fn error_alert() -> iced::theme::Container {
        iced::theme::Container::Custom(Box::new(AlertBannerStyle {
            background: ERROR_RED_LIGHT,
            border: ERROR_RED,
        }))
    }

    /// Tinted banner for warning alerts
    pub fn warning_alert() -> iced::theme::Container {
        iced::theme::Container::Custom(Box::new(AlertBannerStyle {
            background: WARNING_YELLOW_LIGHT,
            border: WARNING_YELLOW,
        }))
    }

    /// Tinted banner for success alerts
    pub fn success_alert() -> iced::theme::Container {
        iced::theme::Container::Custom(Box::new(AlertBannerStyle {
            background: SUCCESS_GREEN_LIGHT,
            border: SUCCESS_GREEN,
        }))
    }

    /// Tinted banner for informational alerts
    pub fn info_alert() -> iced::theme::Container {
        iced::theme::Container::Custom(Box::new(AlertBannerStyle {
            background: LOGO_PURPLE_LIGHT,
            border: LOGO_PURPLE,
        }))
    }

    /// Navigation drawer panel
    pub fn nav_drawer() -> iced::theme::Container {
        iced::theme::Container::Custom(Box::new(NavDrawerStyle))
    }

    /// Semi-transparent scrim behind dialogs and the open drawer
    pub fn backdrop() -> iced::theme::Container {
        iced::theme::Container::Custom(Box::new(BackdropStyle))
    }

    struct CardStyle;

    impl container::StyleSheet for CardStyle {
        type Style = Theme;

        fn appearance(&self, _style: &Self::Style) -> container::Appearance {
            container::Appearance {
                text_color: None,
                background: Some(Background::Color(WHITE)),
                border: Border {
                    color: TRANSPARENT,
                    width: 0.0,
                    radius: utils::border_radius().into(),
                },
                shadow: Shadow {
                    color: SHADOW_COLOR,
                    offset: Vector::new(0.0, 4.0),
                    blur_radius: 16.0,
                },
            }
        }
    }

    struct AlertBannerStyle {
        background: Color,
        border: Color,
    }

    impl container::StyleSheet for AlertBannerStyle {
        type Style = Theme;

        fn appearance(&self, _style: &Self::Style) -> container::Appearance {
            container::Appearance {
                text_color: Some(DARK_TEXT),
                background: Some(Background::Color(self.background)),
                border: Border {
                    color: self.border,
                    width: 1.0,
                    radius: utils::border_radius().into(),
                },
                shadow: Shadow::default(),
            }
        }
    }

    struct NavDrawerStyle;

    impl container::StyleSheet for NavDrawerStyle {
        type Style = Theme;

        fn appearance(&self, _style: &Self::Style) -> container::Appearance {
            container::Appearance {
                text_color: None,
                background: Some(Background::Color(WHITE)),
                border: Border {
                    color: LIGHT_GRAY_BORDER,
                    width: 1.0,
                    radius: 0.0.into(),
                },
                shadow: Shadow {
                    color: SHADOW_COLOR,
                    offset: Vector::new(2.0, 0.0),
                    blur_radius: 12.0,
                },
            }
        }
    }

    struct BackdropStyle;

    impl container::StyleSheet for BackdropStyle {
        type Style = Theme;

        fn appearance(&self, _style: &Self::Style) -> container::Appearance {
            container::Appearance {
                text_color: None,
                background: Some(Background::Color(BACKDROP_COLOR)),
                border: Border::default(),
                shadow: Shadow::default(),
            }
        }
    }
}

/// Layout and sizing helpers shared across views
pub mod utils {
    use iced::Padding;

    /// Creates a consistent spacing value for UI elements
    pub fn standard_spacing() -> u16 {
        20
    }

    /// Creates a consistent padding value for buttons
    pub fn button_padding() -> Padding {
        Padding::from([10, 20])
    }

    /// Creates a consistent padding value for small buttons
    pub fn small_button_padding() -> Padding {
        Padding::from([4, 8])
    }

    /// Creates a consistent padding value for text inputs
    pub fn text_input_padding() -> Padding {
        Padding::from([10, 15])
    }

    /// Creates a consistent padding value for toast dismiss buttons
    pub fn toast_dismiss_padding() -> Padding {
        Padding::from([5, 8])
    }

    /// Creates a consistent padding value for main content areas
    pub fn main_content_padding() -> Padding {
        Padding::from([20, 30])
    }

    /// Creates a consistent padding for alert banners
    pub fn alert_padding() -> Padding {
        Padding::from([15, 20])
    }

    /// Creates a consistent padding for dialog cards
    pub fn dialog_padding() -> Padding {
        Padding::from([25, 30])
    }

    /// Creates a consistent padding for the icon toggle buttons
    pub fn icon_toggle_padding() -> Padding {
        Padding::from([8, 12])
    }

    /// Creates a consistent border radius for UI elements
    pub fn border_radius() -> f32 {
        10.0
    }

    /// Creates a visibility toggle button with the eye icon matching the
    /// current state
    pub fn password_visibility_toggle<'a, Message: Clone + 'a>(
        visible: bool,
        on_toggle: Message,
    ) -> iced::widget::Button<'a, Message> {
        use iced::widget::{button, svg};

        let icon = if visible {
            super::eye_icon()
        } else {
            super::eye_off_icon()
        };

        button(
            svg(icon)
                .width(iced::Length::Fixed(16.0))
                .height(iced::Length::Fixed(16.0)),
        )
        .on_press(on_toggle)
        .style(super::button_styles::icon())
        .padding(icon_toggle_padding())
    }

    /// Typography helpers for consistent font sizing
    pub mod typography {
        const BASE_FONT_SIZE: f32 = 14.0;

        /// Get normal text size
        pub fn normal_text_size() -> f32 {
            BASE_FONT_SIZE
        }

        /// Get medium text size (slightly larger than normal)
        pub fn medium_text_size() -> f32 {
            BASE_FONT_SIZE + 2.0
        }

        /// Get small text size (smaller than normal)
        pub fn small_text_size() -> f32 {
            BASE_FONT_SIZE - 2.0
        }

        /// Get header text size (larger than medium)
        pub fn header_text_size() -> f32 {
            BASE_FONT_SIZE + 4.0
        }

        /// Get large text size (larger than header)
        pub fn large_text_size() -> f32 {
            BASE_FONT_SIZE + 6.0
        }

        /// Get extra large text size (largest size)
        pub fn extra_large_text_size() -> f32 {
            BASE_FONT_SIZE + 10.0
        }
    }
}

/// Inline alert banners for in-view feedback
pub mod alerts {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum AlertLevel {
        Error,
        Warning,
        Success,
        Info,
    }

    #[derive(Debug, Clone)]
    pub struct AlertMessage {
        pub level: AlertLevel,
        pub title: Option<String>,
        pub message: String,
        pub dismissible: bool,
    }

    impl AlertMessage {
        pub fn error<S: Into<String>>(message: S) -> Self {
            Self {
                level: AlertLevel::Error,
                title: None,
                message: message.into(),
                dismissible: true,
            }
        }

        pub fn error_with_title<S1: Into<String>, S2: Into<String>>(
            title: S1,
            message: S2,
        ) -> Self {
            Self {
                level: AlertLevel::Error,
                title: Some(title.into()),
                message: message.into(),
                dismissible: true,
            }
        }

        pub fn warning<S: Into<String>>(message: S) -> Self {
            Self {
                level: AlertLevel::Warning,
                title: None,
                message: message.into(),
                dismissible: true,
            }
        }

        pub fn success<S: Into<String>>(message: S) -> Self {
            Self {
                level: AlertLevel::Success,
                title: None,
                message: message.into(),
                dismissible: true,
            }
        }

        pub fn info<S: Into<String>>(message: S) -> Self {
            Self {
                level: AlertLevel::Info,
                title: None,
                message: message.into(),
                dismissible: true,
            }
        }
    }

    /// Render an alert banner with level icon, optional title and an
    /// optional dismiss button. The produced element owns its content, so
    /// the alert itself may be a temporary.
    pub fn render_alert<'a, Message>(
        alert: &AlertMessage,
        on_dismiss: Option<Message>,
    ) -> iced::Element<'a, Message>
    where
        Message: 'a + Clone,
    {
        use iced::widget::{button, column, container, row, svg, text};
        use iced::{Alignment, Length};

        let icon = match alert.level {
            AlertLevel::Error => svg(error_icon()),
            AlertLevel::Warning => svg(warning_icon()),
            AlertLevel::Success => svg(check_icon()),
            AlertLevel::Info => svg(info_icon()),
        };

        let banner_style = match alert.level {
            AlertLevel::Error => container_styles::error_alert(),
            AlertLevel::Warning => container_styles::warning_alert(),
            AlertLevel::Success => container_styles::success_alert(),
            AlertLevel::Info => container_styles::info_alert(),
        };

        let mut content_column = column![].spacing(8);

        if let Some(ref title) = alert.title {
            content_column =
                content_column.push(text(title).size(utils::typography::medium_text_size()));
        }

        content_column =
            content_column.push(text(&alert.message).size(utils::typography::normal_text_size()));

        let mut main_row = row![
            icon.width(Length::Fixed(20.0)).height(Length::Fixed(20.0)),
            content_column.width(Length::Fill),
        ]
        .spacing(12)
        .align_items(Alignment::Center);

        if let Some(dismiss_message) = on_dismiss {
            if alert.dismissible {
                let dismiss_button = button(
                    svg(xmark_icon())
                        .width(Length::Fixed(16.0))
                        .height(Length::Fixed(16.0)),
                )
                .on_press(dismiss_message)
                .style(button_styles::toast_close())
                .padding(utils::toast_dismiss_padding());

                main_row = main_row.push(dismiss_button);
            }
        }

        container(main_row)
            .style(banner_style)
            .padding(utils::alert_padding())
            .width(Length::Fill)
            .into()
    }
}
