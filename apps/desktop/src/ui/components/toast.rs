//! Toast Component Module
//!
//! Overlay notifications that appear in the bottom-right corner and dismiss
//! themselves after a short delay. Screens queue toasts through the
//! [`ToastManager`]; the main application renders them over the current view
//! and expires them on timer ticks.

use iced::{
    widget::{button, column, container, row, svg, text, Space},
    Alignment, Element, Length,
};
use std::time::{Duration, Instant};

use bajeti_shared::Severity;

use crate::ui::theme::{
    button_styles, check_icon, container_styles, error_icon, info_icon, utils, warning_icon,
    DARK_TEXT,
};

/// Duration for toast auto-dismiss
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_millis(3000);

/// Maximum number of toasts to display simultaneously
pub const MAX_VISIBLE_TOASTS: usize = 3;

/// Toast positioning and spacing constants
pub const TOAST_MARGIN: f32 = 20.0;
pub const TOAST_SPACING: f32 = 10.0;
pub const TOAST_WIDTH: f32 = 360.0;

/// Individual toast item with timing information
#[derive(Debug, Clone)]
pub struct Toast {
    pub id: usize,
    pub severity: Severity,
    pub message: String,
    pub created_at: Instant,
    pub duration: Duration,
}

impl Toast {
    /// Create a new toast with the default auto-dismiss delay
    pub fn new(id: usize, severity: Severity, message: String) -> Self {
        Self {
            id,
            severity,
            message,
            created_at: Instant::now(),
            duration: DEFAULT_TOAST_DURATION,
        }
    }

    /// Create a toast with a custom auto-dismiss delay
    pub fn with_duration(id: usize, severity: Severity, message: String, duration: Duration) -> Self {
        Self {
            id,
            severity,
            message,
            created_at: Instant::now(),
            duration,
        }
    }

    /// Check if this toast has outlived its display time
    pub fn should_dismiss(&self) -> bool {
        self.created_at.elapsed() >= self.duration
    }

    /// Get the remaining display time for this toast
    pub fn remaining_time(&self) -> Duration {
        self.duration.saturating_sub(self.created_at.elapsed())
    }
}

/// Toast manager for handling multiple toasts
#[derive(Debug, Clone, Default)]
pub struct ToastManager {
    toasts: Vec<Toast>,
    next_id: usize,
}

impl ToastManager {
    /// Create a new toast manager
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a new toast with the default duration
    pub fn add_toast<S: Into<String>>(&mut self, severity: Severity, message: S) -> usize {
        self.push(Toast::new(self.next_id, severity, message.into()))
    }

    /// Add a toast with a custom duration
    pub fn add_toast_with_duration<S: Into<String>>(
        &mut self,
        severity: Severity,
        message: S,
        duration: Duration,
    ) -> usize {
        self.push(Toast::with_duration(
            self.next_id,
            severity,
            message.into(),
            duration,
        ))
    }

    fn push(&mut self, toast: Toast) -> usize {
        let id = toast.id;
        self.next_id += 1;
        self.toasts.push(toast);

        // Oldest toast makes room when the stack is full
        if self.toasts.len() > MAX_VISIBLE_TOASTS {
            self.toasts.remove(0);
        }

        id
    }

    /// Remove a specific toast by ID
    pub fn remove_toast(&mut self, toast_id: usize) {
        self.toasts.retain(|toast| toast.id != toast_id);
    }

    /// Remove all expired toasts
    pub fn remove_expired_toasts(&mut self) {
        self.toasts.retain(|toast| !toast.should_dismiss());
    }

    /// Clear all toasts
    pub fn clear_all(&mut self) {
        self.toasts.clear();
    }

    /// Get all current toasts
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    /// Check if there are any toasts
    pub fn has_toasts(&self) -> bool {
        !self.toasts.is_empty()
    }

    /// Get the number of active toasts
    pub fn count(&self) -> usize {
        self.toasts.len()
    }
}

/// Convenience functions for common toast types
impl ToastManager {
    /// Add an error toast
    pub fn error<S: Into<String>>(&mut self, message: S) -> usize {
        self.add_toast(Severity::Error, message)
    }

    /// Add a warning toast
    pub fn warning<S: Into<String>>(&mut self, message: S) -> usize {
        self.add_toast(Severity::Warning, message)
    }

    /// Add a success toast
    pub fn success<S: Into<String>>(&mut self, message: S) -> usize {
        self.add_toast(Severity::Success, message)
    }

    /// Add an info toast
    pub fn info<S: Into<String>>(&mut self, message: S) -> usize {
        self.add_toast(Severity::Info, message)
    }
}

/// Render a single toast card
pub fn render_toast<Message: Clone + 'static>(
    toast: &Toast,
    on_dismiss: Option<Message>,
) -> Element<Message> {
    let container_style = match toast.severity {
        Severity::Error => container_styles::error_alert(),
        Severity::Warning => container_styles::warning_alert(),
        Severity::Success => container_styles::success_alert(),
        Severity::Info => container_styles::info_alert(),
    };

    let icon_svg = match toast.severity {
        Severity::Error => error_icon(),
        Severity::Warning => warning_icon(),
        Severity::Success => check_icon(),
        Severity::Info => info_icon(),
    };

    let mut content = row![svg(icon_svg)
        .width(Length::Fixed(16.0))
        .height(Length::Fixed(16.0))];

    content = content.push(Space::with_width(Length::Fixed(10.0))).push(
        text(&toast.message)
            .size(12)
            .style(iced::theme::Text::Color(DARK_TEXT))
            .width(Length::Fill),
    );

    if let Some(dismiss_msg) = on_dismiss {
        content = content.push(Space::with_width(Length::Fixed(10.0))).push(
            button("✕")
                .on_press(dismiss_msg)
                .padding([2, 6])
                .style(button_styles::toast_close()),
        );
    }

    container(content.align_items(Alignment::Center))
        .padding(utils::alert_padding())
        .width(Length::Fixed(TOAST_WIDTH))
        .style(container_style)
        .into()
}

/// Render the toast stack, newest at the bottom
pub fn render_toasts<Message: Clone + 'static>(
    toast_manager: &ToastManager,
    on_dismiss: impl Fn(usize) -> Message,
) -> Element<Message> {
    if !toast_manager.has_toasts() {
        return Space::new(Length::Shrink, Length::Shrink).into();
    }

    let mut toast_column = column![].spacing(TOAST_SPACING);

    for toast in toast_manager.toasts() {
        let dismiss_message = on_dismiss(toast.id);
        toast_column = toast_column.push(render_toast(toast, Some(dismiss_message)));
    }

    container(toast_column.align_items(Alignment::End))
        .width(Length::Shrink)
        .height(Length::Shrink)
        .into()
}

/// Float the toast stack over the main content in the bottom-right corner
pub fn render_toast_overlay<'a, Message: Clone + 'static>(
    toast_manager: &'a ToastManager,
    main_content: Element<'a, Message>,
    on_dismiss: impl Fn(usize) -> Message,
) -> Element<'a, Message> {
    if !toast_manager.has_toasts() {
        return main_content;
    }

    let toasts = render_toasts(toast_manager, on_dismiss);

    let toast_container = container(
        container(toasts)
            .width(Length::Shrink)
            .height(Length::Shrink),
    )
    .width(Length::Fill)
    .height(Length::Shrink)
    .align_x(iced::alignment::Horizontal::Right)
    .padding([0.0, TOAST_MARGIN, TOAST_MARGIN, 0.0]);

    column![main_content, toast_container].into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_stack_is_capped() {
        let mut manager = ToastManager::new();
        let first = manager.success("one");
        manager.success("two");
        manager.success("three");
        manager.success("four");

        assert_eq!(manager.count(), MAX_VISIBLE_TOASTS);
        // The oldest toast was evicted
        assert!(manager.toasts().iter().all(|toast| toast.id != first));
    }

    #[test]
    fn test_remove_toast_by_id() {
        let mut manager = ToastManager::new();
        let id = manager.info("hello");
        assert!(manager.has_toasts());

        manager.remove_toast(id);
        assert!(!manager.has_toasts());
    }

    #[test]
    fn test_expired_toasts_are_removed() {
        let mut manager = ToastManager::new();
        manager.add_toast_with_duration(Severity::Success, "instant", Duration::from_millis(0));
        let kept = manager.add_toast(Severity::Error, "fresh");

        manager.remove_expired_toasts();

        assert_eq!(manager.count(), 1);
        assert_eq!(manager.toasts()[0].id, kept);
    }

    #[test]
    fn test_default_duration_matches_snackbar_delay() {
        let mut manager = ToastManager::new();
        manager.success("saved");
        let toast = &manager.toasts()[0];

        assert_eq!(toast.duration, Duration::from_millis(3000));
        assert!(toast.remaining_time() <= Duration::from_millis(3000));
        assert!(!toast.should_dismiss());
    }
}
