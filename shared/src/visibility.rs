//! Visibility Toggles
//!
//! A [`VisibilityToggle`] backs every eye-icon button in the app: password
//! fields, the security answer field and the dashboard value mask all share
//! the same flip-a-boolean behavior and icon naming.

/// Two-state visibility flag with the matching icon name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibilityToggle {
    visible: bool,
}

impl VisibilityToggle {
    /// Start hidden. This is the initial state for password inputs.
    pub fn hidden() -> Self {
        Self { visible: false }
    }

    /// Start visible. This is the initial state for dashboard values.
    pub fn shown() -> Self {
        Self { visible: true }
    }

    /// Flip the state.
    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether a text input bound to this toggle should render obscured.
    pub fn secure(&self) -> bool {
        !self.visible
    }

    /// Icon to show on the toggle button: an open eye while the value is
    /// visible, a crossed-out eye while it is hidden.
    pub fn icon_name(&self) -> &'static str {
        if self.visible {
            "eye"
        } else {
            "eye-slash"
        }
    }
}

impl Default for VisibilityToggle {
    fn default() -> Self {
        Self::hidden()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_double_toggle_restores_state() {
        let mut toggle = VisibilityToggle::hidden();
        let initial = toggle;
        toggle.toggle();
        toggle.toggle();
        assert_eq!(toggle, initial);
    }

    #[test]
    fn test_icon_tracks_state() {
        let mut toggle = VisibilityToggle::shown();
        assert_eq!(toggle.icon_name(), "eye");
        toggle.toggle();
        assert_eq!(toggle.icon_name(), "eye-slash");
    }

    #[test]
    fn test_secure_is_inverse_of_visible() {
        let toggle = VisibilityToggle::hidden();
        assert!(toggle.secure());
        assert!(!toggle.is_visible());
    }

    #[test]
    fn test_default_is_hidden() {
        assert!(!VisibilityToggle::default().is_visible());
    }
}
