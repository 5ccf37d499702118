//! Modal Dialog Management
//!
//! Alert and confirm dialogs are tracked by an explicit [`DialogManager`]
//! rather than swapping global click handlers around. The manager keeps at
//! most one dialog active plus one suspended: opening a dialog while another
//! is showing suspends the current one, and closing the active dialog by any
//! path (OK, Cancel, or a click outside the dialog) restores it.
//!
//! Dialogs are tagged with an application-defined value so the caller can
//! route the outcome without carrying closures around; the tag comes back
//! with the [`DialogOutcome`] when the dialog resolves.

use tracing::debug;

/// The kind of dialog, which decides its buttons and outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    /// Single OK button; always resolves as acknowledged.
    Alert,
    /// OK and Cancel buttons; resolves with a confirmation flag.
    Confirm,
}

/// How a dialog was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogOutcome {
    /// An alert was seen and closed.
    Acknowledged,
    /// A confirm dialog closed with the user's answer.
    Confirmed(bool),
}

/// A single open dialog.
#[derive(Debug, Clone)]
pub struct Dialog<T> {
    pub tag: T,
    pub kind: DialogKind,
    pub title: String,
    pub message: String,
}

/// Tracks the active dialog and one suspended predecessor.
#[derive(Debug)]
pub struct DialogManager<T> {
    active: Option<Dialog<T>>,
    suspended: Option<Dialog<T>>,
}

impl<T> Default for DialogManager<T> {
    fn default() -> Self {
        Self {
            active: None,
            suspended: None,
        }
    }
}

impl<T> DialogManager<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open an alert dialog with a single OK button.
    pub fn show_alert<S: Into<String>>(&mut self, tag: T, title: S, message: S) {
        self.push(Dialog {
            tag,
            kind: DialogKind::Alert,
            title: title.into(),
            message: message.into(),
        });
    }

    /// Open a confirm dialog with OK and Cancel buttons.
    pub fn show_confirm<S: Into<String>>(&mut self, tag: T, title: S, message: S) {
        self.push(Dialog {
            tag,
            kind: DialogKind::Confirm,
            title: title.into(),
            message: message.into(),
        });
    }

    fn push(&mut self, dialog: Dialog<T>) {
        if let Some(previous) = self.active.take() {
            debug!("Suspending dialog '{}' for '{}'", previous.title, dialog.title);
            // Only one level is kept; an already-suspended dialog is dropped.
            self.suspended = Some(previous);
        }
        self.active = Some(dialog);
    }

    /// The dialog to render, if any.
    pub fn active(&self) -> Option<&Dialog<T>> {
        self.active.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    /// Resolve the active dialog via its OK button.
    pub fn resolve_ok(&mut self) -> Option<(T, DialogOutcome)> {
        let dialog = self.close()?;
        let outcome = match dialog.kind {
            DialogKind::Alert => DialogOutcome::Acknowledged,
            DialogKind::Confirm => DialogOutcome::Confirmed(true),
        };
        Some((dialog.tag, outcome))
    }

    /// Resolve the active dialog via its Cancel button.
    pub fn resolve_cancel(&mut self) -> Option<(T, DialogOutcome)> {
        let dialog = self.close()?;
        let outcome = match dialog.kind {
            DialogKind::Alert => DialogOutcome::Acknowledged,
            DialogKind::Confirm => DialogOutcome::Confirmed(false),
        };
        Some((dialog.tag, outcome))
    }

    /// Resolve the active dialog via a click outside its bounds.
    ///
    /// An alert counts as acknowledged; a confirm counts as declined.
    pub fn dismiss_outside(&mut self) -> Option<(T, DialogOutcome)> {
        let dialog = self.close()?;
        let outcome = match dialog.kind {
            DialogKind::Alert => DialogOutcome::Acknowledged,
            DialogKind::Confirm => DialogOutcome::Confirmed(false),
        };
        Some((dialog.tag, outcome))
    }

    /// Close the active dialog and restore the suspended one, if present.
    fn close(&mut self) -> Option<Dialog<T>> {
        let closed = self.active.take()?;
        if let Some(restored) = self.suspended.take() {
            debug!("Restoring suspended dialog '{}'", restored.title);
            self.active = Some(restored);
        }
        Some(closed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Tag {
        Logout,
        Remove,
        Notice,
    }

    #[test]
    fn test_alert_resolves_acknowledged() {
        let mut manager = DialogManager::new();
        manager.show_alert(Tag::Notice, "Heads up", "Something happened");
        assert!(manager.is_open());

        let (tag, outcome) = manager.resolve_ok().unwrap();
        assert_eq!(tag, Tag::Notice);
        assert_matches!(outcome, DialogOutcome::Acknowledged);
        assert!(!manager.is_open());
    }

    #[test]
    fn test_confirm_ok_and_cancel() {
        let mut manager = DialogManager::new();
        manager.show_confirm(Tag::Logout, "Log out", "Are you sure?");
        let (_, outcome) = manager.resolve_ok().unwrap();
        assert_matches!(outcome, DialogOutcome::Confirmed(true));

        manager.show_confirm(Tag::Logout, "Log out", "Are you sure?");
        let (_, outcome) = manager.resolve_cancel().unwrap();
        assert_matches!(outcome, DialogOutcome::Confirmed(false));
    }

    #[test]
    fn test_outside_click_declines_confirm() {
        let mut manager = DialogManager::new();
        manager.show_confirm(Tag::Remove, "Remove", "Remove this item?");
        let (tag, outcome) = manager.dismiss_outside().unwrap();
        assert_eq!(tag, Tag::Remove);
        assert_matches!(outcome, DialogOutcome::Confirmed(false));
    }

    #[test]
    fn test_outside_click_acknowledges_alert() {
        let mut manager = DialogManager::new();
        manager.show_alert(Tag::Notice, "Heads up", "Something happened");
        let (_, outcome) = manager.dismiss_outside().unwrap();
        assert_matches!(outcome, DialogOutcome::Acknowledged);
    }

    #[test]
    fn test_nested_dialog_restores_previous() {
        let mut manager = DialogManager::new();
        manager.show_confirm(Tag::Logout, "Log out", "Are you sure?");
        manager.show_alert(Tag::Notice, "Heads up", "Interrupting alert");

        assert_eq!(manager.active().unwrap().tag, Tag::Notice);

        // Closing the alert by any path brings the confirm back.
        manager.resolve_ok().unwrap();
        let restored = manager.active().unwrap();
        assert_eq!(restored.tag, Tag::Logout);
        assert_eq!(restored.kind, DialogKind::Confirm);

        manager.resolve_cancel().unwrap();
        assert!(!manager.is_open());
    }

    #[test]
    fn test_suspension_is_one_level_deep() {
        let mut manager = DialogManager::new();
        manager.show_alert(Tag::Notice, "First", "1");
        manager.show_alert(Tag::Logout, "Second", "2");
        manager.show_alert(Tag::Remove, "Third", "3");

        // Third is active, second is suspended, first was dropped.
        assert_eq!(manager.active().unwrap().tag, Tag::Remove);
        manager.resolve_ok().unwrap();
        assert_eq!(manager.active().unwrap().tag, Tag::Logout);
        manager.resolve_ok().unwrap();
        assert!(!manager.is_open());
    }

    #[test]
    fn test_resolve_with_no_dialog_is_none() {
        let mut manager: DialogManager<Tag> = DialogManager::new();
        assert!(manager.resolve_ok().is_none());
        assert!(manager.dismiss_outside().is_none());
    }
}
