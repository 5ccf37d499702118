//! Dashboard View
//!
//! The signed-in home screen: budget allocations with a global
//! amount-masking toggle, an add/update form, inline amount editing,
//! a density toggle persisted as `compact_mode`, and the dismissible
//! security notice that expires on its own after twenty seconds.
//!
//! Row removal asks for confirmation, so the view only raises a
//! `RemoveRequested` event; the application owns the confirm dialog and
//! calls back into [`DashboardView::remove_allocation`] on approval.

use chrono::{DateTime, Utc};
use iced::{
    widget::{button, column, container, row, scrollable, svg, text, text_input, Space},
    Alignment, Command, Element, Length,
};
use tracing::debug;
use uuid::Uuid;

use bajeti_shared::{MaskedValue, VisibilityToggle, MASK_PLACEHOLDER};

use crate::services::Account;
use crate::ui::theme::{
    self, alerts::AlertMessage, button_styles, container_styles, text_input_styles, utils,
    DARK_TEXT, LIGHT_GRAY_TEXT,
};

/// Ticks of the 100 ms timer before the security notice dismisses itself
const SECURITY_WARNING_TICKS: u32 = 200;

/// One budget line on the dashboard
#[derive(Debug, Clone)]
pub struct Allocation {
    pub id: Uuid,
    pub name: String,
    pub amount: f64,
    pub display: MaskedValue,
    pub updated_at: DateTime<Utc>,
}

impl Allocation {
    fn new(name: &str, amount: f64, visible: bool) -> Self {
        let mut display = MaskedValue::with_source(format_amount(amount));
        display.set_visible(visible);
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            amount,
            display,
            updated_at: Utc::now(),
        }
    }

    fn set_amount(&mut self, amount: f64) {
        self.amount = amount;
        self.display.replace(format_amount(amount));
        self.updated_at = Utc::now();
    }
}

/// Messages for the dashboard screen
#[derive(Debug, Clone)]
pub enum DashboardMessage {
    MenuPressed,
    ToggleAmountsVisibility,
    ToggleCompact,
    NameDraftChanged(String),
    AmountDraftChanged(String),
    AddPressed,
    EditPressed(Uuid),
    EditDraftChanged(String),
    EditSubmitted,
    EditCancelled,
    RemovePressed(Uuid),
    DismissWarning,
}

/// Outcomes the application polls after routing a dashboard message
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardEvent {
    /// The add/update form upserted an allocation
    Upserted,
    /// An inline amount edit was saved
    AmountSaved,
    /// The user asked to remove this allocation; needs confirmation
    RemoveRequested(Uuid),
    /// The density toggle flipped; persist the new value
    CompactToggled(bool),
}

#[derive(Debug, Clone)]
struct AmountEdit {
    id: Uuid,
    draft: String,
    invalid: bool,
}

/// Dashboard screen state
#[derive(Debug)]
pub struct DashboardView {
    greeting_name: String,
    allocations: Vec<Allocation>,
    visibility: VisibilityToggle,
    compact: bool,
    menu_available: bool,
    name_draft: String,
    amount_draft: String,
    name_invalid: bool,
    amount_invalid: bool,
    editing: Option<AmountEdit>,
    warning_ticks_left: Option<u32>,
    pending_event: Option<DashboardEvent>,
}

impl DashboardView {
    /// Build the dashboard for a signed-in account. Amounts start visible,
    /// matching a fresh page load.
    pub fn new(account: &Account, compact: bool, menu_available: bool) -> Self {
        let visibility = VisibilityToggle::shown();
        let visible = visibility.is_visible();
        Self {
            greeting_name: account.first_name.clone(),
            allocations: vec![
                Allocation::new("Rent", 15_000.0, visible),
                Allocation::new("Groceries", 8_000.0, visible),
                Allocation::new("Transport", 3_000.0, visible),
                Allocation::new("Savings", 5_000.0, visible),
            ],
            visibility,
            compact,
            menu_available,
            name_draft: String::new(),
            amount_draft: String::new(),
            name_invalid: false,
            amount_invalid: false,
            editing: None,
            warning_ticks_left: Some(SECURITY_WARNING_TICKS),
            pending_event: None,
        }
    }

    pub fn update(&mut self, message: DashboardMessage) -> Command<DashboardMessage> {
        match message {
            DashboardMessage::ToggleAmountsVisibility => {
                self.visibility.toggle();
                let visible = self.visibility.is_visible();
                for allocation in &mut self.allocations {
                    allocation.display.set_visible(visible);
                }
                Command::none()
            }

            DashboardMessage::ToggleCompact => {
                self.compact = !self.compact;
                self.pending_event = Some(DashboardEvent::CompactToggled(self.compact));
                Command::none()
            }

            DashboardMessage::NameDraftChanged(value) => {
                self.name_draft = value;
                self.name_invalid = false;
                Command::none()
            }

            DashboardMessage::AmountDraftChanged(value) => {
                self.amount_draft = value;
                self.amount_invalid = false;
                Command::none()
            }

            DashboardMessage::AddPressed => {
                let name = self.name_draft.trim().to_string();
                self.name_invalid = name.is_empty();
                let amount = parse_amount(&self.amount_draft);
                self.amount_invalid = amount.is_none();

                if self.name_invalid || self.amount_invalid {
                    debug!("Allocation form blocked by validation");
                    return Command::none();
                }

                let amount = amount.unwrap_or_default();
                match self
                    .allocations
                    .iter_mut()
                    .find(|a| a.name.eq_ignore_ascii_case(&name))
                {
                    Some(existing) => existing.set_amount(amount),
                    None => {
                        self.allocations
                            .push(Allocation::new(&name, amount, self.visibility.is_visible()));
                    }
                }

                self.name_draft.clear();
                self.amount_draft.clear();
                self.pending_event = Some(DashboardEvent::Upserted);
                Command::none()
            }

            DashboardMessage::EditPressed(id) => {
                if let Some(allocation) = self.allocations.iter().find(|a| a.id == id) {
                    self.editing = Some(AmountEdit {
                        id,
                        draft: format!("{:.2}", allocation.amount),
                        invalid: false,
                    });
                    return text_input::focus(text_input::Id::new("edit_amount"));
                }
                Command::none()
            }

            DashboardMessage::EditDraftChanged(value) => {
                if let Some(edit) = &mut self.editing {
                    edit.draft = value;
                    edit.invalid = false;
                }
                Command::none()
            }

            DashboardMessage::EditSubmitted => {
                if let Some(edit) = &mut self.editing {
                    match parse_amount(&edit.draft) {
                        Some(amount) => {
                            let id = edit.id;
                            if let Some(allocation) =
                                self.allocations.iter_mut().find(|a| a.id == id)
                            {
                                allocation.set_amount(amount);
                            }
                            self.editing = None;
                            self.pending_event = Some(DashboardEvent::AmountSaved);
                        }
                        None => edit.invalid = true,
                    }
                }
                Command::none()
            }

            DashboardMessage::EditCancelled => {
                self.editing = None;
                Command::none()
            }

            DashboardMessage::RemovePressed(id) => {
                self.pending_event = Some(DashboardEvent::RemoveRequested(id));
                Command::none()
            }

            DashboardMessage::DismissWarning => {
                self.warning_ticks_left = None;
                Command::none()
            }

            // The menu intent is handled by the application
            DashboardMessage::MenuPressed => Command::none(),
        }
    }

    /// Take the outcome of the last update, if it produced one
    pub fn take_event(&mut self) -> Option<DashboardEvent> {
        self.pending_event.take()
    }

    pub fn allocations(&self) -> &[Allocation] {
        &self.allocations
    }

    /// Remove an allocation after the confirm dialog approved it
    pub fn remove_allocation(&mut self, id: Uuid) -> bool {
        let before = self.allocations.len();
        self.allocations.retain(|a| a.id != id);
        if let Some(edit) = &self.editing {
            if edit.id == id {
                self.editing = None;
            }
        }
        self.allocations.len() < before
    }

    /// Count down the security notice
    pub fn tick(&mut self) {
        if let Some(ticks) = &mut self.warning_ticks_left {
            *ticks = ticks.saturating_sub(1);
            if *ticks == 0 {
                self.warning_ticks_left = None;
            }
        }
    }

    pub fn wants_tick(&self) -> bool {
        self.warning_ticks_left.is_some()
    }

    /// Reveal or hide the menu button when the session flag changes
    pub fn set_menu_available(&mut self, available: bool) {
        self.menu_available = available;
    }

    fn total(&self) -> f64 {
        self.allocations.iter().map(|a| a.amount).sum()
    }

    fn header(&self) -> Element<'_, DashboardMessage> {
        let mut bar = row![].spacing(12).align_items(Alignment::Center);

        if self.menu_available {
            bar = bar.push(
                button(
                    svg(theme::menu_icon())
                        .width(Length::Fixed(20.0))
                        .height(Length::Fixed(20.0)),
                )
                .on_press(DashboardMessage::MenuPressed)
                .padding(utils::icon_toggle_padding())
                .style(button_styles::icon()),
            );
        }

        let layout_icon = if self.compact {
            theme::list_icon()
        } else {
            theme::grid_icon()
        };

        bar = bar
            .push(
                svg(theme::bajeti_logo())
                    .width(Length::Fixed(32.0))
                    .height(Length::Fixed(32.0)),
            )
            .push(
                column![
                    text("Dashboard").size(utils::typography::large_text_size()),
                    text(format!("Hello, {}", self.greeting_name))
                        .size(utils::typography::small_text_size())
                        .style(iced::theme::Text::Color(LIGHT_GRAY_TEXT)),
                ]
                .spacing(2),
            )
            .push(Space::with_width(Length::Fill))
            .push(
                button(
                    svg(layout_icon)
                        .width(Length::Fixed(18.0))
                        .height(Length::Fixed(18.0)),
                )
                .on_press(DashboardMessage::ToggleCompact)
                .padding(utils::icon_toggle_padding())
                .style(button_styles::icon()),
            )
            .push(utils::password_visibility_toggle(
                self.visibility.is_visible(),
                DashboardMessage::ToggleAmountsVisibility,
            ));

        bar.into()
    }

    fn add_form(&self) -> Element<'_, DashboardMessage> {
        let name_style = if self.name_invalid {
            text_input_styles::invalid()
        } else {
            iced::theme::TextInput::Default
        };
        let amount_style = if self.amount_invalid {
            text_input_styles::invalid()
        } else {
            iced::theme::TextInput::Default
        };

        container(
            row![
                text_input("Allocation name", &self.name_draft)
                    .on_input(DashboardMessage::NameDraftChanged)
                    .padding(utils::text_input_padding())
                    .style(name_style)
                    .id(text_input::Id::new("allocation_name")),
                text_input("Amount", &self.amount_draft)
                    .on_input(DashboardMessage::AmountDraftChanged)
                    .padding(utils::text_input_padding())
                    .style(amount_style)
                    .id(text_input::Id::new("allocation_amount"))
                    .on_submit(DashboardMessage::AddPressed),
                button(text("Save").size(utils::typography::normal_text_size()))
                    .on_press(DashboardMessage::AddPressed)
                    .padding(utils::button_padding())
                    .style(button_styles::primary()),
            ]
            .spacing(10)
            .align_items(Alignment::Center),
        )
        .padding(if self.compact { 10 } else { 15 })
        .width(Length::Fill)
        .style(container_styles::card())
        .into()
    }

    fn amount_cell(&self, allocation: &Allocation) -> Element<'_, DashboardMessage> {
        if let Some(edit) = &self.editing {
            if edit.id == allocation.id {
                let style = if edit.invalid {
                    text_input_styles::invalid()
                } else {
                    iced::theme::TextInput::Default
                };
                return row![
                    text_input("0.00", &edit.draft)
                        .on_input(DashboardMessage::EditDraftChanged)
                        .padding(utils::text_input_padding())
                        .style(style)
                        .width(Length::Fixed(140.0))
                        .id(text_input::Id::new("edit_amount"))
                        .on_submit(DashboardMessage::EditSubmitted),
                    button(text("✕").size(utils::typography::small_text_size()))
                        .on_press(DashboardMessage::EditCancelled)
                        .padding(utils::small_button_padding())
                        .style(button_styles::toast_close()),
                ]
                .spacing(4)
                .align_items(Alignment::Center)
                .into();
            }
        }

        // Masked amounts keep the blurred styling of the page version
        let color = if allocation.display.is_masked() {
            LIGHT_GRAY_TEXT
        } else {
            DARK_TEXT
        };
        text(format!("KSh {}", allocation.display.text()))
            .size(utils::typography::medium_text_size())
            .style(iced::theme::Text::Color(color))
            .into()
    }

    fn allocation_row(&self, allocation: &Allocation) -> Element<'_, DashboardMessage> {
        let mut name_column = column![text(&allocation.name)
            .size(utils::typography::medium_text_size())]
        .spacing(2);

        if !self.compact {
            name_column = name_column.push(
                text(format!(
                    "Updated {}",
                    allocation.updated_at.format("%b %e, %H:%M")
                ))
                .size(utils::typography::small_text_size())
                .style(iced::theme::Text::Color(LIGHT_GRAY_TEXT)),
            );
        }

        let content = row![
            name_column.width(Length::Fill),
            self.amount_cell(allocation),
            button(text("Edit").size(utils::typography::small_text_size()))
                .on_press(DashboardMessage::EditPressed(allocation.id))
                .padding(utils::small_button_padding())
                .style(button_styles::secondary()),
            button(text("Remove").size(utils::typography::small_text_size()))
                .on_press(DashboardMessage::RemovePressed(allocation.id))
                .padding(utils::small_button_padding())
                .style(button_styles::destructive()),
        ]
        .spacing(12)
        .align_items(Alignment::Center);

        container(content)
            .padding(if self.compact { 8 } else { 15 })
            .width(Length::Fill)
            .style(container_styles::card())
            .into()
    }

    fn total_row(&self) -> Element<'_, DashboardMessage> {
        let amount = if self.visibility.is_visible() {
            format!("KSh {}", format_amount(self.total()))
        } else {
            format!("KSh {}", MASK_PLACEHOLDER)
        };

        row![
            text("Total allocated").size(utils::typography::medium_text_size()),
            Space::with_width(Length::Fill),
            text(amount).size(utils::typography::medium_text_size()),
        ]
        .align_items(Alignment::Center)
        .into()
    }

    pub fn view(&self) -> Element<'_, DashboardMessage> {
        let mut content = column![self.header()].spacing(utils::standard_spacing());

        if self.warning_ticks_left.is_some() {
            let warning = AlertMessage::warning(
                "Keep your account safe: never share your password or security answer with anyone.",
            );
            content = content.push(theme::alerts::render_alert(
                &warning,
                Some(DashboardMessage::DismissWarning),
            ));
        }

        content = content.push(self.add_form());

        let row_spacing = if self.compact { 6 } else { 10 };
        let mut list = column![].spacing(row_spacing);
        for allocation in &self.allocations {
            list = list.push(self.allocation_row(allocation));
        }

        content = content.push(list).push(self.total_row());

        scrollable(
            container(content)
                .width(Length::Fill)
                .padding(utils::main_content_padding()),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
    }
}

/// Format an amount with thousands separators and two decimals
pub fn format_amount(amount: f64) -> String {
    let cents = (amount * 100.0).round() as i64;
    let negative = cents < 0;
    let cents = cents.abs();
    let whole = cents / 100;
    let frac = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    format!("{}{}.{:02}", sign, grouped, frac)
}

/// Parse a user-entered amount; separators and surrounding spaces are
/// tolerated, negatives are not
fn parse_amount(raw: &str) -> Option<f64> {
    let cleaned = raw.trim().replace(',', "");
    if cleaned.is_empty() {
        return None;
    }
    cleaned
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && *value >= 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn account() -> Account {
        Account {
            first_name: "Amina".to_string(),
            last_name: "Odhiambo".to_string(),
            email: "amina@example.com".to_string(),
            password: "hunter2".to_string(),
            security_answer: "blue".to_string(),
            registered_at: Utc::now(),
        }
    }

    fn view() -> DashboardView {
        DashboardView::new(&account(), false, true)
    }

    #[test]
    fn test_amounts_start_visible() {
        let view = view();
        assert!(view.visibility.is_visible());
        assert!(view.allocations.iter().all(|a| !a.display.is_masked()));
        assert_eq!(view.allocations[0].display.text(), "15,000.00");
    }

    #[test]
    fn test_toggle_masks_and_restores_all_amounts() {
        let mut view = view();
        let _ = view.update(DashboardMessage::ToggleAmountsVisibility);

        assert!(view
            .allocations
            .iter()
            .all(|a| a.display.text() == MASK_PLACEHOLDER));

        let _ = view.update(DashboardMessage::ToggleAmountsVisibility);
        assert_eq!(view.allocations[0].display.text(), "15,000.00");
        assert_eq!(view.allocations[1].display.text(), "8,000.00");
    }

    #[test]
    fn test_upsert_adds_new_allocation() {
        let mut view = view();
        let _ = view.update(DashboardMessage::NameDraftChanged("Airtime".to_string()));
        let _ = view.update(DashboardMessage::AmountDraftChanged("1,200".to_string()));
        let _ = view.update(DashboardMessage::AddPressed);

        assert_eq!(view.allocations.len(), 5);
        assert_eq!(view.take_event(), Some(DashboardEvent::Upserted));
        let added = view.allocations.last().unwrap();
        assert_eq!(added.name, "Airtime");
        assert_eq!(added.display.text(), "1,200.00");
    }

    #[test]
    fn test_upsert_updates_existing_by_name() {
        let mut view = view();
        let _ = view.update(DashboardMessage::NameDraftChanged("rent".to_string()));
        let _ = view.update(DashboardMessage::AmountDraftChanged("16000".to_string()));
        let _ = view.update(DashboardMessage::AddPressed);

        assert_eq!(view.allocations.len(), 4);
        assert_eq!(view.allocations[0].amount, 16_000.0);
        assert_eq!(view.allocations[0].display.text(), "16,000.00");
    }

    #[test]
    fn test_row_added_while_masked_is_masked() {
        let mut view = view();
        let _ = view.update(DashboardMessage::ToggleAmountsVisibility);
        let _ = view.update(DashboardMessage::NameDraftChanged("Airtime".to_string()));
        let _ = view.update(DashboardMessage::AmountDraftChanged("500".to_string()));
        let _ = view.update(DashboardMessage::AddPressed);

        let added = view.allocations.last().unwrap();
        assert_eq!(added.display.text(), MASK_PLACEHOLDER);

        let _ = view.update(DashboardMessage::ToggleAmountsVisibility);
        let added = view.allocations.last().unwrap();
        assert_eq!(added.display.text(), "500.00");
    }

    #[test]
    fn test_invalid_amount_blocks_upsert() {
        let mut view = view();
        let _ = view.update(DashboardMessage::NameDraftChanged("Water".to_string()));
        let _ = view.update(DashboardMessage::AmountDraftChanged("abc".to_string()));
        let _ = view.update(DashboardMessage::AddPressed);

        assert!(view.amount_invalid);
        assert!(view.take_event().is_none());
        assert_eq!(view.allocations.len(), 4);
    }

    #[test]
    fn test_inline_edit_saves_amount() {
        let mut view = view();
        let id = view.allocations[2].id;
        let _ = view.update(DashboardMessage::EditPressed(id));
        let _ = view.update(DashboardMessage::EditDraftChanged("3500".to_string()));
        let _ = view.update(DashboardMessage::EditSubmitted);

        assert_eq!(view.allocations[2].amount, 3_500.0);
        assert_eq!(view.take_event(), Some(DashboardEvent::AmountSaved));
        assert!(view.editing.is_none());
    }

    #[test]
    fn test_inline_edit_rejects_garbage() {
        let mut view = view();
        let id = view.allocations[0].id;
        let _ = view.update(DashboardMessage::EditPressed(id));
        let _ = view.update(DashboardMessage::EditDraftChanged("-50".to_string()));
        let _ = view.update(DashboardMessage::EditSubmitted);

        assert!(view.editing.as_ref().unwrap().invalid);
        assert_eq!(view.allocations[0].amount, 15_000.0);
        assert!(view.take_event().is_none());
    }

    #[test]
    fn test_remove_goes_through_confirmation() {
        let mut view = view();
        let id = view.allocations[1].id;
        let _ = view.update(DashboardMessage::RemovePressed(id));

        // Nothing removed yet, only requested
        assert_eq!(view.allocations.len(), 4);
        assert_eq!(view.take_event(), Some(DashboardEvent::RemoveRequested(id)));

        assert!(view.remove_allocation(id));
        assert_eq!(view.allocations.len(), 3);
        assert!(!view.remove_allocation(id));
    }

    #[test]
    fn test_security_warning_expires_after_countdown() {
        let mut view = view();
        assert!(view.wants_tick());

        for _ in 0..SECURITY_WARNING_TICKS {
            view.tick();
        }
        assert!(!view.wants_tick());
    }

    #[test]
    fn test_dismiss_warning_early() {
        let mut view = view();
        let _ = view.update(DashboardMessage::DismissWarning);
        assert!(!view.wants_tick());
    }

    #[test]
    fn test_compact_toggle_raises_persist_event() {
        let mut view = view();
        let _ = view.update(DashboardMessage::ToggleCompact);
        assert!(view.compact);
        assert_eq!(view.take_event(), Some(DashboardEvent::CompactToggled(true)));
    }

    #[test]
    fn test_format_amount_grouping() {
        assert_eq!(format_amount(0.0), "0.00");
        assert_eq!(format_amount(999.5), "999.50");
        assert_eq!(format_amount(15_000.0), "15,000.00");
        assert_eq!(format_amount(1_234_567.89), "1,234,567.89");
    }

    #[test]
    fn test_parse_amount_tolerates_separators() {
        assert_eq!(parse_amount(" 1,200.50 "), Some(1200.5));
        assert_eq!(parse_amount("0"), Some(0.0));
        assert_eq!(parse_amount("-5"), None);
        assert_eq!(parse_amount("abc"), None);
        assert_eq!(parse_amount(""), None);
    }
}
