//! Views Module
//!
//! One module per screen: login, register, forgot-password (reset),
//! profile, and the dashboard. Each view owns its form state, validates
//! on submit, and exposes a `take_submission` accessor the application
//! polls after routing messages through `update`.

use iced::{widget::container, Element};

use crate::ui::theme::container_styles;

pub mod dashboard;
pub mod forgot_password;
pub mod login;
pub mod profile;
pub mod register;

pub use dashboard::{DashboardEvent, DashboardMessage, DashboardView};
pub use forgot_password::{ForgotPasswordMessage, ForgotPasswordView, ResetSubmission};
pub use login::{LoginMessage, LoginSubmission, LoginView};
pub use profile::{ProfileMessage, ProfileView};
pub use register::{RegisterMessage, RegisterView};

/// Wrap a form column in the centered white card every auth screen uses
pub fn render_form_card<Message: 'static>(content: Element<'_, Message>) -> Element<'_, Message> {
    container(content)
        .padding(30)
        .max_width(420)
        .style(container_styles::card())
        .into()
}
