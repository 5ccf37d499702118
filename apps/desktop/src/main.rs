//! Bajeti Desktop App
//!
//! The desktop shell for Bajeti personal budgeting, built with the Iced GUI
//! framework. It hosts the login, registration, password-reset, profile and
//! dashboard screens, routes flash messages from the launch route into
//! toasts, and owns the modal dialog and navigation drawer state.

// Windows configuration for GUI applications
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use std::time::Duration;

use clap::Parser;
use iced::{Application, Command, Element, Settings, Subscription, Theme};
use tracing::{error, info, warn};
use uuid::Uuid;

use bajeti_shared::constants::CONFIG_DIR_NAME;
use bajeti_shared::{DialogManager, DialogOutcome, RouteRequest};

mod config;
mod logging;
mod services;
mod ui;

use config::ConfigManager;
use services::{Account, AccountStore};
use ui::components::{render_dialog, render_nav_drawer, render_toast_overlay, ToastManager};
use ui::create_bajeti_theme;
use ui::views::{
    DashboardEvent, DashboardMessage, DashboardView, ForgotPasswordMessage, ForgotPasswordView,
    LoginMessage, LoginView, ProfileMessage, ProfileView, RegisterMessage, RegisterView,
};

/// How often the animation timer fires while anything needs it
const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "bajeti", about = "Bajeti personal budgeting", version)]
struct Args {
    /// Initial route, optionally carrying a flash message, e.g.
    /// "/login" or "/dashboard?toast=success&message=Saved"
    route: Option<String>,

    /// Log more verbosely to the console
    #[arg(short, long)]
    verbose: bool,
}

/// Values handed to the app by `main`
#[derive(Debug, Default)]
pub struct AppFlags {
    /// Route requested on the command line
    pub route: Option<String>,
}

/// Main application messages
#[derive(Debug, Clone)]
pub enum Message {
    // Screen messages
    Login(LoginMessage),
    Register(RegisterMessage),
    ForgotPassword(ForgotPasswordMessage),
    Profile(ProfileMessage),
    Dashboard(DashboardMessage),

    // Account operation results
    LoginCompleted(Result<Account, String>),
    RegisterCompleted(Result<(), String>),
    ResetCompleted(Result<(), String>),
    ProfileSaved(Result<Account, String>),

    // Dialog buttons and scrim
    DialogOk,
    DialogCancel,
    DialogBackdrop,
    DialogBodyClicked,

    // Navigation drawer
    NavClose,
    NavDashboard,
    NavProfile,
    NavLogout,

    // Toasts and timers
    ToastDismissed(usize),
    Tick,
}

/// Which screen is currently shown
#[derive(Debug)]
enum Screen {
    Login(LoginView),
    Register(RegisterView),
    ForgotPassword(ForgotPasswordView),
    Profile(ProfileView),
    Dashboard(DashboardView),
}

/// What an open dialog is about, so its outcome can be routed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DialogTag {
    Logout,
    RemoveAllocation(Uuid),
}

/// Main application structure
pub struct BajetiApp {
    screen: Screen,
    store: AccountStore,
    config: Option<ConfigManager>,
    session: Option<Account>,
    toasts: ToastManager,
    dialogs: DialogManager<DialogTag>,
    nav_open: bool,
    theme: Theme,
}

impl Application for BajetiApp {
    type Message = Message;
    type Theme = Theme;
    type Executor = iced::executor::Default;
    type Flags = AppFlags;

    fn new(flags: AppFlags) -> (Self, Command<Message>) {
        info!("Initializing Bajeti desktop app");

        let config = match ConfigManager::new() {
            Ok(manager) => Some(manager),
            Err(e) => {
                warn!("Configuration unavailable, using defaults: {}", e);
                None
            }
        };

        let mut app = Self {
            screen: Screen::Login(LoginView::new()),
            store: AccountStore::new(),
            config,
            session: None,
            toasts: ToastManager::new(),
            dialogs: DialogManager::new(),
            nav_open: false,
            theme: create_bajeti_theme(),
        };

        if let Some(raw) = &flags.route {
            match RouteRequest::parse(raw) {
                Ok(mut route) => {
                    if let Some(flash) = route.take_flash() {
                        app.toasts.add_toast(flash.severity, flash.message);
                    }
                    app.open_route(&route.path);
                }
                Err(e) => warn!("Ignoring launch route: {}", e),
            }
        }

        (app, Command::none())
    }

    fn title(&self) -> String {
        match &self.screen {
            Screen::Login(_) => "Bajeti - Login".to_string(),
            Screen::Register(_) => "Bajeti - Create Account".to_string(),
            Screen::ForgotPassword(_) => "Bajeti - Reset Password".to_string(),
            Screen::Profile(_) => "Bajeti - Profile".to_string(),
            Screen::Dashboard(_) => "Bajeti - Dashboard".to_string(),
        }
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        match message {
            Message::Login(msg) => self.update_login(msg),
            Message::Register(msg) => self.update_register(msg),
            Message::ForgotPassword(msg) => self.update_forgot_password(msg),
            Message::Profile(msg) => self.update_profile(msg),
            Message::Dashboard(msg) => self.update_dashboard(msg),

            Message::LoginCompleted(result) => self.finish_login(result),
            Message::RegisterCompleted(result) => self.finish_register(result),
            Message::ResetCompleted(result) => self.finish_reset(result),
            Message::ProfileSaved(result) => self.finish_profile_save(result),

            Message::DialogOk => {
                let resolved = self.dialogs.resolve_ok();
                self.apply_dialog_outcome(resolved)
            }
            Message::DialogCancel => {
                let resolved = self.dialogs.resolve_cancel();
                self.apply_dialog_outcome(resolved)
            }
            Message::DialogBackdrop => {
                let resolved = self.dialogs.dismiss_outside();
                self.apply_dialog_outcome(resolved)
            }
            // Swallowed so card clicks never reach the scrim
            Message::DialogBodyClicked => Command::none(),

            Message::NavClose => {
                self.nav_open = false;
                Command::none()
            }
            Message::NavDashboard => {
                self.nav_open = false;
                self.open_dashboard();
                Command::none()
            }
            Message::NavProfile => {
                self.nav_open = false;
                self.open_profile();
                Command::none()
            }
            Message::NavLogout => {
                self.nav_open = false;
                self.dialogs.show_confirm(
                    DialogTag::Logout,
                    "Log out",
                    "Are you sure you want to log out?",
                );
                Command::none()
            }

            Message::ToastDismissed(id) => {
                self.toasts.remove_toast(id);
                Command::none()
            }

            Message::Tick => {
                self.toasts.remove_expired_toasts();
                match &mut self.screen {
                    Screen::Login(view) => view.tick(),
                    Screen::Register(view) => view.tick(),
                    Screen::ForgotPassword(view) => view.tick(),
                    Screen::Profile(view) => view.tick(),
                    Screen::Dashboard(view) => view.tick(),
                }
                Command::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let screen = match &self.screen {
            Screen::Login(view) => view.view().map(Message::Login),
            Screen::Register(view) => view.view().map(Message::Register),
            Screen::ForgotPassword(view) => view.view().map(Message::ForgotPassword),
            Screen::Profile(view) => view.view().map(Message::Profile),
            Screen::Dashboard(view) => view.view().map(Message::Dashboard),
        };

        let content = if let Some(dialog) = self.dialogs.active() {
            render_dialog(
                dialog,
                Message::DialogOk,
                Message::DialogCancel,
                Message::DialogBackdrop,
                Message::DialogBodyClicked,
            )
        } else if self.nav_open {
            render_nav_drawer(
                Message::NavDashboard,
                Message::NavProfile,
                Message::NavLogout,
                Message::NavClose,
            )
        } else {
            screen
        };

        render_toast_overlay(&self.toasts, content, Message::ToastDismissed)
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn subscription(&self) -> Subscription<Message> {
        let screen_wants_tick = match &self.screen {
            Screen::Login(view) => view.wants_tick(),
            Screen::Register(view) => view.wants_tick(),
            Screen::ForgotPassword(view) => view.wants_tick(),
            Screen::Profile(view) => view.wants_tick(),
            Screen::Dashboard(view) => view.wants_tick(),
        };

        if screen_wants_tick || self.toasts.has_toasts() {
            iced::time::every(TICK_INTERVAL).map(|_| Message::Tick)
        } else {
            Subscription::none()
        }
    }
}

impl BajetiApp {
    /// Open the screen a launch route names. Screens that need a signed-in
    /// account fall back to login, keeping any flash toast.
    fn open_route(&mut self, path: &str) {
        match path {
            "/" | "/login" => self.screen = Screen::Login(LoginView::new()),
            "/register" => self.screen = Screen::Register(RegisterView::new()),
            "/forgot_password" => {
                self.screen = Screen::ForgotPassword(ForgotPasswordView::new());
            }
            "/dashboard" | "/profile" => {
                warn!(
                    "Route '{}' requires a signed-in account, starting at login",
                    path
                );
                self.screen = Screen::Login(LoginView::new());
            }
            other => {
                warn!("Unknown route '{}', starting at login", other);
                self.screen = Screen::Login(LoginView::new());
            }
        }
    }

    fn compact_mode(&self) -> bool {
        self.config
            .as_ref()
            .map(|config| config.compact_mode())
            .unwrap_or(false)
    }

    fn show_menu(&self) -> bool {
        self.config
            .as_ref()
            .map(|config| config.show_menu())
            .unwrap_or(false)
    }

    fn persist_show_menu(&mut self, value: bool) {
        if let Some(config) = &mut self.config {
            if let Err(e) = config.set_show_menu(value) {
                warn!("Failed to persist menu visibility: {}", e);
            }
        }
    }

    fn persist_compact_mode(&mut self, value: bool) {
        if let Some(config) = &mut self.config {
            if let Err(e) = config.set_compact_mode(value) {
                warn!("Failed to persist layout preference: {}", e);
            }
        }
    }

    fn open_dashboard(&mut self) {
        if let Some(account) = &self.session {
            let view = DashboardView::new(account, self.compact_mode(), self.show_menu());
            self.screen = Screen::Dashboard(view);
        } else {
            warn!("Dashboard requested without a session, starting at login");
            self.screen = Screen::Login(LoginView::new());
        }
    }

    fn open_profile(&mut self) {
        if let Some(account) = &self.session {
            self.screen = Screen::Profile(ProfileView::new(account));
        } else {
            warn!("Profile requested without a session, starting at login");
            self.screen = Screen::Login(LoginView::new());
        }
    }

    fn log_out(&mut self) {
        info!("Signing out");
        self.session = None;
        self.nav_open = false;
        self.persist_show_menu(false);
        self.screen = Screen::Login(LoginView::new());
    }

    fn update_login(&mut self, message: LoginMessage) -> Command<Message> {
        match message {
            LoginMessage::RegisterPressed => {
                self.screen = Screen::Register(RegisterView::new());
                Command::none()
            }
            LoginMessage::ForgotPasswordPressed => {
                self.screen = Screen::ForgotPassword(ForgotPasswordView::new());
                Command::none()
            }
            message => {
                if let Screen::Login(view) = &mut self.screen {
                    let command = view.update(message).map(Message::Login);
                    if let Some(submission) = view.take_submission() {
                        let result = self
                            .store
                            .authenticate(&submission.email, &submission.password)
                            .map_err(|e| e.to_string());
                        // Delivered on the next frame so the spinner renders
                        return Command::batch([
                            command,
                            Command::perform(async move { result }, Message::LoginCompleted),
                        ]);
                    }
                    return command;
                }
                Command::none()
            }
        }
    }

    fn finish_login(&mut self, result: Result<Account, String>) -> Command<Message> {
        match result {
            Ok(account) => {
                info!("Signed in as {}", account.email);
                self.session = Some(account);
                self.persist_show_menu(true);
                self.open_dashboard();
            }
            Err(message) => {
                if let Screen::Login(view) = &mut self.screen {
                    view.submission_failed(&message);
                }
            }
        }
        Command::none()
    }

    fn update_register(&mut self, message: RegisterMessage) -> Command<Message> {
        match message {
            RegisterMessage::BackToLoginPressed => {
                self.screen = Screen::Login(LoginView::new());
                Command::none()
            }
            message => {
                if let Screen::Register(view) = &mut self.screen {
                    let command = view.update(message).map(Message::Register);
                    if let Some(submission) = view.take_submission() {
                        let result = self
                            .store
                            .register(submission)
                            .map(|_| ())
                            .map_err(|e| e.to_string());
                        return Command::batch([
                            command,
                            Command::perform(async move { result }, Message::RegisterCompleted),
                        ]);
                    }
                    return command;
                }
                Command::none()
            }
        }
    }

    fn finish_register(&mut self, result: Result<(), String>) -> Command<Message> {
        match result {
            Ok(()) => {
                self.screen = Screen::Login(LoginView::new());
                self.toasts
                    .success("Account created successfully. Please login");
            }
            Err(message) => {
                if let Screen::Register(view) = &mut self.screen {
                    view.submission_failed(&message);
                }
            }
        }
        Command::none()
    }

    fn update_forgot_password(&mut self, message: ForgotPasswordMessage) -> Command<Message> {
        match message {
            ForgotPasswordMessage::BackToLoginPressed => {
                self.screen = Screen::Login(LoginView::new());
                Command::none()
            }
            message => {
                if let Screen::ForgotPassword(view) = &mut self.screen {
                    let command = view.update(message).map(Message::ForgotPassword);
                    if let Some(submission) = view.take_submission() {
                        let result = self
                            .store
                            .reset_password(
                                &submission.email,
                                &submission.security_answer,
                                &submission.new_password,
                            )
                            .map_err(|e| e.to_string());
                        return Command::batch([
                            command,
                            Command::perform(async move { result }, Message::ResetCompleted),
                        ]);
                    }
                    return command;
                }
                Command::none()
            }
        }
    }

    fn finish_reset(&mut self, result: Result<(), String>) -> Command<Message> {
        match result {
            Ok(()) => {
                self.screen = Screen::Login(LoginView::new());
                self.toasts
                    .success("Password reset successfully. Please login");
            }
            Err(message) => {
                if let Screen::ForgotPassword(view) = &mut self.screen {
                    view.submission_failed(&message);
                }
            }
        }
        Command::none()
    }

    fn update_profile(&mut self, message: ProfileMessage) -> Command<Message> {
        match message {
            ProfileMessage::BackPressed => {
                self.open_dashboard();
                Command::none()
            }
            message => {
                if let Screen::Profile(view) = &mut self.screen {
                    let command = view.update(message).map(Message::Profile);
                    if let Some(submission) = view.take_submission() {
                        let current_email = match &self.session {
                            Some(account) => account.email.clone(),
                            None => {
                                warn!("Profile save without a session");
                                return command;
                            }
                        };
                        let result = self
                            .store
                            .update_profile(&current_email, submission)
                            .map_err(|e| e.to_string());
                        return Command::batch([
                            command,
                            Command::perform(async move { result }, Message::ProfileSaved),
                        ]);
                    }
                    return command;
                }
                Command::none()
            }
        }
    }

    fn finish_profile_save(&mut self, result: Result<Account, String>) -> Command<Message> {
        match result {
            Ok(account) => {
                self.session = Some(account);
                self.open_dashboard();
                self.toasts.success("Profile updated successfully");
            }
            Err(message) => {
                if let Screen::Profile(view) = &mut self.screen {
                    view.submission_failed(&message);
                }
            }
        }
        Command::none()
    }

    fn update_dashboard(&mut self, message: DashboardMessage) -> Command<Message> {
        if let DashboardMessage::MenuPressed = message {
            self.nav_open = true;
            return Command::none();
        }

        if let Screen::Dashboard(view) = &mut self.screen {
            let command = view.update(message).map(Message::Dashboard);
            match view.take_event() {
                Some(DashboardEvent::Upserted) => {
                    self.toasts.success("Allocation updated successfully");
                }
                Some(DashboardEvent::AmountSaved) => {
                    self.toasts.success("Amount changed successfully");
                }
                Some(DashboardEvent::RemoveRequested(id)) => {
                    self.dialogs.show_confirm(
                        DialogTag::RemoveAllocation(id),
                        "Remove allocation",
                        "Remove this allocation from your budget?",
                    );
                }
                Some(DashboardEvent::CompactToggled(compact)) => {
                    self.persist_compact_mode(compact);
                }
                None => {}
            }
            return command;
        }
        Command::none()
    }

    fn apply_dialog_outcome(
        &mut self,
        resolved: Option<(DialogTag, DialogOutcome)>,
    ) -> Command<Message> {
        match resolved {
            Some((DialogTag::Logout, DialogOutcome::Confirmed(true))) => self.log_out(),
            Some((DialogTag::RemoveAllocation(id), DialogOutcome::Confirmed(true))) => {
                if let Screen::Dashboard(view) = &mut self.screen {
                    if view.remove_allocation(id) {
                        self.toasts.success("Allocation removed successfully");
                    }
                }
            }
            _ => {}
        }
        Command::none()
    }
}

/// Initialize console and file logging from the environment preset, an
/// optional `logging.yml` next to the app config, and the CLI flag.
fn setup_logging(verbose: bool) -> anyhow::Result<()> {
    let environment = logging::get_environment();
    let mut config = logging::LoggingConfig::for_environment(environment);

    if let Some(dir) = dirs::config_dir() {
        let override_path = dir.join(CONFIG_DIR_NAME).join("logging.yml");
        if override_path.exists() {
            match logging::load_overrides(&override_path, environment) {
                Ok(overrides) => config = config.apply_overrides(&overrides),
                Err(e) => eprintln!("Warning: ignoring logging overrides: {}", e),
            }
        }
    }

    if verbose {
        config.console_level = "debug".to_string();
    }

    logging::initialize_logging(&config)
}

fn main() -> iced::Result {
    let args = Args::parse();

    if let Err(e) = setup_logging(args.verbose) {
        eprintln!("Warning: failed to initialize logging: {}", e);
    }

    info!("Starting Bajeti desktop app v{}", env!("CARGO_PKG_VERSION"));

    let settings = Settings {
        flags: AppFlags { route: args.route },
        window: iced::window::Settings {
            size: iced::Size::new(1000.0, 700.0),
            min_size: Some(iced::Size::new(800.0, 600.0)),
            position: iced::window::Position::Centered,
            ..Default::default()
        },
        fonts: vec![],
        default_font: iced::Font::DEFAULT,
        antialiasing: true,
        ..Settings::default()
    };

    let result = BajetiApp::run(settings);

    if let Err(e) = &result {
        error!("Bajeti failed to start: {}", e);
        #[cfg(feature = "native-dialogs")]
        rfd::MessageDialog::new()
            .set_level(rfd::MessageLevel::Error)
            .set_title("Bajeti")
            .set_description(&format!("Bajeti failed to start: {}", e))
            .show();
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use bajeti_shared::Severity;

    /// An app with no config file access, so tests never write to the
    /// platform config directory.
    fn app() -> BajetiApp {
        BajetiApp {
            screen: Screen::Login(LoginView::new()),
            store: AccountStore::new(),
            config: None,
            session: None,
            toasts: ToastManager::new(),
            dialogs: DialogManager::new(),
            nav_open: false,
            theme: create_bajeti_theme(),
        }
    }

    fn signed_in_app() -> BajetiApp {
        let mut app = app();
        let _ = app.update(Message::Login(LoginMessage::RegisterPressed));
        register_amina(&mut app);
        let _ = app.update(Message::RegisterCompleted(Ok(())));

        let account = app.store.authenticate("amina@example.com", "hunter2").unwrap();
        app.session = Some(account);
        app.open_dashboard();
        app
    }

    fn register_amina(app: &mut BajetiApp) {
        for message in [
            RegisterMessage::FirstNameChanged("Amina".to_string()),
            RegisterMessage::LastNameChanged("Odhiambo".to_string()),
            RegisterMessage::EmailChanged("amina@example.com".to_string()),
            RegisterMessage::PasswordChanged("hunter2".to_string()),
            RegisterMessage::ConfirmPasswordChanged("hunter2".to_string()),
            RegisterMessage::SecurityAnswerChanged("blue".to_string()),
            RegisterMessage::SubmitPressed,
        ] {
            let _ = app.update(Message::Register(message));
        }
    }

    #[test]
    fn test_args_parse() {
        let args = Args::try_parse_from(["bajeti"]).unwrap();
        assert!(args.route.is_none());
        assert!(!args.verbose);

        let args =
            Args::try_parse_from(["bajeti", "/dashboard?toast=success&message=Saved", "-v"])
                .unwrap();
        assert_eq!(args.route.as_deref(), Some("/dashboard?toast=success&message=Saved"));
        assert!(args.verbose);
    }

    #[test]
    fn test_register_then_login_reaches_dashboard() {
        let mut app = app();

        let _ = app.update(Message::Login(LoginMessage::RegisterPressed));
        assert!(matches!(app.screen, Screen::Register(_)));

        register_amina(&mut app);
        let _ = app.update(Message::RegisterCompleted(Ok(())));
        assert!(matches!(app.screen, Screen::Login(_)));
        assert_eq!(
            app.toasts.toasts()[0].message,
            "Account created successfully. Please login"
        );

        let _ = app.update(Message::Login(LoginMessage::EmailChanged(
            "amina@example.com".to_string(),
        )));
        let _ = app.update(Message::Login(LoginMessage::PasswordChanged(
            "hunter2".to_string(),
        )));
        let _ = app.update(Message::Login(LoginMessage::SubmitPressed));

        let account = app.store.authenticate("amina@example.com", "hunter2").unwrap();
        let _ = app.update(Message::LoginCompleted(Ok(account)));

        assert!(matches!(app.screen, Screen::Dashboard(_)));
        assert_eq!(
            app.session.as_ref().map(|a| a.email.as_str()),
            Some("amina@example.com")
        );
    }

    #[test]
    fn test_failed_login_stays_on_login() {
        let mut app = app();
        let _ = app.update(Message::LoginCompleted(Err("Invalid credentials".to_string())));
        assert!(matches!(app.screen, Screen::Login(_)));
        assert!(app.session.is_none());
    }

    #[test]
    fn test_logout_needs_confirmation() {
        let mut app = signed_in_app();

        let _ = app.update(Message::Dashboard(DashboardMessage::MenuPressed));
        assert!(app.nav_open);

        let _ = app.update(Message::NavLogout);
        assert!(!app.nav_open);
        assert!(app.dialogs.is_open());

        // Cancel keeps the session
        let _ = app.update(Message::DialogCancel);
        assert!(matches!(app.screen, Screen::Dashboard(_)));
        assert!(app.session.is_some());

        // Confirming logs out
        let _ = app.update(Message::NavLogout);
        let _ = app.update(Message::DialogOk);
        assert!(matches!(app.screen, Screen::Login(_)));
        assert!(app.session.is_none());
    }

    #[test]
    fn test_remove_allocation_confirmed_via_dialog() {
        let mut app = signed_in_app();

        let (id, count) = match &app.screen {
            Screen::Dashboard(view) => (view.allocations()[0].id, view.allocations().len()),
            _ => panic!("expected dashboard"),
        };

        let _ = app.update(Message::Dashboard(DashboardMessage::RemovePressed(id)));
        assert!(app.dialogs.is_open());

        let _ = app.update(Message::DialogOk);
        match &app.screen {
            Screen::Dashboard(view) => assert_eq!(view.allocations().len(), count - 1),
            _ => panic!("expected dashboard"),
        }
        assert!(app
            .toasts
            .toasts()
            .iter()
            .any(|toast| toast.message == "Allocation removed successfully"));
    }

    #[test]
    fn test_remove_allocation_declined_by_outside_click() {
        let mut app = signed_in_app();

        let (id, count) = match &app.screen {
            Screen::Dashboard(view) => (view.allocations()[0].id, view.allocations().len()),
            _ => panic!("expected dashboard"),
        };

        let _ = app.update(Message::Dashboard(DashboardMessage::RemovePressed(id)));
        let _ = app.update(Message::DialogBackdrop);

        match &app.screen {
            Screen::Dashboard(view) => assert_eq!(view.allocations().len(), count),
            _ => panic!("expected dashboard"),
        }
        assert!(!app.dialogs.is_open());
    }

    #[test]
    fn test_dashboard_upsert_flashes_toast() {
        let mut app = signed_in_app();

        let _ = app.update(Message::Dashboard(DashboardMessage::NameDraftChanged(
            "Water".to_string(),
        )));
        let _ = app.update(Message::Dashboard(DashboardMessage::AmountDraftChanged(
            "750".to_string(),
        )));
        let _ = app.update(Message::Dashboard(DashboardMessage::AddPressed));

        assert!(app
            .toasts
            .toasts()
            .iter()
            .any(|toast| toast.message == "Allocation updated successfully"));
    }

    #[test]
    fn test_profile_save_returns_to_dashboard() {
        let mut app = signed_in_app();
        let _ = app.update(Message::NavProfile);
        assert!(matches!(app.screen, Screen::Profile(_)));

        let mut updated = app.session.clone().unwrap();
        updated.first_name = "Aisha".to_string();
        let _ = app.update(Message::ProfileSaved(Ok(updated)));

        assert!(matches!(app.screen, Screen::Dashboard(_)));
        assert_eq!(app.session.as_ref().unwrap().first_name, "Aisha");
        assert!(app
            .toasts
            .toasts()
            .iter()
            .any(|toast| toast.message == "Profile updated successfully"));
    }

    #[test]
    fn test_launch_route_flash_becomes_toast() {
        let mut app = app();
        let mut route = RouteRequest::parse("/register?toast=success&message=Welcome").unwrap();
        if let Some(flash) = route.take_flash() {
            app.toasts.add_toast(flash.severity, flash.message);
        }
        app.open_route(&route.path);

        assert!(matches!(app.screen, Screen::Register(_)));
        let toast = &app.toasts.toasts()[0];
        assert_eq!(toast.severity, Severity::Success);
        assert_eq!(toast.message, "Welcome");
    }

    #[test]
    fn test_protected_route_falls_back_to_login() {
        let mut app = app();
        app.open_route("/dashboard");
        assert!(matches!(app.screen, Screen::Login(_)));

        app.open_route("/nowhere");
        assert!(matches!(app.screen, Screen::Login(_)));
    }

    #[test]
    fn test_reset_success_routes_to_login_with_toast() {
        let mut app = app();
        let _ = app.update(Message::Login(LoginMessage::ForgotPasswordPressed));
        assert!(matches!(app.screen, Screen::ForgotPassword(_)));

        let _ = app.update(Message::ResetCompleted(Ok(())));
        assert!(matches!(app.screen, Screen::Login(_)));
        assert_eq!(
            app.toasts.toasts()[0].message,
            "Password reset successfully. Please login"
        );
    }
}
