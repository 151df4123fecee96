//! Application state management
//!
//! Global state accessible via Dioxus context providers.

use dioxus::prelude::*;

use rill_core::api::ControllerClient;

/// The four screens reachable from the navigation shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Home,
    Timer,
    Manual,
    Settings,
}

impl Screen {
    /// Heading shown at the top of the screen.
    pub const fn title(self) -> &'static str {
        match self {
            Self::Home => "Irrigation App",
            Self::Timer => "Irrigation Timer",
            Self::Manual => "Manual Irrigation",
            Self::Settings => "Settings",
        }
    }
}

/// Global application state
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Currently mounted screen
    pub screen: Signal<Screen>,
    /// HTTP client for the controller backend
    pub api: Signal<ControllerClient>,
    /// Identity the controller scopes records by
    pub user_id: u64,
}

impl AppContext {
    /// Returns a clone of the controller client for use in an async task.
    pub fn client(&self) -> ControllerClient {
        (self.api)()
    }

    /// Navigates to another screen, dropping the current one and any of its
    /// in-flight requests.
    pub fn navigate(&mut self, screen: Screen) {
        self.screen.set(screen);
    }
}
