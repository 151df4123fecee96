//! Screens
//!
//! One module per screen reachable from the navigation shell.

mod home;
mod manual;
mod settings;
mod timer;

pub use home::Home;
pub use manual::ManualScreen;
pub use settings::SettingsScreen;
pub use timer::TimerScreen;
