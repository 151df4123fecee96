//! UI Components
//!
//! Reusable UI components for the desktop application.

mod back_button;
mod choice_select;
mod loading;
pub mod toast;

pub use back_button::BackButton;
pub use choice_select::{
    hours_label, minutes_label, number_options, parse_selection, percent_label, ChoiceSelect,
};
pub use loading::{LoadFailureNotice, LoadingIndicator};
