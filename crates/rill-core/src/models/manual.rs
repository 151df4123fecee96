//! One-off watering record for the manual screen

use serde::{Deserialize, Serialize};

use super::wire;

/// Manual irrigation configuration, a single duration selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManualState {
    /// Length of the manual watering run, in minutes
    #[serde(default, with = "wire::opt_number")]
    pub selected_duration: Option<u32>,
}
