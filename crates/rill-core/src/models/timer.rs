//! Scheduled-watering record for the timer screen

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::wire;

/// Timer configuration, stored wholesale by the controller backend.
///
/// Every field is optional: the backend returns whatever was last saved,
/// and a fresh account has nothing selected yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerState {
    /// First day watering should run
    #[serde(default, with = "wire::opt_date")]
    pub selected_date: Option<NaiveDate>,
    /// Time of day watering should start
    #[serde(default, with = "wire::opt_time")]
    pub selected_time: Option<NaiveTime>,
    /// Repeat period, hour component (0-23)
    #[serde(default, with = "wire::opt_number")]
    pub selected_hours: Option<u32>,
    /// Repeat period, minute component (0-59)
    #[serde(default, with = "wire::opt_number")]
    pub selected_minutes: Option<u32>,
    /// Length of each watering run, in minutes
    #[serde(default, with = "wire::opt_number")]
    pub selected_duration: Option<u32>,
}
