//! Valve configuration record for the settings screen

use serde::{Deserialize, Serialize};

use super::wire;

/// Resting position of the irrigation valve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValvePosition {
    /// Valve passes water unless told otherwise
    NormallyOpen,
    /// Valve blocks water unless told otherwise
    NormallyClosed,
}

impl ValvePosition {
    /// Encoding used by the controller backend.
    pub const fn as_wire(self) -> &'static str {
        match self {
            Self::NormallyOpen => "1",
            Self::NormallyClosed => "0",
        }
    }

    /// Decode the backend encoding; anything unknown is treated as unset.
    pub fn from_wire(raw: &str) -> Option<Self> {
        match raw.trim() {
            "1" => Some(Self::NormallyOpen),
            "0" => Some(Self::NormallyClosed),
            _ => None,
        }
    }

    /// Name shown in the valve state dropdown.
    pub const fn label(self) -> &'static str {
        match self {
            Self::NormallyOpen => "Normally Open",
            Self::NormallyClosed => "Normally Closed",
        }
    }
}

/// Valve behavior settings, stored wholesale by the controller backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValveSettings {
    /// How far the valve opens, in percent (5-100 in steps of 5)
    #[serde(default, with = "wire::opt_number")]
    pub valve_opening_amount: Option<u32>,
    /// Resting valve position
    #[serde(default, with = "wire::valve_position")]
    pub default_open: Option<ValvePosition>,
}
