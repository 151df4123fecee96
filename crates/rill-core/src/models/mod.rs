//! State records exchanged with the controller backend

mod choices;
mod manual;
mod settings;
mod timer;
mod wire;

pub use choices::{duration_choices, hour_choices, minute_choices, percentage_choices};
pub use manual::ManualState;
pub use settings::{ValvePosition, ValveSettings};
pub use timer::TimerState;
