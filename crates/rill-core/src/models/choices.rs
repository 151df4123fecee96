//! Fixed selector ranges for the form screens.
//!
//! These ranges are client-side configuration; the backend stores whatever
//! value was picked but never drives what is offered.

/// Watering durations offered by the timer and manual screens, in minutes.
/// Five-minute steps from 5 to 120.
pub fn duration_choices() -> Vec<u32> {
    (1..=24).map(|step| step * 5).collect()
}

/// Hour component choices for the timer repeat period, 0 through 23.
pub fn hour_choices() -> Vec<u32> {
    (0..24).collect()
}

/// Minute component choices for the timer repeat period, 0 through 59.
pub fn minute_choices() -> Vec<u32> {
    (0..60).collect()
}

/// Valve opening percentages offered by the settings screen.
/// Five-percent steps from 5 to 100.
pub fn percentage_choices() -> Vec<u32> {
    (1..=20).map(|step| step * 5).collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn durations_run_from_five_minutes_to_two_hours_in_fives() {
        let durations = duration_choices();
        assert_eq!(durations.len(), 24);
        assert_eq!(durations.first(), Some(&5));
        assert_eq!(durations.last(), Some(&120));
        assert!(durations.windows(2).all(|pair| pair[1] - pair[0] == 5));
    }

    #[test]
    fn period_components_cover_a_full_day_and_hour() {
        assert_eq!(hour_choices().len(), 24);
        assert_eq!(hour_choices().first(), Some(&0));
        assert_eq!(hour_choices().last(), Some(&23));

        assert_eq!(minute_choices().len(), 60);
        assert_eq!(minute_choices().last(), Some(&59));
    }

    #[test]
    fn percentages_run_from_five_to_one_hundred_in_fives() {
        let percentages = percentage_choices();
        assert_eq!(percentages.len(), 20);
        assert_eq!(percentages.first(), Some(&5));
        assert_eq!(percentages.last(), Some(&100));
    }
}
