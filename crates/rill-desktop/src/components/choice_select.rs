//! Dropdown selector shared by the form screens.
//!
//! Mirrors the stored-value convention of the backend: the placeholder row
//! carries the empty string, so an unset field and an untouched dropdown are
//! the same thing.

use dioxus::prelude::*;

#[component]
pub fn ChoiceSelect(
    placeholder: &'static str,
    value: Option<String>,
    options: Vec<(String, String)>,
    disabled: bool,
    on_change: EventHandler<String>,
) -> Element {
    let current = value.unwrap_or_default();

    rsx! {
        select {
            class: "field-control",
            value: "{current}",
            disabled: disabled,
            onchange: move |event: Event<FormData>| on_change.call(event.value()),
            option {
                value: "",
                disabled: true,
                selected: current.is_empty(),
                "{placeholder}"
            }
            for (choice, label) in options {
                option {
                    key: "{choice}",
                    value: "{choice}",
                    selected: choice == current,
                    "{label}"
                }
            }
        }
    }
}

/// Builds `(wire value, label)` option pairs for a numeric range.
pub fn number_options(choices: &[u32], label: impl Fn(u32) -> String) -> Vec<(String, String)> {
    choices
        .iter()
        .map(|&choice| (choice.to_string(), label(choice)))
        .collect()
}

/// Parses a dropdown change value; the empty placeholder maps to unset.
pub fn parse_selection(raw: &str) -> Option<u32> {
    let raw = raw.trim();
    if raw.is_empty() {
        None
    } else {
        raw.parse().ok()
    }
}

/// Duration and minute-component labels, e.g. "15 minutes".
pub fn minutes_label(minutes: u32) -> String {
    if minutes == 1 {
        "1 minute".to_string()
    } else {
        format!("{minutes} minutes")
    }
}

/// Hour-component labels, e.g. "2 hours".
pub fn hours_label(hours: u32) -> String {
    if hours == 1 {
        "1 hour".to_string()
    } else {
        format!("{hours} hours")
    }
}

/// Valve opening labels, e.g. "50%".
pub fn percent_label(percent: u32) -> String {
    format!("{percent}%")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_options_pair_wire_values_with_labels() {
        let options = number_options(&[5, 10], minutes_label);
        assert_eq!(
            options,
            vec![
                ("5".to_string(), "5 minutes".to_string()),
                ("10".to_string(), "10 minutes".to_string()),
            ]
        );
    }

    #[test]
    fn a_stored_duration_renders_as_minutes() {
        assert_eq!(minutes_label(15), "15 minutes");
        assert_eq!(minutes_label(1), "1 minute");
    }

    #[test]
    fn hour_labels_pluralize() {
        assert_eq!(hours_label(0), "0 hours");
        assert_eq!(hours_label(1), "1 hour");
        assert_eq!(hours_label(23), "23 hours");
    }

    #[test]
    fn a_stored_opening_amount_renders_as_a_percentage() {
        assert_eq!(percent_label(50), "50%");
    }

    #[test]
    fn parse_selection_maps_the_placeholder_to_unset() {
        assert_eq!(parse_selection(""), None);
        assert_eq!(parse_selection("  "), None);
        assert_eq!(parse_selection("45"), Some(45));
        assert_eq!(parse_selection("soon"), None);
    }
}
