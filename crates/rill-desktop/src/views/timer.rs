//! Timer view - schedule a watering window and its repeat period

use chrono::{NaiveDate, NaiveTime};
use dioxus::prelude::*;

use rill_core::models::{duration_choices, hour_choices, minute_choices};
use rill_core::{Page, TimerState};

use crate::components::toast::use_toast;
use crate::components::{
    hours_label, minutes_label, number_options, parse_selection, BackButton, ChoiceSelect,
    LoadFailureNotice, LoadingIndicator,
};
use crate::remote_form::use_remote_form;
use crate::state::{AppContext, Screen};
use crate::theme::PALETTE;

#[component]
pub fn TimerScreen() -> Element {
    let context = use_context::<AppContext>();
    let toasts = use_toast();

    let mut selected_date = use_signal(|| None::<NaiveDate>);
    let mut selected_time = use_signal(|| None::<NaiveTime>);
    let mut selected_hours = use_signal(|| None::<u32>);
    let mut selected_minutes = use_signal(|| None::<u32>);
    let mut selected_duration = use_signal(|| None::<u32>);

    let mut form = use_remote_form(
        Page::Timer,
        move || {
            let api = context.client();
            let user_id = context.user_id;
            async move { api.timer_state(user_id).await }
        },
        move |state: TimerState| {
            selected_date.set(state.selected_date);
            selected_time.set(state.selected_time);
            selected_hours.set(state.selected_hours);
            selected_minutes.set(state.selected_minutes);
            selected_duration.set(state.selected_duration);
        },
    );

    if form.is_loading() {
        return rsx! {
            LoadingIndicator {}
        };
    }

    let on_submit = move |_| {
        let snapshot = TimerState {
            selected_date: selected_date(),
            selected_time: selected_time(),
            selected_hours: selected_hours(),
            selected_minutes: selected_minutes(),
            selected_duration: selected_duration(),
        };
        let api = context.client();
        let user_id = context.user_id;
        form.submit(
            toasts,
            Page::Timer,
            "Timer settings saved",
            "Could not save timer settings. Check the connection and try again.",
            async move { api.save_timer_state(user_id, &snapshot).await },
        );
    };

    let date_value = selected_date()
        .map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_default();
    let time_value = selected_time()
        .map(|time| time.format("%H:%M").to_string())
        .unwrap_or_default();
    let saving = form.is_saving();

    rsx! {
        div {
            style: "position: relative; min-height: 100vh; padding: 16px 24px;",
            BackButton {}
            h2 {
                style: "color: {PALETTE.text_primary}; text-align: center; margin-top: 56px;",
                {Screen::Timer.title()}
            }
            if form.load_failed() {
                LoadFailureNotice {
                    recoverable: form.can_retry(),
                    on_retry: move |()| form.retry(),
                }
            }
            div {
                style: "display: flex; flex-direction: column; align-items: center; gap: 12px; margin-top: 28px;",

                p { class: "section-heading", "Select Date And Time" }
                input {
                    class: "field-control",
                    r#type: "date",
                    value: "{date_value}",
                    disabled: saving,
                    oninput: move |event: Event<FormData>| {
                        selected_date.set(parse_date_input(&event.value()));
                    },
                }
                input {
                    class: "field-control",
                    r#type: "time",
                    value: "{time_value}",
                    disabled: saving,
                    oninput: move |event: Event<FormData>| {
                        selected_time.set(parse_time_input(&event.value()));
                    },
                }

                p { class: "section-heading", "Select Period" }
                ChoiceSelect {
                    placeholder: "Select Hours",
                    value: selected_hours().map(|hours| hours.to_string()),
                    options: number_options(&hour_choices(), hours_label),
                    disabled: saving,
                    on_change: move |raw: String| selected_hours.set(parse_selection(&raw)),
                }
                ChoiceSelect {
                    placeholder: "Select Minutes",
                    value: selected_minutes().map(|minutes| minutes.to_string()),
                    options: number_options(&minute_choices(), minutes_label),
                    disabled: saving,
                    on_change: move |raw: String| selected_minutes.set(parse_selection(&raw)),
                }

                p { class: "section-heading", "Select Irrigation Duration" }
                ChoiceSelect {
                    placeholder: "Select Duration",
                    value: selected_duration().map(|duration| duration.to_string()),
                    options: number_options(&duration_choices(), minutes_label),
                    disabled: saving,
                    on_change: move |raw: String| selected_duration.set(parse_selection(&raw)),
                }

                button {
                    class: "primary-button",
                    style: "margin-top: 16px;",
                    disabled: saving,
                    onclick: on_submit,
                    if saving { "Saving..." } else { "Submit" }
                }
            }
        }
    }
}

/// Parses a date input value; clearing the picker maps to unset.
fn parse_date_input(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

/// Parses a time input value. Browsers report `HH:MM`, or `HH:MM:SS` when
/// seconds are shown.
fn parse_time_input(raw: &str) -> Option<NaiveTime> {
    let raw = raw.trim();
    NaiveTime::parse_from_str(raw, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_input_values_parse_and_clear() {
        assert_eq!(
            parse_date_input("2024-05-01"),
            NaiveDate::from_ymd_opt(2024, 5, 1)
        );
        assert_eq!(parse_date_input(""), None);
        assert_eq!(parse_date_input("01/05/2024"), None);
    }

    #[test]
    fn time_input_values_parse_with_and_without_seconds() {
        assert_eq!(
            parse_time_input("06:30"),
            NaiveTime::from_hms_opt(6, 30, 0)
        );
        assert_eq!(
            parse_time_input("06:30:45"),
            NaiveTime::from_hms_opt(6, 30, 45)
        );
        assert_eq!(parse_time_input(""), None);
    }
}
