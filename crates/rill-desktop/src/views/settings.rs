//! Settings view - valve opening amount and resting position

use dioxus::prelude::*;

use rill_core::models::percentage_choices;
use rill_core::{Page, ValvePosition, ValveSettings};

use crate::components::toast::use_toast;
use crate::components::{
    number_options, parse_selection, percent_label, BackButton, ChoiceSelect, LoadFailureNotice,
    LoadingIndicator,
};
use crate::remote_form::use_remote_form;
use crate::state::{AppContext, Screen};
use crate::theme::PALETTE;

#[component]
pub fn SettingsScreen() -> Element {
    let context = use_context::<AppContext>();
    let toasts = use_toast();

    let mut valve_opening_amount = use_signal(|| None::<u32>);
    let mut default_open = use_signal(|| None::<ValvePosition>);

    let mut form = use_remote_form(
        Page::Settings,
        move || {
            let api = context.client();
            let user_id = context.user_id;
            async move { api.valve_settings(user_id).await }
        },
        move |settings: ValveSettings| {
            valve_opening_amount.set(settings.valve_opening_amount);
            default_open.set(settings.default_open);
        },
    );

    if form.is_loading() {
        return rsx! {
            LoadingIndicator {}
        };
    }

    let on_submit = move |_| {
        let snapshot = ValveSettings {
            valve_opening_amount: valve_opening_amount(),
            default_open: default_open(),
        };
        let api = context.client();
        let user_id = context.user_id;
        form.submit(
            toasts,
            Page::Settings,
            "Settings saved",
            "Could not save settings. Check the connection and try again.",
            async move { api.save_valve_settings(user_id, &snapshot).await },
        );
    };

    let saving = form.is_saving();

    rsx! {
        div {
            style: "position: relative; min-height: 100vh; padding: 16px 24px;",
            BackButton {}
            h2 {
                style: "color: {PALETTE.text_primary}; text-align: center; margin-top: 56px;",
                {Screen::Settings.title()}
            }
            if form.load_failed() {
                LoadFailureNotice {
                    recoverable: form.can_retry(),
                    on_retry: move |()| form.retry(),
                }
            }
            div {
                style: "display: flex; flex-direction: column; align-items: center; gap: 12px; margin-top: 28px;",

                p { class: "section-heading", "Select Valve Opening Amount" }
                ChoiceSelect {
                    placeholder: "Select Percentage",
                    value: valve_opening_amount().map(|amount| amount.to_string()),
                    options: number_options(&percentage_choices(), percent_label),
                    disabled: saving,
                    on_change: move |raw: String| valve_opening_amount.set(parse_selection(&raw)),
                }

                p { class: "section-heading", "Select Valve State" }
                ChoiceSelect {
                    placeholder: "Select Valve State",
                    value: default_open().map(|position| position.as_wire().to_string()),
                    options: valve_options(),
                    disabled: saving,
                    on_change: move |raw: String| default_open.set(ValvePosition::from_wire(&raw)),
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

/// The two resting positions, paired with their stored encodings.
fn valve_options() -> Vec<(String, String)> {
    [ValvePosition::NormallyOpen, ValvePosition::NormallyClosed]
        .into_iter()
        .map(|position| (position.as_wire().to_string(), position.label().to_string()))
        .collect()
}
