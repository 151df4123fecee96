//! Manual view - trigger a one-off watering run

use dioxus::prelude::*;

use rill_core::models::duration_choices;
use rill_core::{ManualState, Page};

use crate::components::toast::use_toast;
use crate::components::{
    minutes_label, number_options, parse_selection, BackButton, ChoiceSelect, LoadFailureNotice,
    LoadingIndicator,
};
use crate::remote_form::use_remote_form;
use crate::state::{AppContext, Screen};
use crate::theme::PALETTE;

#[component]
pub fn ManualScreen() -> Element {
    let context = use_context::<AppContext>();
    let toasts = use_toast();

    let mut selected_duration = use_signal(|| None::<u32>);

    let mut form = use_remote_form(
        Page::Manual,
        move || {
            let api = context.client();
            let user_id = context.user_id;
            async move { api.manual_state(user_id).await }
        },
        move |state: ManualState| {
            selected_duration.set(state.selected_duration);
        },
    );

    if form.is_loading() {
        return rsx! {
            LoadingIndicator {}
        };
    }

    let on_submit = move |_| {
        let snapshot = ManualState {
            selected_duration: selected_duration(),
        };
        let api = context.client();
        let user_id = context.user_id;
        form.submit(
            toasts,
            Page::Manual,
            "Manual irrigation settings saved",
            "Could not save manual irrigation settings. Check the connection and try again.",
            async move { api.save_manual_state(user_id, &snapshot).await },
        );
    };

    let saving = form.is_saving();

    rsx! {
        div {
            style: "position: relative; min-height: 100vh; padding: 16px 24px;",
            BackButton {}
            h2 {
                style: "color: {PALETTE.text_primary}; text-align: center; margin-top: 56px;",
                {Screen::Manual.title()}
            }
            if form.load_failed() {
                LoadFailureNotice {
                    recoverable: form.can_retry(),
                    on_retry: move |()| form.retry(),
                }
            }
            div {
                style: "display: flex; flex-direction: column; align-items: center; gap: 12px; margin-top: 28px;",

                p { class: "section-heading", "Select Irrigation Duration" }
                ChoiceSelect {
                    placeholder: "Select Minutes",
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
