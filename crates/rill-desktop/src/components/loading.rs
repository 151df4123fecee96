//! Loading and load-failure affordances for the form screens

use dioxus::prelude::*;

use crate::theme::PALETTE;

/// Centered spinner shown while a screen's stored record is being fetched.
#[component]
pub fn LoadingIndicator() -> Element {
    rsx! {
        div {
            style: "display: flex; justify-content: center; align-items: center; min-height: 100vh;",
            div { class: "spinner" }
        }
    }
}

/// Banner shown when the initial load settled without a record.
///
/// The screen underneath stays usable with default selections; the banner
/// only offers a retry when one can plausibly succeed.
#[component]
pub fn LoadFailureNotice(recoverable: bool, on_retry: EventHandler<()>) -> Element {
    rsx! {
        div {
            style: "margin: 18px 0 0; padding: 10px 14px; border: 1px solid {PALETTE.error}; border-radius: 8px; display: flex; align-items: center; justify-content: space-between; gap: 12px;",
            span {
                style: "color: {PALETTE.error}; font-size: 14px; text-align: left;",
                "Couldn't load your saved settings. Showing defaults."
            }
            if recoverable {
                button {
                    class: "retry-button",
                    onclick: move |_| on_retry.call(()),
                    "Retry"
                }
            }
        }
    }
}
