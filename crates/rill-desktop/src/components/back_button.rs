//! Back-to-home control shown on every form screen

use dioxus::prelude::*;

use crate::state::{AppContext, Screen};
use crate::theme::PALETTE;

#[component]
pub fn BackButton() -> Element {
    let mut context = use_context::<AppContext>();

    rsx! {
        button {
            class: "icon-button",
            style: "position: absolute; top: 18px; left: 14px; font-size: 26px; color: {PALETTE.text_primary};",
            onclick: move |_| context.navigate(Screen::Home),
            "‹"
        }
    }
}
