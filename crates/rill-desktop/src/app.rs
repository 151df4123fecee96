//! Root application component
//!
//! Builds the controller client from configuration, provides the shared
//! context, and swaps the mounted screen.

use dioxus::prelude::*;

use rill_core::api::ControllerClient;
use rill_core::AppConfig;

use crate::components::toast::{use_toast_provider, ToastFrame};
use crate::state::{AppContext, Screen};
use crate::theme::PALETTE;
use crate::views::{Home, ManualScreen, SettingsScreen, TimerScreen};

/// Styles for classed elements; injected once at the shell root.
const APP_STYLES: &str = r#"
* { box-sizing: border-box; }
body { margin: 0; background: #ffffff; }

@keyframes rill-spin {
    from { transform: rotate(0deg); }
    to { transform: rotate(360deg); }
}

.splash-glyph {
    font-size: 84px;
    animation: rill-spin 2s linear infinite;
}

.spinner {
    width: 44px;
    height: 44px;
    border: 4px solid #aec1ca;
    border-top-color: #84a7b8;
    border-radius: 50%;
    animation: rill-spin 1s linear infinite;
}

.carousel-dot {
    width: 10px;
    height: 10px;
    border-radius: 50%;
    background: #aec1ca;
    display: inline-block;
}
.carousel-dot-active { background: #84a7b8; }

.icon-button {
    background: transparent;
    border: none;
    font-size: 26px;
    color: #555555;
    cursor: pointer;
    padding: 4px 10px;
}

.primary-button {
    background: linear-gradient(45deg, #84a7b8 30%, #aec1ca 90%);
    color: #ffffff;
    border: none;
    border-radius: 50px;
    padding: 12px 36px;
    font-size: 16px;
    font-family: inherit;
    cursor: pointer;
    box-shadow: 0 3px 5px 2px rgba(110, 138, 152, 0.3);
}
.primary-button:hover:enabled {
    background: linear-gradient(45deg, #aec1ca 30%, #84a7b8 90%);
}
.primary-button:disabled {
    opacity: 0.6;
    cursor: default;
}

.section-heading {
    color: #333333;
    font-size: 16px;
    font-weight: 600;
    margin: 10px 0 0;
}

.field-control {
    width: 100%;
    max-width: 300px;
    padding: 11px 12px;
    border: 1px solid #aec1ca;
    border-radius: 8px;
    font-size: 15px;
    font-family: inherit;
    color: #333333;
    background: #ffffff;
}

.retry-button {
    background: transparent;
    border: 1px solid #b3452e;
    border-radius: 50px;
    color: #b3452e;
    padding: 6px 16px;
    font-size: 13px;
    font-family: inherit;
    cursor: pointer;
}

.toast-container {
    position: fixed;
    bottom: 18px;
    left: 50%;
    transform: translateX(-50%);
    display: flex;
    flex-direction: column;
    gap: 8px;
    z-index: 1000;
}

.toast {
    display: flex;
    align-items: center;
    gap: 10px;
    min-width: 260px;
    max-width: 380px;
    padding: 10px 14px;
    border-radius: 8px;
    color: #ffffff;
    box-shadow: 0 3px 8px rgba(0, 0, 0, 0.25);
    font-size: 14px;
}
.toast-success { background: #84a7b8; }
.toast-error { background: #b3452e; }

.toast-message { flex: 1; text-align: left; }

.toast-close {
    background: transparent;
    border: none;
    color: #ffffff;
    font-size: 14px;
    cursor: pointer;
    padding: 0;
}
"#;

/// Root component
#[component]
pub fn App() -> Element {
    let config = use_hook(AppConfig::resolve);
    let user_id = config.user_id;
    let base_url = config.controller_base_url.clone();
    let startup = use_hook(move || {
        ControllerClient::new(base_url).map_err(|error| {
            tracing::error!("Failed to construct controller client: {error}");
            error.to_string()
        })
    });
    let screen = use_signal(Screen::default);
    use_toast_provider();

    // The branch is fixed for the lifetime of the component, so hook order
    // stays stable across renders.
    let api = match startup {
        Ok(api) => api,
        Err(message) => {
            return rsx! {
                style { "{APP_STYLES}" }
                div {
                    style: "display: flex; flex-direction: column; justify-content: center; align-items: center; min-height: 100vh; padding: 24px; text-align: center;",
                    h2 { style: "color: {PALETTE.error};", "Rill could not start" }
                    p { style: "color: {PALETTE.text_muted};", "{message}" }
                }
            };
        }
    };

    use_context_provider(|| AppContext {
        screen,
        api: Signal::new(api),
        user_id,
    });

    let current = screen();

    rsx! {
        style { "{APP_STYLES}" }
        div {
            style: "font-family: 'Nunito', 'Segoe UI', system-ui, sans-serif; color: {PALETTE.text_primary}; max-width: 420px; margin: 0 auto;",
            if current == Screen::Home {
                Home {}
            } else if current == Screen::Timer {
                TimerScreen {}
            } else if current == Screen::Manual {
                ManualScreen {}
            } else {
                SettingsScreen {}
            }
            ToastFrame {}
        }
    }
}
