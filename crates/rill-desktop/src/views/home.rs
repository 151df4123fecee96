//! Home view - splash and destination carousel

use std::time::Duration;

use dioxus::prelude::*;

use crate::state::{AppContext, Screen};
use crate::theme::PALETTE;

/// How long the splash stays up before the carousel appears.
const SPLASH_DELAY: Duration = Duration::from_millis(2000);

/// Fade-out time before the carousel swaps slides.
const SLIDE_TRANSITION: Duration = Duration::from_millis(500);

/// One destination slide of the carousel.
struct Slide {
    glyph: &'static str,
    title: &'static str,
    description: &'static str,
    target: Screen,
}

const SLIDES: [Slide; 3] = [
    Slide {
        glyph: "⏰",
        title: "Irrigation Timer",
        description: "Irrigation timers automate watering, ensuring plants receive the right \
                      amount of water at the right time.",
        target: Screen::Timer,
    },
    Slide {
        glyph: "💧",
        title: "Manual Irrigation",
        description: "Manual irrigation allows you to control watering schedules and amounts \
                      by hand whenever you need it.",
        target: Screen::Manual,
    },
    Slide {
        glyph: "⚙️",
        title: "Settings",
        description: "Configure your irrigation system settings for optimal performance and \
                      efficiency.",
        target: Screen::Settings,
    },
];

/// Landing screen. Plays a short splash on every visit, then offers the
/// three destinations as a wrapping carousel.
#[component]
pub fn Home() -> Element {
    let mut context = use_context::<AppContext>();
    let mut show_splash = use_signal(|| true);
    let mut selected_slide = use_signal(|| 0usize);
    let mut transitioning = use_signal(|| false);

    use_future(move || async move {
        tokio::time::sleep(SPLASH_DELAY).await;
        show_splash.set(false);
    });

    if show_splash() {
        return rsx! {
            div {
                style: "display: flex; flex-direction: column; justify-content: center; align-items: center; min-height: 100vh; gap: 20px;",
                span { class: "splash-glyph", "💧" }
                h1 {
                    style: "color: {PALETTE.text_primary}; font-size: 28px; margin: 0;",
                    {Screen::Home.title()}
                }
            }
        };
    }

    let on_previous = move |_| {
        if transitioning() {
            return;
        }
        transitioning.set(true);
        spawn(async move {
            tokio::time::sleep(SLIDE_TRANSITION).await;
            selected_slide.set(previous_index(selected_slide(), SLIDES.len()));
            transitioning.set(false);
        });
    };

    let on_next = move |_| {
        if transitioning() {
            return;
        }
        transitioning.set(true);
        spawn(async move {
            tokio::time::sleep(SLIDE_TRANSITION).await;
            selected_slide.set(next_index(selected_slide(), SLIDES.len()));
            transitioning.set(false);
        });
    };

    let on_choose = move |_| context.navigate(SLIDES[selected_slide()].target);

    let slide = &SLIDES[selected_slide()];
    let content_opacity = if transitioning() { "0" } else { "1" };

    rsx! {
        div {
            style: "display: flex; flex-direction: column; justify-content: center; align-items: center; min-height: 100vh; padding: 0 24px; text-align: center;",

            div {
                style: "display: flex; justify-content: center; gap: 8px; margin-bottom: 18px;",
                for index in 0..SLIDES.len() {
                    span {
                        key: "{index}",
                        class: if index == selected_slide() { "carousel-dot carousel-dot-active" } else { "carousel-dot" },
                    }
                }
            }

            div {
                style: "display: flex; align-items: center; justify-content: space-between; width: 100%;",
                button {
                    class: "icon-button",
                    onclick: on_previous,
                    "‹"
                }
                div {
                    style: "opacity: {content_opacity}; transition: opacity 0.5s ease-in-out; padding: 0 8px;",
                    div { style: "font-size: 56px;", "{slide.glyph}" }
                    h2 {
                        style: "color: {PALETTE.text_primary}; font-size: 22px; margin: 12px 0 8px;",
                        "{slide.title}"
                    }
                    p {
                        style: "color: {PALETTE.text_muted}; font-size: 14px; margin: 0;",
                        "{slide.description}"
                    }
                }
                button {
                    class: "icon-button",
                    onclick: on_next,
                    "›"
                }
            }

            button {
                class: "primary-button",
                style: "margin-top: 28px;",
                onclick: on_choose,
                "Choose"
            }
        }
    }
}

const fn next_index(current: usize, count: usize) -> usize {
    if current + 1 >= count {
        0
    } else {
        current + 1
    }
}

const fn previous_index(current: usize, count: usize) -> usize {
    if current == 0 {
        count.saturating_sub(1)
    } else {
        current - 1
    }
}
