//! Rill Desktop Application
//!
//! Companion app for a remote irrigation controller: schedule watering,
//! trigger manual runs, and tune valve behavior.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod components;
mod remote_form;
mod state;
mod theme;
mod views;

use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

fn main() {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("rill_core=debug".parse().unwrap())
                .add_directive("rill_desktop=debug".parse().unwrap()),
        )
        .init();

    tracing::info!("Starting Rill...");

    // Phone-shaped window; the layout is a single centered column
    let window = WindowBuilder::new()
        .with_title("Rill")
        .with_inner_size(LogicalSize::new(420.0, 780.0));
    let config = Config::new().with_window(window);

    // Launch the app
    dioxus::LaunchBuilder::new()
        .with_cfg(config)
        .launch(app::App);
}
