//! rill-core - Core library for Rill
//!
//! This crate contains the per-screen state records, the wire codec for the
//! controller backend's legacy JSON encoding, the HTTP client, and runtime
//! configuration shared by all Rill interfaces.

pub mod api;
pub mod config;
pub mod error;
pub mod models;

pub use api::{ControllerClient, Page};
pub use config::AppConfig;
pub use error::{Error, Result};
pub use models::{ManualState, TimerState, ValvePosition, ValveSettings};
