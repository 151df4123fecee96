//! HTTP client for the irrigation controller backend.
//!
//! The backend persists one flat JSON record per user and screen. Reads
//! return the last-saved record and writes replace it wholesale, so this
//! client only ever moves whole records.

use std::fmt;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::normalize_base_url;
use crate::error::{Error, Result};
use crate::models::{ManualState, TimerState, ValveSettings};

/// Per-request timeout. The backend is a small hosted service that either
/// answers quickly or not at all.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Longest response-body excerpt carried into a rejection error.
const DETAIL_LIMIT: usize = 180;

/// The three controller-backed screens, as the backend routes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Timer,
    Manual,
    Settings,
}

impl Page {
    /// Route prefix shared by both endpoints of this page.
    pub const fn route_prefix(self) -> &'static str {
        match self {
            Self::Timer => "timer_page",
            Self::Manual => "manual_page",
            Self::Settings => "settings_page",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Timer => "timer",
            Self::Manual => "manual",
            Self::Settings => "settings",
        })
    }
}

/// Write envelope: the full record plus the user it belongs to.
#[derive(Debug, Serialize)]
struct StatePayload<'a, T: Serialize> {
    user_id: u64,
    #[serde(flatten)]
    state: &'a T,
}

/// HTTP client for the controller backend.
#[derive(Debug, Clone)]
pub struct ControllerClient {
    base_url: String,
    client: reqwest::Client,
}

impl ControllerClient {
    /// Builds a client for an explicit controller base URL.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = normalize_base_url(base_url.into().as_str())?;
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { base_url, client })
    }

    /// Returns the base URL this client was configured with.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches the last-saved timer record for `user_id`.
    pub async fn timer_state(&self, user_id: u64) -> Result<TimerState> {
        self.get_state(Page::Timer, user_id).await
    }

    /// Replaces the stored timer record for `user_id`.
    pub async fn save_timer_state(&self, user_id: u64, state: &TimerState) -> Result<()> {
        self.set_state(Page::Timer, user_id, state).await
    }

    /// Fetches the last-saved manual irrigation record for `user_id`.
    pub async fn manual_state(&self, user_id: u64) -> Result<ManualState> {
        self.get_state(Page::Manual, user_id).await
    }

    /// Replaces the stored manual irrigation record for `user_id`.
    pub async fn save_manual_state(&self, user_id: u64, state: &ManualState) -> Result<()> {
        self.set_state(Page::Manual, user_id, state).await
    }

    /// Fetches the last-saved valve settings for `user_id`.
    pub async fn valve_settings(&self, user_id: u64) -> Result<ValveSettings> {
        self.get_state(Page::Settings, user_id).await
    }

    /// Replaces the stored valve settings for `user_id`.
    pub async fn save_valve_settings(&self, user_id: u64, settings: &ValveSettings) -> Result<()> {
        self.set_state(Page::Settings, user_id, settings).await
    }

    async fn get_state<T: DeserializeOwned>(&self, page: Page, user_id: u64) -> Result<T> {
        let url = format!(
            "{}/{}/get_state?user_id={user_id}",
            self.base_url,
            page.route_prefix()
        );
        tracing::debug!("Fetching {page} state for user {user_id}");

        let response = self.client.get(url).send().await?;
        let response = check_status(response).await?;
        response
            .json()
            .await
            .map_err(|error| Error::Decode(error.to_string()))
    }

    async fn set_state<T: Serialize>(&self, page: Page, user_id: u64, state: &T) -> Result<()> {
        let url = format!("{}/{}/set_state", self.base_url, page.route_prefix());
        tracing::debug!("Saving {page} state for user {user_id}");

        let response = self
            .client
            .post(url)
            .json(&StatePayload { user_id, state })
            .send()
            .await?;
        check_status(response).await?;
        Ok(())
    }
}

async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(Error::Rejected {
        status: status.as_u16(),
        detail: compact_detail(&body),
    })
}

/// Trims and truncates a response body for inclusion in an error message.
fn compact_detail(body: &str) -> String {
    body.trim().chars().take(DETAIL_LIMIT).collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn route_prefixes_match_the_backend() {
        assert_eq!(Page::Timer.route_prefix(), "timer_page");
        assert_eq!(Page::Manual.route_prefix(), "manual_page");
        assert_eq!(Page::Settings.route_prefix(), "settings_page");
    }

    #[test]
    fn write_envelope_carries_the_user_and_the_whole_record() {
        let state = ManualState {
            selected_duration: Some(15),
        };
        let payload = serde_json::to_value(StatePayload {
            user_id: 1,
            state: &state,
        })
        .unwrap();

        assert_eq!(
            payload,
            json!({
                "user_id": 1,
                "selected_duration": 15,
            })
        );
    }

    #[test]
    fn write_envelope_keeps_unset_fields() {
        let payload = serde_json::to_value(StatePayload {
            user_id: 1,
            state: &ManualState::default(),
        })
        .unwrap();

        assert_eq!(
            payload,
            json!({
                "user_id": 1,
                "selected_duration": "",
            })
        );
    }

    #[test]
    fn new_normalizes_the_base_url() {
        let client = ControllerClient::new("https://controller.example.com/").unwrap();
        assert_eq!(client.base_url(), "https://controller.example.com");
    }

    #[test]
    fn new_rejects_unusable_base_urls() {
        assert!(matches!(
            ControllerClient::new("controller.example.com"),
            Err(Error::InvalidBaseUrl(_))
        ));
        assert!(matches!(
            ControllerClient::new("   "),
            Err(Error::InvalidBaseUrl(_))
        ));
    }

    #[test]
    fn compact_detail_trims_and_truncates() {
        assert_eq!(compact_detail("  not found  "), "not found");

        let long = "x".repeat(500);
        assert_eq!(compact_detail(&long).len(), DETAIL_LIMIT);
    }
}
