//! Runtime configuration for clients of the controller backend.

use crate::error::{Error, Result};

/// Hosted controller backend used when no override is configured.
pub const DEFAULT_CONTROLLER_URL: &str = "https://flask-backend-app-7pvn.onrender.com";

/// Stand-in identity until the controller grows real accounts.
pub const DEFAULT_USER_ID: u64 = 1;

const CONTROLLER_URL_VAR: &str = "RILL_CONTROLLER_URL";
const USER_ID_VAR: &str = "RILL_USER_ID";

/// Where each screen's HTTP client points and who it acts as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub controller_base_url: String,
    pub user_id: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            controller_base_url: DEFAULT_CONTROLLER_URL.to_string(),
            user_id: DEFAULT_USER_ID,
        }
    }
}

impl AppConfig {
    /// Resolve configuration from the process environment.
    ///
    /// Unset variables fall back to the defaults; set-but-invalid values are
    /// logged and then fall back too, so a bad override never takes the app
    /// down.
    pub fn resolve() -> Self {
        Self::from_values(
            std::env::var(CONTROLLER_URL_VAR).ok(),
            std::env::var(USER_ID_VAR).ok(),
        )
    }

    pub fn from_values(base_url: Option<String>, user_id: Option<String>) -> Self {
        let controller_base_url = match normalize_text_option(base_url) {
            Some(raw) => match normalize_base_url(&raw) {
                Ok(url) => url,
                Err(error) => {
                    tracing::warn!("Ignoring {CONTROLLER_URL_VAR}: {error}");
                    DEFAULT_CONTROLLER_URL.to_string()
                }
            },
            None => DEFAULT_CONTROLLER_URL.to_string(),
        };

        let user_id = match normalize_text_option(user_id) {
            Some(raw) => match raw.parse() {
                Ok(id) => id,
                Err(_) => {
                    tracing::warn!("Ignoring {USER_ID_VAR}: {raw} is not a number");
                    DEFAULT_USER_ID
                }
            },
            None => DEFAULT_USER_ID,
        };

        Self {
            controller_base_url,
            user_id,
        }
    }
}

/// Normalize a controller base URL.
///
/// Trims whitespace, drops trailing slashes so route joins stay predictable,
/// and requires an http or https scheme.
pub fn normalize_base_url(raw: &str) -> Result<String> {
    let base = raw.trim().trim_end_matches('/').to_string();
    if base.is_empty() {
        return Err(Error::InvalidBaseUrl(
            "base URL must not be empty".to_string(),
        ));
    }
    if !(base.starts_with("https://") || base.starts_with("http://")) {
        return Err(Error::InvalidBaseUrl(format!(
            "{base} must start with http:// or https://"
        )));
    }
    Ok(base)
}

fn normalize_text_option(value: Option<String>) -> Option<String> {
    let value = value?;
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn from_values_uses_defaults_when_nothing_is_set() {
        let config = AppConfig::from_values(None, None);
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn from_values_accepts_overrides() {
        let config = AppConfig::from_values(
            Some(" http://controller.local:5000/ ".to_string()),
            Some("7".to_string()),
        );
        assert_eq!(config.controller_base_url, "http://controller.local:5000");
        assert_eq!(config.user_id, 7);
    }

    #[test]
    fn from_values_falls_back_on_invalid_overrides() {
        let config = AppConfig::from_values(
            Some("controller.local:5000".to_string()),
            Some("first".to_string()),
        );
        assert_eq!(config.controller_base_url, DEFAULT_CONTROLLER_URL);
        assert_eq!(config.user_id, DEFAULT_USER_ID);
    }

    #[test]
    fn from_values_treats_blank_overrides_as_unset() {
        let config = AppConfig::from_values(Some("   ".to_string()), Some(String::new()));
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn normalize_base_url_trims_and_strips_trailing_slashes() {
        assert_eq!(
            normalize_base_url(" https://controller.example.com// ").unwrap(),
            "https://controller.example.com"
        );
    }

    #[test]
    fn normalize_base_url_rejects_missing_scheme() {
        assert!(normalize_base_url("controller.example.com").is_err());
        assert!(normalize_base_url("ftp://controller.example.com").is_err());
    }

    #[test]
    fn normalize_base_url_rejects_empty_input() {
        assert!(normalize_base_url("").is_err());
        assert!(normalize_base_url("   /// ").is_err());
    }
}
