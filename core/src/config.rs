//! Client configuration.
//!
//! `ClientOptions` is plain data: build it with the setters, deserialize it
//! from a config file, or read it from `ONESIGNAL_*` environment variables.
//! Validation happens once, in `Client::new`.

use std::fmt;

use serde::Deserialize;

pub const DEFAULT_BASE_URL: &str = "https://onesignal.com/api/v1";

pub const ENV_BASE_URL: &str = "ONESIGNAL_BASE_URL";
pub const ENV_APP_ID: &str = "ONESIGNAL_APP_ID";
pub const ENV_API_KEY: &str = "ONESIGNAL_API_KEY";
pub const ENV_USER_KEY: &str = "ONESIGNAL_USER_KEY";
pub const ENV_DEBUG: &str = "ONESIGNAL_DEBUG";

/// Options accepted by `Client::new`.
///
/// At least one of `api_key` and `user_key` must be set. Empty strings count
/// as unset.
#[derive(Clone, Default, Deserialize)]
#[serde(default)]
pub struct ClientOptions {
    /// API root; `DEFAULT_BASE_URL` when unset.
    pub base_url: Option<String>,
    /// App the player and notification endpoints operate on.
    pub app_id: Option<String>,
    /// App-scoped REST API key, used for players and notifications.
    pub api_key: Option<String>,
    /// Account-scoped key, used for app management.
    pub user_key: Option<String>,
    /// Log request URLs and bodies, and raw response bodies, at debug level.
    pub debug: bool,
}

impl ClientOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn app_id(mut self, app_id: impl Into<String>) -> Self {
        self.app_id = Some(app_id.into());
        self
    }

    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn user_key(mut self, user_key: impl Into<String>) -> Self {
        self.user_key = Some(user_key.into());
        self
    }

    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Read options from the `ONESIGNAL_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        Self {
            base_url: get(ENV_BASE_URL),
            app_id: get(ENV_APP_ID),
            api_key: get(ENV_API_KEY),
            user_key: get(ENV_USER_KEY),
            debug: get(ENV_DEBUG)
                .map(|value| matches!(value.trim(), "1" | "true" | "TRUE" | "yes"))
                .unwrap_or(false),
        }
    }
}

impl fmt::Debug for ClientOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientOptions")
            .field("base_url", &self.base_url)
            .field("app_id", &self.app_id)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("user_key", &self.user_key.as_ref().map(|_| "<redacted>"))
            .field("debug", &self.debug)
            .finish()
    }
}
