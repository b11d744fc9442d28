use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::null_as_default;

/// Which APNs gateway an app's iOS certificate targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApnsEnvironment {
    Sandbox,
    Production,
    /// A value this client does not know yet.
    #[serde(other)]
    Unknown,
}

/// A OneSignal app as returned by the API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct App {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub players: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub messagable_players: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gcm_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chrome_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chrome_web_origin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chrome_web_gcm_sender_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chrome_web_default_notification_icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chrome_web_sub_domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apns_env: Option<ApnsEnvironment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apns_certificates: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub safari_apns_certificate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub safari_site_origin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub safari_push_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub safari_icon_16_16: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub safari_icon_32_32: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub safari_icon_64_64: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub safari_icon_128_128: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub safari_icon_256_256: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub basic_auth_key: Option<String>,
}

/// Payload for creating or updating an app. Only `name` is required.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apns_env: Option<ApnsEnvironment>,
    /// Base64 encoded p12 certificate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apns_p12: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apns_p12_password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gcm_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub android_gcm_sender_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chrome_web_origin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chrome_web_default_notification_icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chrome_web_sub_domain: Option<String>,
    /// Needs both `chrome_web_origin` and `safari_site_origin`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub safari_site_origin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub safari_apns_p12: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub safari_apns_p12_password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub safari_icon_16_16: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub safari_icon_32_32: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub safari_icon_64_64: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub safari_icon_128_128: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub safari_icon_256_256: Option<String>,
}

impl AppRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}
