use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::null_as_default;

/// Delivery channel for targeting by external user id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageType {
    Push,
    Email,
    Sms,
    /// A value this client does not know yet.
    #[serde(other)]
    Unknown,
}

/// How `ios_badgeCount` is applied to the current badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IosBadgeType {
    /// Leave the badge untouched.
    None,
    SetTo,
    /// Add `ios_badgeCount`; negative values decrease.
    Increase,
    /// A value this client does not know yet.
    #[serde(other)]
    Unknown,
}

/// iOS 15 focus-mode interruption level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IosInterruptionLevel {
    Active,
    Passive,
    TimeSensitive,
    Critical,
    /// A value this client does not know yet.
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DelayedOption {
    /// Deliver at `delivery_time_of_day` in each user's own timezone.
    #[serde(rename = "timezone")]
    Timezone,
    /// Intelligent delivery: the time of day each user was last active.
    #[serde(rename = "last-active")]
    LastActive,
    /// A value this client does not know yet.
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HuaweiMsgType {
    Data,
    Message,
    /// A value this client does not know yet.
    #[serde(other)]
    Unknown,
}

/// Delivery start: a date string on create, a unix timestamp when read back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SendAfter {
    Timestamp(i64),
    /// e.g. `"2015-09-24 14:00:00 GMT-0700"`.
    Text(String),
}

impl From<&str> for SendAfter {
    fn from(s: &str) -> Self {
        SendAfter::Text(s.to_string())
    }
}

impl From<String> for SendAfter {
    fn from(s: String) -> Self {
        SendAfter::Text(s)
    }
}

/// Origin of a notification, used to filter `Notifications::list`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Dashboard = 0,
    Api = 1,
    Automated = 2,
}

impl NotificationKind {
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AndroidBackgroundLayout {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// ARGB hex, e.g. `"FFFF0000"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headings_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contents_color: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationButton {
    pub id: String,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Payload for creating a notification.
///
/// `app_id` is filled in from the client by `Notifications::create`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationRequest {
    #[serde(deserialize_with = "null_as_default")]
    pub app_id: String,
    /// Internal campaign name, not shown to recipients.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Message body keyed by language code; `en` is required for push.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contents: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headings: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<HashMap<String, String>>,
    #[serde(rename = "isIos", skip_serializing_if = "Option::is_none")]
    pub is_ios: Option<bool>,
    #[serde(rename = "isAndroid", skip_serializing_if = "Option::is_none")]
    pub is_android: Option<bool>,
    #[serde(rename = "isHuawei", skip_serializing_if = "Option::is_none")]
    pub is_huawei: Option<bool>,
    #[serde(rename = "isAdm", skip_serializing_if = "Option::is_none")]
    pub is_adm: Option<bool>,
    #[serde(rename = "isChrome", skip_serializing_if = "Option::is_none")]
    pub is_chrome: Option<bool>,
    #[serde(rename = "isChromeWeb", skip_serializing_if = "Option::is_none")]
    pub is_chrome_web: Option<bool>,
    #[serde(rename = "isFirefox", skip_serializing_if = "Option::is_none")]
    pub is_firefox: Option<bool>,
    #[serde(rename = "isSafari", skip_serializing_if = "Option::is_none")]
    pub is_safari: Option<bool>,
    #[serde(rename = "isAnyWeb", skip_serializing_if = "Option::is_none")]
    pub is_any_web: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_for_external_user_ids: Option<MessageType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub included_segments: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excluded_segments: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_external_user_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_email_tokens: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_phone_numbers: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_player_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_ios_tokens: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_android_reg_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_wp_uris: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_wp_wns_uris: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_amazon_reg_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_chrome_reg_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_chrome_web_reg_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Value>,
    #[serde(rename = "ios_badgeType", skip_serializing_if = "Option::is_none")]
    pub ios_badge_type: Option<IosBadgeType>,
    #[serde(rename = "ios_badgeCount", skip_serializing_if = "Option::is_none")]
    pub ios_badge_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ios_sound: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ios_attachments: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ios_category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub android_sound: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub huawei_sound: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adm_sound: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wp_wns_sound: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collapse_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub web_push_topic: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apns_alert: Option<Map<String, Value>>,
    /// Custom key/value payload delivered to the app.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buttons: Option<Vec<NotificationButton>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub small_icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub large_icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub huawei_small_icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub huawei_large_icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adm_small_icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adm_large_icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chrome_icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chrome_web_icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub firefox_icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub huawei_big_picture: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chrome_web_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chrome_web_badge: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub web_buttons: Option<Vec<NotificationButton>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub big_picture: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adm_big_picture: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub android_background_layout: Option<AndroidBackgroundLayout>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chrome_big_picture: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub web_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_after: Option<SendAfter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delayed_option: Option<DelayedOption>,
    /// Used with `DelayedOption::Timezone`, e.g. `"9:00AM"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_time_of_day: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apns_push_type_override: Option<String>,
    /// Seconds the message is kept if the device is offline.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub throttle_rate_per_minute: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_frequency_cap: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub android_led_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub huawei_led_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub android_accent_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub huawei_accent_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub android_visibility: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub huawei_visibility: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_available: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub android_background_data: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amazon_background_data: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub android_group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub android_group_message: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adm_group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adm_group_message: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thread_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary_arg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary_arg_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ios_relevance_score: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ios_interruption_level: Option<IosInterruptionLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<Value>,
    /// Idempotency key for the create call.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_content_identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub huawei_msg_type: Option<HuaweiMsgType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub android_channel_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub existing_android_channel_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub huawei_channel_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub huawei_existing_channel_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_subject: Option<String>,
    /// Full HTML body of an email message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_from_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_from_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_email_click_tracking: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sms_from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sms_media_urls: Option<Vec<String>>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeliveryStats {
    #[serde(deserialize_with = "null_as_default")]
    pub successful: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub failed: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub errored: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub converted: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub received: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlatformDeliveryStats {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub android: Option<DeliveryStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ios: Option<DeliveryStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amazon_fire: Option<DeliveryStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub windows_phone_legacy: Option<DeliveryStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chrome_extension: Option<DeliveryStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chrome_web_push: Option<DeliveryStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub windows: Option<DeliveryStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub safari_web_push: Option<DeliveryStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub firefox_web_push: Option<DeliveryStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mac_os: Option<DeliveryStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amazon_alexa: Option<DeliveryStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<DeliveryStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sms: Option<DeliveryStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edge_web_push: Option<DeliveryStats>,
}

/// One aggregated outcome requested through `NotificationGetOptions`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Outcome {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub value: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub aggregation: String,
}

/// A notification as reported by the API: the request it was created from
/// plus delivery progress.
///
/// Fields the API echoes from the create call, such as `send_after` and
/// `throttle_rate_per_minute`, live on `request` only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Notification {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    /// Messages not sent yet: still processing, or held by a delayed option.
    #[serde(deserialize_with = "null_as_default")]
    pub remaining: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub queued_at: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<i64>,
    #[serde(deserialize_with = "null_as_default")]
    pub canceled: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub platform_delivery_stats: PlatformDeliveryStats,
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub outcomes: Vec<Outcome>,
    #[serde(flatten)]
    pub stats: DeliveryStats,
    #[serde(flatten)]
    pub request: NotificationRequest,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationCreated {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub recipients: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    /// Per-target problems, e.g. `{"invalid_player_ids": [...]}` or a list of
    /// messages when nobody was subscribed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Value>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NotificationListOptions {
    pub limit: u32,
    pub offset: u32,
    pub kind: Option<NotificationKind>,
}

/// Outcome filters for `Notifications::get`. Empty fields are not sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationGetOptions {
    /// e.g. `os__click.count`, `Sales__sum`.
    pub outcome_names: Vec<String>,
    /// `1h`, `1d` or `30d`.
    pub outcome_time_range: Option<String>,
    /// Comma separated device types.
    pub outcome_platforms: Option<String>,
    /// `total`, `influenced` or `unattributed`.
    pub outcome_attribution: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationList {
    #[serde(deserialize_with = "null_as_default")]
    pub total_count: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub offset: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub limit: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub notifications: Vec<Notification>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_uses_api_field_names() {
        let request = NotificationRequest {
            app_id: "app".to_string(),
            contents: Some([("en".to_string(), "Hello".to_string())].into_iter().collect()),
            is_ios: Some(true),
            ios_badge_type: Some(IosBadgeType::Increase),
            ios_badge_count: Some(1),
            delayed_option: Some(DelayedOption::LastActive),
            ios_interruption_level: Some(IosInterruptionLevel::TimeSensitive),
            channel_for_external_user_ids: Some(MessageType::Push),
            ..NotificationRequest::default()
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "app_id": "app",
                "contents": {"en": "Hello"},
                "isIos": true,
                "ios_badgeType": "Increase",
                "ios_badgeCount": 1,
                "delayed_option": "last-active",
                "ios_interruption_level": "time_sensitive",
                "channel_for_external_user_ids": "push"
            })
        );
    }

    #[test]
    fn notification_reads_stats_and_request_fields() {
        let notification: Notification = serde_json::from_str(
            r#"{
                "id": "481a2734-6b7d-11e4-a6ea-4b53294fa671",
                "successful": 15,
                "failed": 1,
                "converted": 3,
                "remaining": 0,
                "queued_at": 1415914655,
                "send_after": 1415914655,
                "completed_at": 1415914656,
                "canceled": false,
                "headings": {"en": "Hi"},
                "contents": {"en": "Hello world"},
                "data": {"foo": "bar"},
                "platform_delivery_stats": {"ios": {"successful": 10, "failed": 1}},
                "outcomes": [{"id": "os__click", "value": 3, "aggregation": "count"}]
            }"#,
        )
        .unwrap();

        assert_eq!(notification.stats.successful, 15);
        assert_eq!(notification.stats.converted, 3);
        assert_eq!(
            notification.request.send_after,
            Some(SendAfter::Timestamp(1_415_914_655))
        );
        assert_eq!(notification.request.contents.as_ref().unwrap()["en"], "Hello world");
        assert_eq!(notification.request.data, Some(serde_json::json!({"foo": "bar"})));
        assert_eq!(notification.platform_delivery_stats.ios.unwrap().successful, 10);
        assert_eq!(notification.outcomes[0].aggregation, "count");
    }

    #[test]
    fn notification_serializes_each_key_once_and_reads_back() {
        let mut notification = Notification {
            id: "n1".to_string(),
            queued_at: 1_415_914_655,
            ..Notification::default()
        };
        notification.request.throttle_rate_per_minute = Some(10);
        notification.request.send_after = Some(SendAfter::Timestamp(1_415_914_700));
        notification.stats.successful = 3;

        let text = serde_json::to_string(&notification).unwrap();
        assert_eq!(text.matches("\"throttle_rate_per_minute\"").count(), 1);
        assert_eq!(text.matches("\"send_after\"").count(), 1);

        let json: Value = serde_json::from_str(&text).unwrap();
        assert!(!json.as_object().unwrap().contains_key("completed_at"));

        let back: Notification = serde_json::from_str(&text).unwrap();
        assert_eq!(back, notification);
    }

    #[test]
    fn send_after_accepts_text_and_timestamps() {
        let request = NotificationRequest {
            send_after: Some("2015-09-24 14:00:00 GMT-0700".into()),
            ..NotificationRequest::default()
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["send_after"], "2015-09-24 14:00:00 GMT-0700");

        let back: NotificationRequest = serde_json::from_value(json).unwrap();
        assert_eq!(back.send_after, request.send_after);
    }

    #[test]
    fn notification_tolerates_nulls_and_unknown_enum_values() {
        let notification: Notification = serde_json::from_str(
            r#"{
                "id": "n1",
                "app_id": null,
                "remaining": null,
                "canceled": null,
                "successful": null,
                "outcomes": null,
                "platform_delivery_stats": null,
                "ios_badgeType": "Reset",
                "delayed_option": "smart",
                "ios_interruption_level": "urgent",
                "huawei_msg_type": "silent",
                "channel_for_external_user_ids": "carrier_pigeon"
            }"#,
        )
        .unwrap();

        assert_eq!(notification.id, "n1");
        assert_eq!(notification.request.app_id, "");
        assert_eq!(notification.remaining, 0);
        assert_eq!(notification.stats.successful, 0);
        assert!(notification.outcomes.is_empty());
        assert_eq!(notification.request.ios_badge_type, Some(IosBadgeType::Unknown));
        assert_eq!(notification.request.delayed_option, Some(DelayedOption::Unknown));
        assert_eq!(
            notification.request.ios_interruption_level,
            Some(IosInterruptionLevel::Unknown)
        );
        assert_eq!(notification.request.huawei_msg_type, Some(HuaweiMsgType::Unknown));
        assert_eq!(
            notification.request.channel_for_external_user_ids,
            Some(MessageType::Unknown)
        );
    }

    #[test]
    fn kind_maps_to_api_codes() {
        assert_eq!(NotificationKind::Dashboard.as_i32(), 0);
        assert_eq!(NotificationKind::Automated.as_i32(), 2);
    }
}
