//! Data-transfer types for the OneSignal REST API.
//!
//! # Design
//! Optional request fields are `Option<T>` and are left out of the JSON when
//! `None`. Every response type implements `Default` because the decoder
//! returns the default value for an empty success body. Non-optional
//! response fields read a JSON `null` as their default.

mod app;
mod notification;
mod player;

use serde::{Deserialize, Deserializer, Serialize};

pub use app::{ApnsEnvironment, App, AppRequest};
pub use notification::{
    AndroidBackgroundLayout, DelayedOption, DeliveryStats, HuaweiMsgType, IosBadgeType,
    IosInterruptionLevel, MessageType, Notification, NotificationButton, NotificationCreated,
    NotificationGetOptions, NotificationKind, NotificationList, NotificationListOptions,
    NotificationRequest, Outcome, PlatformDeliveryStats, SendAfter,
};
pub use player::{
    Player, PlayerCreated, PlayerCsvExport, PlayerCsvExportOptions, PlayerGetOptions, PlayerList,
    PlayerListOptions, PlayerRequest, TagsUpdate,
};

/// Reads `null` as `T::default()`.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Body of mutations that only report whether they worked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuccessResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub success: bool,
}

/// Error envelope returned with non-success statuses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default, deserialize_with = "null_as_default")]
    pub errors: Vec<String>,
}
