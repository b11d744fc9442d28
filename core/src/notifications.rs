//! Notification endpoints. Authorized with the app key and scoped to the
//! client's app id.

use crate::auth::AuthKind;
use crate::client::{Client, Reply, NO_BODY};
use crate::error::Result;
use crate::http::{HttpMethod, HttpRequest};
use crate::path::{segment, with_query};
use crate::types::{
    Notification, NotificationCreated, NotificationGetOptions, NotificationList,
    NotificationListOptions, NotificationRequest, SuccessResponse,
};

/// `/notifications` endpoints, borrowed from a `Client` with
/// `Client::notifications`.
#[derive(Debug, Clone, Copy)]
pub struct Notifications<'a> {
    client: &'a Client,
}

impl<'a> Notifications<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub fn build_list(&self, options: Option<&NotificationListOptions>) -> Result<HttpRequest> {
        let mut query = vec![("app_id", self.client.app_id()?.to_string())];
        if let Some(options) = options {
            query.push(("limit", options.limit.to_string()));
            query.push(("offset", options.offset.to_string()));
            if let Some(kind) = options.kind {
                query.push(("kind", kind.as_i32().to_string()));
            }
        }
        let path = with_query("/notifications", query);
        self.client
            .build_request(HttpMethod::Get, &path, NO_BODY, AuthKind::App)
    }

    pub fn build_get(
        &self,
        notification_id: &str,
        options: Option<&NotificationGetOptions>,
    ) -> Result<HttpRequest> {
        let mut query = vec![("app_id", self.client.app_id()?.to_string())];
        if let Some(options) = options {
            let optional = [
                ("outcome_attribution", &options.outcome_attribution),
                ("outcome_platforms", &options.outcome_platforms),
                ("outcome_time_range", &options.outcome_time_range),
            ];
            for (key, value) in optional {
                if let Some(value) = value.as_ref().filter(|v| !v.is_empty()) {
                    query.push((key, value.clone()));
                }
            }
            for name in &options.outcome_names {
                query.push(("outcome_names", name.clone()));
            }
        }
        let path = with_query(&format!("/notifications/{}", segment(notification_id)), query);
        self.client
            .build_request(HttpMethod::Get, &path, NO_BODY, AuthKind::App)
    }

    /// The body is sent with `app_id` replaced by the client's app id.
    pub fn build_create(&self, notification: &NotificationRequest) -> Result<HttpRequest> {
        let app_id = self.client.app_id()?;
        let body = NotificationRequest {
            app_id: app_id.to_string(),
            ..notification.clone()
        };
        self.client
            .build_request(HttpMethod::Post, "/notifications", Some(&body), AuthKind::App)
    }

    pub fn build_delete(&self, notification_id: &str) -> Result<HttpRequest> {
        let path = with_query(
            &format!("/notifications/{}", segment(notification_id)),
            [("app_id", self.client.app_id()?.to_string())],
        );
        self.client
            .build_request(HttpMethod::Delete, &path, NO_BODY, AuthKind::App)
    }

    pub fn list(&self, options: Option<&NotificationListOptions>) -> Result<Reply<NotificationList>> {
        self.client.execute(&self.build_list(options)?)
    }

    pub fn get(
        &self,
        notification_id: &str,
        options: Option<&NotificationGetOptions>,
    ) -> Result<Reply<Notification>> {
        self.client
            .execute(&self.build_get(notification_id, options)?)
    }

    /// Send (or schedule) a notification.
    pub fn create(&self, notification: &NotificationRequest) -> Result<Reply<NotificationCreated>> {
        self.client.execute(&self.build_create(notification)?)
    }

    /// Cancel a scheduled notification.
    pub fn delete(&self, notification_id: &str) -> Result<Reply<SuccessResponse>> {
        self.client.execute(&self.build_delete(notification_id)?)
    }
}
