//! Device ("player") endpoints. Authorized with the app key and scoped to
//! the client's app id.

use crate::auth::AuthKind;
use crate::client::{Client, Reply, NO_BODY};
use crate::error::Result;
use crate::http::{HttpMethod, HttpRequest};
use crate::path::{segment, with_query};
use crate::types::{
    Player, PlayerCreated, PlayerCsvExport, PlayerCsvExportOptions, PlayerGetOptions, PlayerList,
    PlayerListOptions, PlayerRequest, SuccessResponse, TagsUpdate,
};

/// `/players` endpoints, borrowed from a `Client` with `Client::players`.
#[derive(Debug, Clone, Copy)]
pub struct Players<'a> {
    client: &'a Client,
}

impl<'a> Players<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub fn build_list(&self, options: &PlayerListOptions) -> Result<HttpRequest> {
        let path = with_query(
            "/players",
            [
                ("app_id", self.client.app_id()?.to_string()),
                ("limit", options.limit.to_string()),
                ("offset", options.offset.to_string()),
            ],
        );
        self.client
            .build_request(HttpMethod::Get, &path, NO_BODY, AuthKind::App)
    }

    pub fn build_get(
        &self,
        player_id: &str,
        options: Option<&PlayerGetOptions>,
    ) -> Result<HttpRequest> {
        let mut query = vec![("app_id", self.client.app_id()?.to_string())];
        if let Some(options) = options {
            query.push(("email_auth_hash", options.email_auth_hash.clone()));
        }
        let path = with_query(&format!("/players/{}", segment(player_id)), query);
        self.client
            .build_request(HttpMethod::Get, &path, NO_BODY, AuthKind::App)
    }

    pub fn build_create(&self, player: &PlayerRequest) -> Result<HttpRequest> {
        self.client
            .build_request(HttpMethod::Post, "/players", Some(player), AuthKind::App)
    }

    pub fn build_update(&self, player_id: &str, player: &PlayerRequest) -> Result<HttpRequest> {
        let path = format!("/players/{}", segment(player_id));
        self.client
            .build_request(HttpMethod::Put, &path, Some(player), AuthKind::App)
    }

    pub fn build_csv_export(
        &self,
        options: Option<&PlayerCsvExportOptions>,
    ) -> Result<HttpRequest> {
        let path = with_query(
            "/players/csv_export",
            [("app_id", self.client.app_id()?.to_string())],
        );
        self.client
            .build_request(HttpMethod::Post, &path, options, AuthKind::App)
    }

    pub fn build_update_tags_by_external_user_id(
        &self,
        external_user_id: &str,
        tags: &TagsUpdate,
    ) -> Result<HttpRequest> {
        let path = format!(
            "/apps/{}/users/{}",
            segment(self.client.app_id()?),
            segment(external_user_id)
        );
        self.client
            .build_request(HttpMethod::Put, &path, Some(tags), AuthKind::App)
    }

    /// One page of the app's devices.
    pub fn list(&self, options: &PlayerListOptions) -> Result<Reply<PlayerList>> {
        self.client.execute(&self.build_list(options)?)
    }

    /// A single device. The returned `id` is always `player_id`.
    pub fn get(
        &self,
        player_id: &str,
        options: Option<&PlayerGetOptions>,
    ) -> Result<Reply<Player>> {
        let reply: Reply<Player> = self.client.execute(&self.build_get(player_id, options)?)?;
        Ok(reply.map(|mut player| {
            player.id = player_id.to_string();
            player
        }))
    }

    pub fn create(&self, player: &PlayerRequest) -> Result<Reply<PlayerCreated>> {
        self.client.execute(&self.build_create(player)?)
    }

    pub fn update(
        &self,
        player_id: &str,
        player: &PlayerRequest,
    ) -> Result<Reply<SuccessResponse>> {
        self.client.execute(&self.build_update(player_id, player)?)
    }

    /// Ask the API for a downloadable CSV of all devices.
    pub fn csv_export(
        &self,
        options: Option<&PlayerCsvExportOptions>,
    ) -> Result<Reply<PlayerCsvExport>> {
        self.client.execute(&self.build_csv_export(options)?)
    }

    /// Set tags on every device registered under `external_user_id`.
    pub fn update_tags_by_external_user_id(
        &self,
        external_user_id: &str,
        tags: &TagsUpdate,
    ) -> Result<Reply<SuccessResponse>> {
        self.client
            .execute(&self.build_update_tags_by_external_user_id(external_user_id, tags)?)
    }
}
