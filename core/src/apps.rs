//! App management endpoints. Authorized with the user key.

use crate::auth::AuthKind;
use crate::client::{Client, Reply, NO_BODY};
use crate::error::Result;
use crate::http::{HttpMethod, HttpRequest};
use crate::path::segment;
use crate::types::{App, AppRequest};

/// `/apps` endpoints, borrowed from a `Client` with `Client::apps`.
#[derive(Debug, Clone, Copy)]
pub struct Apps<'a> {
    client: &'a Client,
}

impl<'a> Apps<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub fn build_list(&self) -> Result<HttpRequest> {
        self.client
            .build_request(HttpMethod::Get, "/apps", NO_BODY, AuthKind::User)
    }

    pub fn build_get(&self, app_id: &str) -> Result<HttpRequest> {
        let path = format!("/apps/{}", segment(app_id));
        self.client
            .build_request(HttpMethod::Get, &path, NO_BODY, AuthKind::User)
    }

    pub fn build_create(&self, app: &AppRequest) -> Result<HttpRequest> {
        self.client
            .build_request(HttpMethod::Post, "/apps", Some(app), AuthKind::User)
    }

    pub fn build_update(&self, app_id: &str, app: &AppRequest) -> Result<HttpRequest> {
        let path = format!("/apps/{}", segment(app_id));
        self.client
            .build_request(HttpMethod::Put, &path, Some(app), AuthKind::User)
    }

    /// List every app on the account.
    pub fn list(&self) -> Result<Reply<Vec<App>>> {
        self.client.execute(&self.build_list()?)
    }

    pub fn get(&self, app_id: &str) -> Result<Reply<App>> {
        self.client.execute(&self.build_get(app_id)?)
    }

    pub fn create(&self, app: &AppRequest) -> Result<Reply<App>> {
        self.client.execute(&self.build_create(app)?)
    }

    pub fn update(&self, app_id: &str, app: &AppRequest) -> Result<Reply<App>> {
        self.client.execute(&self.build_update(app_id, app)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientOptions;
    use crate::error::ApiError;
    use crate::http::HttpResponse;

    fn client() -> Client {
        Client::new(
            ClientOptions::new()
                .base_url("http://localhost:3000")
                .api_key("mock-api-key")
                .user_key("mock-user-key"),
        )
        .unwrap()
    }

    #[test]
    fn build_list_uses_user_key() {
        let client = client();
        let req = client.apps().build_list().unwrap();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.url, "http://localhost:3000/apps");
        assert_eq!(req.header("Authorization"), Some("Basic mock-user-key"));
        assert!(req.body.is_none());
    }

    #[test]
    fn build_update_encodes_id_and_body() {
        let client = client();
        let req = client
            .apps()
            .build_update("id/1", &AppRequest::new("Renamed"))
            .unwrap();
        assert_eq!(req.method, HttpMethod::Put);
        assert_eq!(req.url, "http://localhost:3000/apps/id%2F1");
        assert_eq!(req.body.as_deref(), Some(r#"{"name":"Renamed"}"#));
    }

    #[test]
    fn apps_need_a_user_key() {
        let client = Client::new(ClientOptions::new().api_key("mock-api-key")).unwrap();
        let err = client.apps().list().unwrap_err();
        assert!(matches!(err, ApiError::Configuration(_)));
    }

    #[test]
    fn list_decodes_apps() {
        let client = client().with_transport(|_: &HttpRequest| -> Result<HttpResponse> {
            Ok(HttpResponse {
                status: 200,
                headers: Vec::new(),
                body: r#"[{"id":"a1","name":"First","players":3},{"id":"a2","name":"Second"}]"#
                    .to_string(),
            })
        });
        let apps = client.apps().list().unwrap().into_result().unwrap();
        assert_eq!(apps.len(), 2);
        assert_eq!(apps[0].players, 3);
        assert_eq!(apps[1].name, "Second");
    }
}
