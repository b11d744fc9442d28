//! Shared request/response pipeline for every OneSignal endpoint.
//!
//! # Design
//! `Client` is configured once and shared by reference with the resource
//! wrappers. It carries no per-call state: each call builds an `HttpRequest`
//! with `build_request`, hands it to the `Transport`, and turns the returned
//! `HttpResponse` into a typed value with `decode`. Hosts that do their own
//! I/O call `build_request` and `decode` directly and never touch the
//! transport.

use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;
use url::Url;

use crate::apps::Apps;
use crate::auth::{AuthKind, Credentials};
use crate::config::{ClientOptions, DEFAULT_BASE_URL};
use crate::error::{ApiError, Result};
use crate::http::{HttpMethod, HttpRequest, HttpResponse, Transport};
use crate::notifications::Notifications;
use crate::players::Players;
use crate::types::ErrorBody;

/// Placeholder body for requests that send none.
pub const NO_BODY: Option<&()> = None;

/// Client for the OneSignal REST API.
///
/// Cheap to clone; clones share the transport.
#[derive(Clone)]
pub struct Client {
    base_url: String,
    app_id: Option<String>,
    credentials: Credentials,
    transport: Arc<dyn Transport>,
    debug: bool,
}

impl Client {
    /// Validate `options` and build a client using the default transport.
    pub fn new(options: ClientOptions) -> Result<Self> {
        let credentials = Credentials::new(options.api_key, options.user_key)?;

        let base_url = options
            .base_url
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Url::parse(&base_url)
            .map_err(|e| ApiError::Configuration(format!("invalid base url {base_url:?}: {e}")))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            app_id: options.app_id.filter(|id| !id.is_empty()),
            credentials,
            transport: default_transport(),
            debug: options.debug,
        })
    }

    /// Replace the transport used by `execute`.
    pub fn with_transport(mut self, transport: impl Transport + 'static) -> Self {
        self.transport = Arc::new(transport);
        self
    }

    /// Toggle debug logging of URLs and bodies.
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn is_debug(&self) -> bool {
        self.debug
    }

    /// The configured app id, required by app-scoped endpoints.
    pub fn app_id(&self) -> Result<&str> {
        self.app_id.as_deref().ok_or_else(|| {
            ApiError::Configuration("an app id is required for this endpoint".to_string())
        })
    }

    pub fn apps(&self) -> Apps<'_> {
        Apps::new(self)
    }

    pub fn players(&self) -> Players<'_> {
        Players::new(self)
    }

    pub fn notifications(&self) -> Notifications<'_> {
        Notifications::new(self)
    }

    /// Build a request for `path`, relative to the base URL.
    ///
    /// `path` may already carry a query string. The body, if any, is encoded
    /// as JSON and the `Authorization` header is chosen by `auth`.
    pub fn build_request<B>(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&B>,
        auth: AuthKind,
    ) -> Result<HttpRequest>
    where
        B: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, path);

        let body = body
            .map(|b| serde_json::to_string(b).map_err(|e| ApiError::SerializationError(e.to_string())))
            .transpose()?;

        let authorization = self.credentials.authorization(auth)?;
        let headers = vec![
            ("Content-Type".to_string(), "application/json".to_string()),
            ("Accept".to_string(), "application/json".to_string()),
            ("Authorization".to_string(), authorization),
        ];

        if self.debug {
            debug!(%method, %url, "requesting url");
            if let Some(body) = &body {
                debug!(%body, "request body");
            }
        }

        Ok(HttpRequest {
            method,
            url,
            headers,
            body,
        })
    }

    /// Turn a response into `T`, or into the error it reports.
    pub fn decode<T>(&self, response: &HttpResponse) -> Result<T>
    where
        T: DeserializeOwned + Default,
    {
        if self.debug {
            debug!(status = response.status, body = %response.body, "response body");
        }
        decode_response(response)
    }

    /// Send `request` through the transport and decode the answer.
    ///
    /// Only a transport failure is returned as `Err`; once a response exists
    /// it is kept in the `Reply` next to the decoded value or error.
    pub fn execute<T>(&self, request: &HttpRequest) -> Result<Reply<T>>
    where
        T: DeserializeOwned + Default,
    {
        let response = self.transport.send(request)?;
        let result = self.decode(&response);
        Ok(Reply { response, result })
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.base_url)
            .field("app_id", &self.app_id)
            .field("credentials", &self.credentials)
            .field("debug", &self.debug)
            .finish_non_exhaustive()
    }
}

#[cfg(feature = "ureq")]
fn default_transport() -> Arc<dyn Transport> {
    Arc::new(crate::transport::UreqTransport::new())
}

#[cfg(not(feature = "ureq"))]
fn default_transport() -> Arc<dyn Transport> {
    Arc::new(|_: &HttpRequest| -> Result<HttpResponse> {
        Err(ApiError::Transport("no transport configured".to_string()))
    })
}

/// A completed exchange: the raw response and what it decoded to.
#[derive(Debug)]
pub struct Reply<T> {
    pub response: HttpResponse,
    pub result: Result<T>,
}

impl<T> Reply<T> {
    pub fn status(&self) -> u16 {
        self.response.status
    }

    pub fn into_result(self) -> Result<T> {
        self.result
    }

    pub fn into_parts(self) -> (HttpResponse, Result<T>) {
        (self.response, self.result)
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Reply<U> {
        Reply {
            response: self.response,
            result: self.result.map(f),
        }
    }
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse) -> Result<()> {
    match response.status {
        200..=299 => Ok(()),
        500 => Err(ApiError::InternalServerError),
        status => {
            let body: ErrorBody = serde_json::from_str(&response.body)
                .map_err(|e| ApiError::DecodeError(e.to_string()))?;
            Err(ApiError::Api {
                status,
                messages: body.errors,
            })
        }
    }
}

fn decode_response<T>(response: &HttpResponse) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    check_status(response)?;
    // 204, and some 200s, come back without a body.
    if response.body.trim().is_empty() {
        return Ok(T::default());
    }
    serde_json::from_str::<Option<T>>(&response.body)
        .map(Option::unwrap_or_default)
        .map_err(|e| ApiError::DecodeError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use serde::Deserialize;
    use tracing_test::traced_test;

    use super::*;

    #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
    struct Foo {
        #[serde(rename = "A")]
        a: String,
    }

    fn client() -> Client {
        Client::new(
            ClientOptions::new()
                .base_url("http://localhost:3000/")
                .app_id("app-id")
                .api_key("mock-api-key")
                .user_key("mock-user-key"),
        )
        .unwrap()
    }

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            headers: Vec::new(),
            body: body.to_string(),
        }
    }

    #[test]
    fn new_requires_a_key() {
        let err = Client::new(ClientOptions::new()).unwrap_err();
        assert!(matches!(err, ApiError::Configuration(_)));
    }

    #[test]
    fn new_defaults_base_url() {
        let client = Client::new(ClientOptions::new().api_key("key")).unwrap();
        assert_eq!(client.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn new_rejects_relative_base_url() {
        let err = Client::new(ClientOptions::new().api_key("key").base_url("api/v1")).unwrap_err();
        assert!(matches!(err, ApiError::Configuration(_)));
    }

    #[test]
    fn trailing_slash_is_stripped() {
        assert_eq!(client().base_url(), "http://localhost:3000");
    }

    #[test]
    fn app_id_is_required_when_missing() {
        let client = Client::new(ClientOptions::new().user_key("key")).unwrap();
        assert!(matches!(client.app_id(), Err(ApiError::Configuration(_))));
        assert_eq!(self::client().app_id().unwrap(), "app-id");
    }

    #[test]
    fn build_request_sets_url_headers_and_body() {
        let body = Foo { a: "Bar".to_string() };
        let req = client()
            .build_request(HttpMethod::Post, "/foo?x=1", Some(&body), AuthKind::App)
            .unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.url, "http://localhost:3000/foo?x=1");
        assert_eq!(req.body.as_deref(), Some(r#"{"A":"Bar"}"#));
        assert_eq!(req.header("Content-Type"), Some("application/json"));
        assert_eq!(req.header("Accept"), Some("application/json"));
        assert_eq!(req.header("Authorization"), Some("Basic mock-api-key"));
    }

    #[test]
    fn build_request_concatenates_path_verbatim() {
        let req = client()
            .build_request(HttpMethod::Get, "foo", NO_BODY, AuthKind::App)
            .unwrap();
        assert_eq!(req.url, "http://localhost:3000foo");
    }

    #[test]
    fn build_request_without_body() {
        let req = client()
            .build_request(HttpMethod::Get, "/", NO_BODY, AuthKind::User)
            .unwrap();
        assert!(req.body.is_none());
        assert_eq!(req.header("Authorization"), Some("Basic mock-user-key"));
    }

    #[test]
    fn build_request_fails_for_unconfigured_kind() {
        let client = Client::new(ClientOptions::new().api_key("key")).unwrap();
        let err = client
            .build_request(HttpMethod::Get, "/apps", NO_BODY, AuthKind::User)
            .unwrap_err();
        assert!(matches!(err, ApiError::Configuration(_)));
    }

    #[test]
    fn build_request_surfaces_serialization_errors() {
        use std::collections::HashMap;

        // JSON object keys must be strings.
        let mut body = HashMap::new();
        body.insert((1, 2), "value");
        let err = client()
            .build_request(HttpMethod::Post, "/", Some(&body), AuthKind::App)
            .unwrap_err();
        assert!(matches!(err, ApiError::SerializationError(_)));
    }

    #[test]
    fn decode_success_body() {
        let foo: Foo = client().decode(&response(200, r#"{"A":"a"}"#)).unwrap();
        assert_eq!(foo, Foo { a: "a".to_string() });
    }

    #[test]
    fn decode_empty_success_body_yields_default() {
        let foo: Foo = client().decode(&response(204, "")).unwrap();
        assert_eq!(foo, Foo::default());
        let foo: Foo = client().decode(&response(200, "\n")).unwrap();
        assert_eq!(foo, Foo::default());
    }

    #[test]
    fn decode_null_success_body_yields_default() {
        let foo: Foo = client().decode(&response(200, "null")).unwrap();
        assert_eq!(foo, Foo::default());
    }

    #[test]
    fn decode_truncated_success_body_fails() {
        let err = client().decode::<Foo>(&response(200, "{")).unwrap_err();
        assert!(matches!(err, ApiError::DecodeError(_)));
    }

    #[test]
    fn decode_api_error_body() {
        let body = r#"{
            "errors": ["Invalid or missing authentication token"]
        }"#;
        let err = client().decode::<Foo>(&response(400, body)).unwrap_err();
        assert_eq!(
            err,
            ApiError::Api {
                status: 400,
                messages: vec!["Invalid or missing authentication token".to_string()],
            }
        );
    }

    #[test]
    fn decode_error_status_with_empty_body() {
        let err = client().decode::<Foo>(&response(400, "")).unwrap_err();
        assert!(matches!(err, ApiError::DecodeError(_)));
        assert!(err.to_string().starts_with("couldn't decode response body JSON: EOF"));
    }

    #[test]
    fn decode_error_status_with_plain_text() {
        let err = client().decode::<Foo>(&response(400, "Bad Request\n")).unwrap_err();
        assert!(matches!(err, ApiError::DecodeError(_)));
    }

    #[test]
    fn decode_internal_server_error_ignores_body() {
        for body in ["", "<html>oops</html>", r#"{"errors":["boom"]}"#] {
            let err = client().decode::<Foo>(&response(500, body)).unwrap_err();
            assert_eq!(err, ApiError::InternalServerError);
        }
    }

    #[test]
    fn execute_keeps_response_on_error() {
        let client = client().with_transport(|_: &HttpRequest| -> Result<HttpResponse> {
            Ok(HttpResponse {
                status: 404,
                headers: vec![("x-request-id".to_string(), "abc".to_string())],
                body: r#"{"errors":["not found"]}"#.to_string(),
            })
        });
        let req = client
            .build_request(HttpMethod::Get, "/apps/x", NO_BODY, AuthKind::User)
            .unwrap();
        let reply = client.execute::<Foo>(&req).unwrap();
        assert_eq!(reply.status(), 404);
        assert_eq!(reply.response.header("X-Request-Id"), Some("abc"));
        assert_eq!(reply.into_result().unwrap_err().messages(), ["not found"]);
    }

    #[test]
    #[traced_test]
    fn debug_logs_request_and_response_without_credentials() {
        let client = client()
            .with_debug(true)
            .with_transport(|_: &HttpRequest| -> Result<HttpResponse> {
                Ok(response(200, r#"{"A":"from-server"}"#))
            });
        let body = Foo {
            a: "sent".to_string(),
        };
        let req = client
            .build_request(HttpMethod::Post, "/apps", Some(&body), AuthKind::User)
            .unwrap();
        client.execute::<Foo>(&req).unwrap();

        assert!(logs_contain("http://localhost:3000/apps"));
        assert!(logs_contain(r#"{"A":"sent"}"#));
        assert!(logs_contain(r#"{"A":"from-server"}"#));
        assert!(!logs_contain("mock-user-key"));
        assert!(!logs_contain("Authorization"));
    }

    #[test]
    #[traced_test]
    fn quiet_client_logs_nothing() {
        let client = client().with_transport(|_: &HttpRequest| -> Result<HttpResponse> {
            Ok(response(200, r#"{"A":"from-server"}"#))
        });
        assert!(!client.is_debug());
        let req = client
            .build_request(HttpMethod::Post, "/apps", Some(&Foo::default()), AuthKind::App)
            .unwrap();
        client.execute::<Foo>(&req).unwrap();

        assert!(!logs_contain("requesting url"));
        assert!(!logs_contain("request body"));
        assert!(!logs_contain("from-server"));
        assert!(!logs_contain("mock-api-key"));
    }

    #[test]
    fn execute_propagates_transport_errors() {
        let client = client().with_transport(|_: &HttpRequest| -> Result<HttpResponse> {
            Err(ApiError::Transport("connection refused".to_string()))
        });
        let req = client
            .build_request(HttpMethod::Get, "/", NO_BODY, AuthKind::App)
            .unwrap();
        let err = client.execute::<Foo>(&req).unwrap_err();
        assert!(err.is_transport());
    }

    #[test]
    fn body_survives_the_round_trip() {
        #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
        struct Nested {
            name: String,
            #[serde(skip_serializing_if = "Option::is_none")]
            note: Option<String>,
            tags: std::collections::BTreeMap<String, String>,
            score: f64,
        }

        let seen = Arc::new(Mutex::new(None));
        let recorder = Arc::clone(&seen);
        let client = client().with_transport(move |req: &HttpRequest| -> Result<HttpResponse> {
            let body = req.body.clone().unwrap_or_default();
            *recorder.lock().unwrap() = Some(body.clone());
            Ok(HttpResponse {
                status: 200,
                headers: Vec::new(),
                body,
            })
        });

        let sent = Nested {
            name: "player".to_string(),
            note: None,
            tags: [("level".to_string(), "7".to_string())].into_iter().collect(),
            score: 12.5,
        };
        let req = client
            .build_request(HttpMethod::Post, "/echo", Some(&sent), AuthKind::App)
            .unwrap();
        let back: Nested = client.execute(&req).unwrap().into_result().unwrap();
        assert_eq!(back, sent);
        assert!(!seen.lock().unwrap().as_deref().unwrap().contains("note"));
    }

    #[test]
    fn reply_map_transforms_success_only() {
        let reply = Reply {
            response: response(200, ""),
            result: Ok(2),
        };
        assert_eq!(reply.map(|n| n * 2).into_result().unwrap(), 4);

        let reply: Reply<i32> = Reply {
            response: response(500, ""),
            result: Err(ApiError::InternalServerError),
        };
        let (resp, result) = reply.map(|n| n * 2).into_parts();
        assert_eq!(resp.status, 500);
        assert!(result.is_err());
    }
}
