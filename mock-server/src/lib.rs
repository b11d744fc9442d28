//! In-memory imitation of the OneSignal REST API.
//!
//! Stores apps, players and notifications as raw JSON objects so the schema
//! lives only in `onesignal-core`; integration tests catch any drift between
//! what the client sends and what it reads back.
//!
//! Authorization mirrors the real service: `/apps` management wants
//! `Basic <user key>`, everything else `Basic <api key>`. Failures answer
//! with the `{"errors": [...]}` envelope.

use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    routing::{get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::{debug, info};
use uuid::Uuid;

pub const DEFAULT_API_KEY: &str = "mock-api-key";
pub const DEFAULT_USER_KEY: &str = "mock-user-key";

/// Error envelope returned on every failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub errors: Vec<String>,
}

type ApiResult<T> = Result<T, (StatusCode, Json<ErrorBody>)>;

fn reject(status: StatusCode, message: &str) -> (StatusCode, Json<ErrorBody>) {
    (
        status,
        Json(ErrorBody {
            errors: vec![message.to_string()],
        }),
    )
}

#[derive(Clone, Copy)]
enum Key {
    Api,
    User,
}

#[derive(Default)]
struct Store {
    apps: HashMap<String, Map<String, Value>>,
    players: Vec<Map<String, Value>>,
    notifications: Vec<Map<String, Value>>,
}

/// Shared server state: credentials plus the in-memory store.
#[derive(Clone)]
pub struct Mock {
    api_key: Arc<str>,
    user_key: Arc<str>,
    store: Arc<RwLock<Store>>,
}

impl Mock {
    pub fn new(api_key: &str, user_key: &str) -> Self {
        Self {
            api_key: api_key.into(),
            user_key: user_key.into(),
            store: Arc::default(),
        }
    }

    fn authorize(&self, headers: &HeaderMap, key: Key) -> ApiResult<()> {
        let expected = match key {
            Key::Api => &self.api_key,
            Key::User => &self.user_key,
        };
        let presented = headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Basic "));
        match presented {
            Some(token) if token == &**expected => Ok(()),
            _ => Err(reject(
                StatusCode::BAD_REQUEST,
                "Invalid or missing authentication token",
            )),
        }
    }
}

impl Default for Mock {
    fn default() -> Self {
        Self::new(DEFAULT_API_KEY, DEFAULT_USER_KEY)
    }
}

pub fn app() -> Router {
    router(Mock::default())
}

pub fn router(mock: Mock) -> Router {
    Router::new()
        .route("/apps", get(list_apps).post(create_app))
        .route("/apps/{app_id}", get(get_app).put(update_app))
        .route("/apps/{app_id}/users/{external_user_id}", put(update_tags))
        .route("/players", get(list_players).post(create_player))
        .route("/players/csv_export", post(csv_export))
        .route("/players/{id}", get(get_player).put(update_player))
        .route(
            "/notifications",
            get(list_notifications).post(create_notification),
        )
        .route(
            "/notifications/{id}",
            get(get_notification).delete(cancel_notification),
        )
        .with_state(mock)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    serve(listener, Mock::default()).await
}

pub async fn serve(listener: TcpListener, mock: Mock) -> Result<(), std::io::Error> {
    if let Ok(addr) = listener.local_addr() {
        info!(%addr, "mock onesignal api listening");
    }
    axum::serve(listener, router(mock)).await
}

type Params = Query<HashMap<String, String>>;

fn required_app_id(params: &HashMap<String, String>) -> ApiResult<String> {
    params
        .get("app_id")
        .filter(|id| !id.is_empty())
        .cloned()
        .ok_or_else(|| reject(StatusCode::BAD_REQUEST, "app_id not found"))
}

fn page(params: &HashMap<String, String>) -> (usize, usize) {
    let number = |key: &str, default: usize| {
        params
            .get(key)
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    };
    (number("limit", 300), number("offset", 0))
}

fn now() -> i64 {
    chrono::Utc::now().timestamp()
}

fn merge(target: &mut Map<String, Value>, patch: Map<String, Value>) {
    for (key, value) in patch {
        target.insert(key, value);
    }
}

// --- apps ---

async fn list_apps(State(mock): State<Mock>, headers: HeaderMap) -> ApiResult<Json<Vec<Value>>> {
    mock.authorize(&headers, Key::User)?;
    let store = mock.store.read().await;
    Ok(Json(store.apps.values().cloned().map(Value::Object).collect()))
}

async fn create_app(
    State(mock): State<Mock>,
    headers: HeaderMap,
    Json(input): Json<Map<String, Value>>,
) -> ApiResult<Json<Value>> {
    mock.authorize(&headers, Key::User)?;
    if !input.get("name").is_some_and(Value::is_string) {
        return Err(reject(StatusCode::BAD_REQUEST, "Name is required"));
    }

    let id = Uuid::new_v4().to_string();
    let timestamp = chrono::Utc::now().to_rfc3339();
    let mut app = Map::new();
    app.insert("id".into(), json!(id));
    app.insert("players".into(), json!(0));
    app.insert("messagable_players".into(), json!(0));
    app.insert("created_at".into(), json!(timestamp));
    app.insert("updated_at".into(), json!(timestamp));
    app.insert("basic_auth_key".into(), json!(mock.api_key.to_string()));
    merge(&mut app, input);
    app.insert("id".into(), json!(id));

    debug!(%id, "created app");
    mock.store.write().await.apps.insert(id, app.clone());
    Ok(Json(Value::Object(app)))
}

async fn get_app(
    State(mock): State<Mock>,
    headers: HeaderMap,
    Path(app_id): Path<String>,
) -> ApiResult<Json<Value>> {
    mock.authorize(&headers, Key::User)?;
    let store = mock.store.read().await;
    store
        .apps
        .get(&app_id)
        .cloned()
        .map(|app| Json(Value::Object(app)))
        .ok_or_else(|| reject(StatusCode::NOT_FOUND, "App not found"))
}

async fn update_app(
    State(mock): State<Mock>,
    headers: HeaderMap,
    Path(app_id): Path<String>,
    Json(input): Json<Map<String, Value>>,
) -> ApiResult<Json<Value>> {
    mock.authorize(&headers, Key::User)?;
    let mut store = mock.store.write().await;
    let app = store
        .apps
        .get_mut(&app_id)
        .ok_or_else(|| reject(StatusCode::NOT_FOUND, "App not found"))?;
    merge(app, input);
    app.insert("id".into(), json!(app_id));
    app.insert("updated_at".into(), json!(chrono::Utc::now().to_rfc3339()));
    Ok(Json(Value::Object(app.clone())))
}

async fn update_tags(
    State(mock): State<Mock>,
    headers: HeaderMap,
    Path((app_id, external_user_id)): Path<(String, String)>,
    Json(input): Json<Map<String, Value>>,
) -> ApiResult<Json<Value>> {
    mock.authorize(&headers, Key::Api)?;
    let tags = match input.get("tags") {
        Some(Value::Object(tags)) => tags.clone(),
        _ => Map::new(),
    };

    let mut store = mock.store.write().await;
    let mut matched = false;
    for player in store.players.iter_mut().filter(|p| {
        p.get("app_id") == Some(&json!(app_id))
            && p.get("external_user_id") == Some(&json!(external_user_id))
    }) {
        matched = true;
        let current = player
            .entry("tags")
            .or_insert_with(|| Value::Object(Map::new()));
        if let Value::Object(current) = current {
            for (key, value) in &tags {
                // An empty value deletes the tag.
                if value.as_str() == Some("") {
                    current.remove(key);
                } else {
                    current.insert(key.clone(), value.clone());
                }
            }
        }
    }
    Ok(Json(json!({ "success": matched })))
}

// --- players ---

async fn list_players(
    State(mock): State<Mock>,
    headers: HeaderMap,
    Query(params): Params,
) -> ApiResult<Json<Value>> {
    mock.authorize(&headers, Key::Api)?;
    let app_id = required_app_id(&params)?;
    let (limit, offset) = page(&params);

    let store = mock.store.read().await;
    let players: Vec<&Map<String, Value>> = store
        .players
        .iter()
        .filter(|p| p.get("app_id") == Some(&json!(app_id)))
        .collect();
    let total = players.len();
    let page: Vec<Value> = players
        .into_iter()
        .skip(offset)
        .take(limit)
        .cloned()
        .map(Value::Object)
        .collect();
    Ok(Json(json!({
        "total_count": total,
        "offset": offset,
        "limit": limit,
        "players": page,
    })))
}

async fn create_player(
    State(mock): State<Mock>,
    headers: HeaderMap,
    Json(input): Json<Map<String, Value>>,
) -> ApiResult<Json<Value>> {
    mock.authorize(&headers, Key::Api)?;
    if !input.get("app_id").is_some_and(Value::is_string) {
        return Err(reject(StatusCode::BAD_REQUEST, "app_id not found"));
    }
    if !input.get("device_type").is_some_and(Value::is_number) {
        return Err(reject(StatusCode::BAD_REQUEST, "Device type is required"));
    }

    let id = Uuid::new_v4().to_string();
    let mut player = input;
    player.insert("id".into(), json!(id));
    player.entry("created_at").or_insert_with(|| json!(now()));
    player.entry("session_count").or_insert_with(|| json!(1));

    debug!(%id, "created player");
    mock.store.write().await.players.push(player);
    Ok(Json(json!({ "success": true, "id": id })))
}

async fn get_player(
    State(mock): State<Mock>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Query(params): Params,
) -> ApiResult<Json<Value>> {
    mock.authorize(&headers, Key::Api)?;
    required_app_id(&params)?;
    let store = mock.store.read().await;
    store
        .players
        .iter()
        .find(|p| p.get("id") == Some(&json!(id)))
        .cloned()
        .map(|p| Json(Value::Object(p)))
        .ok_or_else(|| reject(StatusCode::NOT_FOUND, "No player with this id found"))
}

async fn update_player(
    State(mock): State<Mock>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(input): Json<Map<String, Value>>,
) -> ApiResult<Json<Value>> {
    mock.authorize(&headers, Key::Api)?;
    let mut store = mock.store.write().await;
    let player = store
        .players
        .iter_mut()
        .find(|p| p.get("id") == Some(&json!(id)))
        .ok_or_else(|| reject(StatusCode::NOT_FOUND, "No player with this id found"))?;
    merge(player, input);
    player.insert("id".into(), json!(id));
    Ok(Json(json!({ "success": true })))
}

async fn csv_export(
    State(mock): State<Mock>,
    headers: HeaderMap,
    Query(params): Params,
) -> ApiResult<Json<Value>> {
    mock.authorize(&headers, Key::Api)?;
    let app_id = required_app_id(&params)?;
    Ok(Json(json!({
        "csv_file_url": format!("https://onesignal.example/csv_exports/{app_id}/users.csv.gz"),
    })))
}

// --- notifications ---

async fn list_notifications(
    State(mock): State<Mock>,
    headers: HeaderMap,
    Query(params): Params,
) -> ApiResult<Json<Value>> {
    mock.authorize(&headers, Key::Api)?;
    let app_id = required_app_id(&params)?;
    let (limit, offset) = page(&params);
    let kind: Option<i64> = params.get("kind").and_then(|k| k.parse().ok());

    let store = mock.store.read().await;
    let matching: Vec<&Map<String, Value>> = store
        .notifications
        .iter()
        .filter(|n| n.get("app_id") == Some(&json!(app_id)))
        .filter(|n| kind.map_or(true, |k| n.get("kind") == Some(&json!(k))))
        .collect();
    let total = matching.len();
    let page: Vec<Value> = matching
        .into_iter()
        .skip(offset)
        .take(limit)
        .cloned()
        .map(Value::Object)
        .collect();
    Ok(Json(json!({
        "total_count": total,
        "offset": offset,
        "limit": limit,
        "notifications": page,
    })))
}

async fn create_notification(
    State(mock): State<Mock>,
    headers: HeaderMap,
    Json(input): Json<Map<String, Value>>,
) -> ApiResult<Json<Value>> {
    mock.authorize(&headers, Key::Api)?;
    let app_id = match input.get("app_id") {
        Some(Value::String(id)) if !id.is_empty() => id.clone(),
        _ => return Err(reject(StatusCode::BAD_REQUEST, "app_id not found")),
    };
    if !input.contains_key("contents") && !input.contains_key("template_id") {
        return Err(reject(
            StatusCode::BAD_REQUEST,
            "Message Notifications must have English language content",
        ));
    }

    let mut store = mock.store.write().await;
    let recipients = store
        .players
        .iter()
        .filter(|p| p.get("app_id") == Some(&json!(app_id)))
        .count();
    let id = Uuid::new_v4().to_string();
    let external_id = input.get("external_id").cloned();

    let mut notification = input;
    notification.insert("id".into(), json!(id));
    notification.insert("kind".into(), json!(1));
    notification.insert("queued_at".into(), json!(now()));
    notification.insert("send_after".into(), json!(now()));
    notification.insert("remaining".into(), json!(0));
    notification.insert("successful".into(), json!(recipients));
    notification.insert("failed".into(), json!(0));
    notification.insert("errored".into(), json!(0));
    notification.insert("converted".into(), json!(0));
    notification.insert("received".into(), json!(0));
    notification.insert("canceled".into(), json!(false));
    store.notifications.push(notification);

    debug!(%id, recipients, "created notification");
    let mut body = json!({ "id": id, "recipients": recipients });
    if let Some(external_id) = external_id {
        body["external_id"] = external_id;
    }
    if recipients == 0 {
        body["errors"] = json!(["All included players are not subscribed"]);
    }
    Ok(Json(body))
}

async fn get_notification(
    State(mock): State<Mock>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Query(params): Params,
) -> ApiResult<Json<Value>> {
    mock.authorize(&headers, Key::Api)?;
    required_app_id(&params)?;
    let store = mock.store.read().await;
    store
        .notifications
        .iter()
        .find(|n| n.get("id") == Some(&json!(id)))
        .cloned()
        .map(|n| Json(Value::Object(n)))
        .ok_or_else(|| reject(StatusCode::NOT_FOUND, "Notification not found"))
}

async fn cancel_notification(
    State(mock): State<Mock>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Query(params): Params,
) -> ApiResult<Json<Value>> {
    mock.authorize(&headers, Key::Api)?;
    required_app_id(&params)?;
    let mut store = mock.store.write().await;
    let notification = store
        .notifications
        .iter_mut()
        .find(|n| n.get("id") == Some(&json!(id)))
        .ok_or_else(|| reject(StatusCode::NOT_FOUND, "Notification not found"))?;
    notification.insert("canceled".into(), json!(true));
    Ok(Json(json!({ "success": true })))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(token: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, token.parse().unwrap());
        headers
    }

    #[test]
    fn authorize_accepts_matching_key() {
        let mock = Mock::default();
        assert!(mock
            .authorize(&headers("Basic mock-api-key"), Key::Api)
            .is_ok());
        assert!(mock
            .authorize(&headers("Basic mock-user-key"), Key::User)
            .is_ok());
    }

    #[test]
    fn authorize_rejects_wrong_scope() {
        let mock = Mock::default();
        let (status, Json(body)) = mock
            .authorize(&headers("Basic mock-api-key"), Key::User)
            .unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.errors, ["Invalid or missing authentication token"]);
    }

    #[test]
    fn authorize_rejects_missing_header() {
        let mock = Mock::default();
        assert!(mock.authorize(&HeaderMap::new(), Key::Api).is_err());
    }

    #[test]
    fn page_defaults() {
        let params: HashMap<String, String> = [("limit".to_string(), "5".to_string())]
            .into_iter()
            .collect();
        assert_eq!(page(&params), (5, 0));
        assert_eq!(page(&HashMap::new()), (300, 0));
    }

    #[test]
    fn merge_overwrites_keys() {
        let mut target = Map::new();
        target.insert("a".into(), json!(1));
        let mut patch = Map::new();
        patch.insert("a".into(), json!(2));
        patch.insert("b".into(), json!(3));
        merge(&mut target, patch);
        assert_eq!(Value::Object(target), json!({"a": 2, "b": 3}));
    }
}
