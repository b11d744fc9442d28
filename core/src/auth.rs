//! Credential selection.
//!
//! Every endpoint is authorized by exactly one of two keys. `AuthKind` is
//! threaded through `Client::build_request` and resolved here.
//!
//! The header value is `"Basic " + key` with the raw key, not the base64
//! `user:pass` pair of RFC 7617. The API expects that literal form.

use std::fmt;

use crate::error::{ApiError, Result};

/// Which configured key authorizes a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthKind {
    /// App-scoped REST API key: players, notifications.
    App,
    /// Account-scoped user key: app management.
    User,
}

impl fmt::Display for AuthKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthKind::App => f.write_str("app"),
            AuthKind::User => f.write_str("user"),
        }
    }
}

#[derive(Clone)]
pub(crate) struct Credentials {
    api_key: Option<String>,
    user_key: Option<String>,
}

impl Credentials {
    /// Fails unless at least one non-empty key is supplied.
    pub(crate) fn new(api_key: Option<String>, user_key: Option<String>) -> Result<Self> {
        let api_key = api_key.filter(|key| !key.is_empty());
        let user_key = user_key.filter(|key| !key.is_empty());
        if api_key.is_none() && user_key.is_none() {
            return Err(ApiError::Configuration(
                "an api key or a user key is required".to_string(),
            ));
        }
        Ok(Self { api_key, user_key })
    }

    pub(crate) fn select(&self, kind: AuthKind) -> Result<&str> {
        let key = match kind {
            AuthKind::App => self.api_key.as_deref(),
            AuthKind::User => self.user_key.as_deref(),
        };
        key.ok_or_else(|| ApiError::Configuration(format!("no {kind} key configured")))
    }

    /// The `Authorization` header value: `Basic ` followed by the raw key.
    ///
    /// The key is not base64 encoded. The remote API accepts it this way;
    /// confirm with the API owners before changing it.
    pub(crate) fn authorization(&self, kind: AuthKind) -> Result<String> {
        self.select(kind).map(|key| format!("Basic {key}"))
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key.is_some())
            .field("user_key", &self.user_key.is_some())
            .finish()
    }
}
